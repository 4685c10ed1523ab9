// pour la réponse structurée du badge
use sea_orm::FromQueryResult;
use serde::Serialize;
use validator::Validate;

/// Ligne lue en BD : participant + titre de l'événement (jointure)
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct BadgeRecord {
    pub name: String,
    pub email: String,
    pub event_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct Badge {
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(rename = "eventTitle")]
    pub event_title: String,
    #[serde(rename = "checkInURL")]
    #[validate(url)]
    pub check_in_url: String,
}

// { "badge": { ... } }
#[derive(Debug, Serialize)]
pub struct BadgeResponse {
    pub badge: Badge,
}

impl Badge {
    pub fn new(record: BadgeRecord, check_in_url: String) -> Self {
        Badge {
            name: record.name,
            email: record.email,
            event_title: record.event_title,
            check_in_url,
        }
    }
}
