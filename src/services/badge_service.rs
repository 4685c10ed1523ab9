use sea_orm::{DatabaseConnection, DbErr, EntityTrait, JoinType, QuerySelect, RelationTrait};
use url::Url;

use crate::error::ApiError;
use crate::models::{attendee, badge::BadgeRecord, event};

pub struct BadgeService;

impl BadgeService {
    /// Récupère nom + email du participant et le titre de son événement.
    /// Une seule requête (INNER JOIN), la relation participant -> événement est obligatoire.
    pub async fn find_badge(
        db: &DatabaseConnection,
        attendee_id: i32,
    ) -> Result<Option<BadgeRecord>, DbErr> {
        attendee::Entity::find_by_id(attendee_id)
            .select_only()
            .column(attendee::Column::Name)
            .column(attendee::Column::Email)
            .column_as(event::Column::Title, "event_title")
            .join(JoinType::InnerJoin, attendee::Relation::Event.def())
            .into_model::<BadgeRecord>()
            .one(db)
            .await
    }

    /// Construit <scheme>://<host>/attendees/<id>/check-in
    /// `host` peut contenir un port (ex: localhost:8080)
    pub fn check_in_url(scheme: &str, host: &str, attendee_id: i32) -> Result<Url, ApiError> {
        let base = Url::parse(&format!("{}://{}", scheme, host))
            .map_err(|e| ApiError::Internal(format!("invalid base url {}://{}: {}", scheme, host, e)))?;

        base.join(&format!("/attendees/{}/check-in", attendee_id))
            .map_err(|e| ApiError::Internal(format!("invalid check-in path: {}", e)))
    }
}
