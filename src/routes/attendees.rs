use actix_web::{get, web, HttpRequest, HttpResponse};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;
use crate::models::badge::{Badge, BadgeResponse};
use crate::services::badge_service::BadgeService;

#[derive(Debug, Deserialize)]
pub struct BadgePath {
    #[serde(rename = "attendeeId")]
    pub attendee_id: i32,
}

/// GET /attendees/{attendeeId}/badge - Badge d'un participant
#[get("/{attendeeId}/badge")]
pub async fn get_attendee_badge(
    req: HttpRequest,
    path: web::Path<BadgePath>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ApiError> {
    let attendee_id = path.attendee_id;

    // 1. Participant + titre de l'événement
    let record = BadgeService::find_badge(db.get_ref(), attendee_id)
        .await?
        .ok_or_else(|| {
            tracing::info!(attendee_id, "attendee not found");
            ApiError::AttendeeNotFound
        })?;

    // 2. URL de check-in à partir du protocole + host de la requête
    let check_in_url = {
        let connection = req.connection_info();
        BadgeService::check_in_url(connection.scheme(), connection.host(), attendee_id)?
    };

    // 3. Vérifier la forme de la réponse avant envoi
    let badge = Badge::new(record, check_in_url.to_string());
    badge
        .validate()
        .map_err(|e| ApiError::Internal(format!("badge for attendee {} is invalid: {}", attendee_id, e)))?;

    tracing::debug!(attendee_id, "badge served");
    Ok(HttpResponse::Ok().json(BadgeResponse { badge }))
}

pub fn attendees_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attendees")
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                ApiError::InvalidAttendeeId(err.to_string()).into()
            }))
            .service(get_attendee_badge),
    );
}
