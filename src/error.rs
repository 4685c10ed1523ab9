// ============================================================================
// ERREURS API
// ============================================================================
//
// Description:
//   Erreurs renvoyées par les routes. Chaque variante est convertie en
//   réponse JSON { "message": "..." } avec le bon code HTTP.
//
// Points d'attention:
//   - Les erreurs serveur (BD, interne) ne renvoient jamais le détail au
//     client : le détail part dans les logs, le client reçoit un message fixe
//   - AttendeeNotFound est un 400 (et non 404), comme l'API d'origine
//
// ============================================================================

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "Internal server error.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Attendee not found.")]
    AttendeeNotFound,

    #[error("Invalid attendee id.")]
    InvalidAttendeeId(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ApiError {
    /// Message exposé au client
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AttendeeNotFound | Self::InvalidAttendeeId(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Database(e) => tracing::error!(error = %e, "database query failed"),
            Self::Internal(e) => tracing::error!(error = %e, "internal error"),
            Self::InvalidAttendeeId(detail) => tracing::debug!(%detail, "rejected attendee id"),
            Self::AttendeeNotFound => {}
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.public_message(),
        })
    }
}
