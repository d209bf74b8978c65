pub mod attendance;
pub mod departments;
pub mod personnel;
pub mod reports;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::error;

use crate::error::Error;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::AlreadyCheckedIn { .. } => StatusCode::CONFLICT,
            Error::NoOpenSession { .. } | Error::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Storage(_) | Error::Serialization(_) | Error::Export(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(json!({ "message": message }))
    }
}

#[cfg(test)]
mod tests;
