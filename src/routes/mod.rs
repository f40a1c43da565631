// Route exports
pub mod matches;
pub mod signals;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use thiserror::Error;

use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(signals::configure),
    );
}

/// Errors surfaced by the HTTP layer. The matching core itself never fails;
/// everything here is a request problem.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: "invalid_request".to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}
