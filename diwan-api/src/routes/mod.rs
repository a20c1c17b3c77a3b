use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

pub mod categories;
pub mod health_check;
pub mod poems;

/// Client-facing message used for every database-related failure.
pub const DATABASE_UNAVAILABLE_ERROR: &str = "Database unavailable";

/// Envelope wrapping every successful API response.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessBody<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body shape shared by every API error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success: false,
            error: error.into(),
            status: status.as_u16(),
        }
    }
}

/// The normalized response returned whenever the database cannot serve a
/// request, regardless of the underlying cause.
pub fn database_unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(ErrorBody::new(
        DATABASE_UNAVAILABLE_ERROR,
        StatusCode::SERVICE_UNAVAILABLE,
    ))
}
