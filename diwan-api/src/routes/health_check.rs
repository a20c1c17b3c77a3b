use actix_web::{HttpResponse, Responder, get};

/// Liveness probe; deliberately never touches the database.
#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}
