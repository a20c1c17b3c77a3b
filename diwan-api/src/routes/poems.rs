use actix_web::{
    HttpResponse, Responder, ResponseError, get,
    http::StatusCode,
    web::{Json, Path, Query},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::poems::{self, PoemsDbError};
use crate::db_guard::Db;
use crate::routes::{DATABASE_UNAVAILABLE_ERROR, ErrorBody, SuccessBody, database_unavailable};

#[derive(Debug, Error)]
pub enum PoemError {
    #[error("The poem with slug {0} was not found")]
    PoemNotFound(String),

    #[error(transparent)]
    PoemsDb(#[from] PoemsDbError),
}

impl PoemError {
    pub fn to_message(&self) -> String {
        match self {
            // Do not expose internal database details in error messages
            PoemError::PoemsDb(_) => DATABASE_UNAVAILABLE_ERROR.to_string(),
            e => e.to_string(),
        }
    }
}

impl ResponseError for PoemError {
    fn status_code(&self) -> StatusCode {
        match self {
            PoemError::PoemsDb(_) => StatusCode::SERVICE_UNAVAILABLE,
            PoemError::PoemNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // Database failures keep the uniform unavailability contract.
            PoemError::PoemsDb(_) => database_unavailable(),
            _ => HttpResponse::build(self.status_code())
                .json(ErrorBody::new(self.to_message(), self.status_code())),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadPoemResponse {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub category_id: Option<i64>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PoemSummaryResponse {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub category_id: Option<i64>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReadPoemsQuery {
    /// Restrict the listing to one category slug.
    pub category: Option<String>,
    /// Case-insensitive title substring filter.
    pub search: Option<String>,
}

#[get("/poems")]
pub async fn read_all_poems(
    db: Db,
    query: Query<ReadPoemsQuery>,
) -> Result<impl Responder, PoemError> {
    let query = query.into_inner();

    let poems = poems::read_published_poems(
        db.pool(),
        query.category.as_deref(),
        query.search.as_deref(),
    )
    .await?
    .into_iter()
    .map(|poem| PoemSummaryResponse {
        id: poem.id,
        slug: poem.slug,
        title: poem.title,
        category_id: poem.category_id,
        published_at: poem.published_at,
    })
    .collect::<Vec<_>>();

    Ok(Json(SuccessBody::new(poems)))
}

#[get("/poems/{poem_slug}")]
pub async fn read_poem(db: Db, poem_slug: Path<String>) -> Result<impl Responder, PoemError> {
    let poem_slug = poem_slug.into_inner();

    let response = poems::read_published_poem_by_slug(db.pool(), &poem_slug)
        .await?
        .map(|poem| ReadPoemResponse {
            id: poem.id,
            slug: poem.slug,
            title: poem.title,
            body: poem.body,
            category_id: poem.category_id,
            published_at: poem.published_at,
        })
        .ok_or(PoemError::PoemNotFound(poem_slug))?;

    Ok(Json(SuccessBody::new(response)))
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use serde_json::{Value, json};

    use super::*;

    #[actix_web::test]
    async fn not_found_renders_the_shared_error_body() {
        let error = PoemError::PoemNotFound("qasida".to_string());

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "The poem with slug qasida was not found",
                "status": 404
            })
        );
    }

    #[actix_web::test]
    async fn database_failures_render_the_normalized_body() {
        let error = PoemError::PoemsDb(PoemsDbError::Database(sqlx::Error::PoolClosed));

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "Database unavailable",
                "status": 503
            })
        );
    }
}
