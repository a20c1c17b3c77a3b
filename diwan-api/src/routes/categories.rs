use actix_web::{HttpResponse, Responder, ResponseError, get, http::StatusCode, web::Json};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::categories::{self, CategoriesDbError};
use crate::db_guard::Db;
use crate::routes::{SuccessBody, database_unavailable};

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error(transparent)]
    CategoriesDb(#[from] CategoriesDbError),
}

impl ResponseError for CategoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            CategoryError::CategoriesDb(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        database_unavailable()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadCategoryResponse {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

#[get("/categories")]
pub async fn read_all_categories(db: Db) -> Result<impl Responder, CategoryError> {
    let categories = categories::read_all_categories(db.pool())
        .await?
        .into_iter()
        .map(|category| ReadCategoryResponse {
            id: category.id,
            slug: category.slug,
            name: category.name,
        })
        .collect::<Vec<_>>();

    Ok(Json(SuccessBody::new(categories)))
}
