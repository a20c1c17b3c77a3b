use sqlx::{FromRow, PgExecutor};
use thiserror::Error;

/// A category row as stored in `app.categories`.
#[derive(Debug, FromRow)]
pub struct Category {
    pub id: i64,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum CategoriesDbError {
    #[error("Error while interacting with Postgres for categories: {0}")]
    Database(#[from] sqlx::Error),
}

pub async fn read_all_categories<'c, E>(executor: E) -> Result<Vec<Category>, CategoriesDbError>
where
    E: PgExecutor<'c>,
{
    let categories = sqlx::query_as::<_, Category>(
        r#"
        select id, slug, name
        from app.categories
        order by name
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(categories)
}
