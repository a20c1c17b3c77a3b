use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor};
use thiserror::Error;

/// A poem row as stored in `app.poems`.
#[derive(Debug, FromRow)]
pub struct Poem {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub body: String,
    pub category_id: Option<i64>,
    pub published_at: DateTime<Utc>,
}

/// A listing row without the full poem body.
#[derive(Debug, FromRow)]
pub struct PoemSummary {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub category_id: Option<i64>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum PoemsDbError {
    #[error("Error while interacting with Postgres for poems: {0}")]
    Database(#[from] sqlx::Error),
}

/// Reads one published poem by its slug.
///
/// Poems with a `published_at` in the future are drafts and stay invisible.
pub async fn read_published_poem_by_slug<'c, E>(
    executor: E,
    slug: &str,
) -> Result<Option<Poem>, PoemsDbError>
where
    E: PgExecutor<'c>,
{
    let poem = sqlx::query_as::<_, Poem>(
        r#"
        select id, slug, title, body, category_id, published_at
        from app.poems
        where slug = $1 and published_at <= now()
        "#,
    )
    .bind(slug)
    .fetch_optional(executor)
    .await?;

    Ok(poem)
}

/// Lists published poems, newest first.
///
/// Both filters are optional: `category` restricts to one category slug,
/// `search` matches a case-insensitive title substring.
pub async fn read_published_poems<'c, E>(
    executor: E,
    category: Option<&str>,
    search: Option<&str>,
) -> Result<Vec<PoemSummary>, PoemsDbError>
where
    E: PgExecutor<'c>,
{
    let poems = sqlx::query_as::<_, PoemSummary>(
        r#"
        select p.id, p.slug, p.title, p.category_id, p.published_at
        from app.poems p
        left join app.categories c on c.id = p.category_id
        where p.published_at <= now()
          and ($1::text is null or c.slug = $1)
          and ($2::text is null or p.title ilike '%' || $2 || '%')
        order by p.published_at desc
        "#,
    )
    .bind(category)
    .bind(search)
    .fetch_all(executor)
    .await?;

    Ok(poems)
}
