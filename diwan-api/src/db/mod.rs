//! Query modules for the content database.
//!
//! Functions are generic over [`sqlx::PgExecutor`] so they can run against
//! a request's pool or an open transaction.

pub mod categories;
pub mod poems;
