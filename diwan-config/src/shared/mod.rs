//! Shared configuration types for the diwan services.

mod database;
mod sentry;

pub use database::{DatabaseConfig, DatabaseConfigError};
pub use sentry::SentryConfig;
