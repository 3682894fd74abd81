use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// A store-level uniqueness constraint was violated (duplicate email).
    #[error("{message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        // Surface constraint violations as their own variant so callers can
        // map them deterministically instead of matching on message text.
        if let sqlx::Error::Database(ref db_err) = source {
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                return Self::UniqueViolation {
                    message: db_err.message().to_string(),
                    location: ErrorLocation::from(Location::caller()),
                };
            }
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
