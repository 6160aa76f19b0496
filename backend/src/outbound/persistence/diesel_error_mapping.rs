//! Diesel and pool error mapping for the user store.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserStoreError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> UserStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserStoreError::connection(message)
        }
    }
}

/// Map Diesel failures; unique violations become `DuplicateUsername` for
/// `username`.
pub(crate) fn map_diesel_error(error: DieselError, username: Option<&str>) -> UserStoreError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match (error, username) {
        (DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _), Some(username)) => {
            UserStoreError::duplicate_username(username)
        }
        (DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _), _) => {
            UserStoreError::connection("database connection error")
        }
        (DieselError::NotFound, _) => UserStoreError::query("record not found"),
        (DieselError::QueryBuilderError(_), _) => UserStoreError::query("database query error"),
        _ => UserStoreError::query("database error"),
    }
}
