//! Service error types.

use miette::Diagnostic;
use thiserror::Error;
use tracing::{error, warn};

use crate::db::{DbError, DbResult};

/// Outcome of a failed service call.
///
/// Storage failures keep the driver error as their source for logging;
/// their `Display` text never includes it.
#[derive(Error, Diagnostic, Debug)]
pub enum ServiceError {
    #[error("Movie '{id}' not found")]
    #[diagnostic(code(movies::service::not_found))]
    NotFound { id: String },

    #[error("Movie rejected by storage")]
    #[diagnostic(code(movies::service::rejected))]
    Rejected { message: String },

    #[error("Storage failure while {operation}")]
    #[diagnostic(
        code(movies::service::storage),
        help("Check the server logs for the underlying database error.")
    )]
    Storage {
        operation: &'static str,
        #[source]
        source: DbError,
    },
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Classify a repository result, logging failures at the matching level.
pub(crate) fn settle<T>(operation: &'static str, result: DbResult<T>) -> ServiceResult<T> {
    result.map_err(|e| match e {
        DbError::NotFound { id, .. } => {
            warn!(operation, %id, "Movie not found");
            ServiceError::NotFound { id }
        }
        DbError::Constraint { message } => {
            warn!(operation, %message, "Movie rejected by storage");
            ServiceError::Rejected { message }
        }
        other => {
            error!(operation, error = %other, "Storage failure");
            ServiceError::Storage {
                operation,
                source: other,
            }
        }
    })
}
