use thiserror::Error;

use gala_domain::LedgerError;

/// Expected failures recovered at the menu loop. Only `Internal` carries
/// a hard error (I/O); everything else is a message for the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("capacity: {0}")]
    Capacity(String),
    #[error("access denied: {0}")]
    Auth(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InvalidQuantity => AppError::Validation(err.to_string()),
            LedgerError::Insufficient { .. } => AppError::Capacity(err.to_string()),
            LedgerError::TotalBelowAllocated { .. } => AppError::Validation(err.to_string()),
        }
    }
}
