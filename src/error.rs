use thiserror::Error;

/// Library error type.
///
/// Contract and fetch failures are absorbed where they happen (logged, then
/// replaced by a fallback value), so `ContractCall` and `MetadataFetch` only
/// travel between a capability implementation and the service that called it.
/// The variants that actually cross the library boundary from pipeline entry
/// points are `InvalidInput` and `Cancelled`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Contract call error: {0}")]
    ContractCall(String),

    #[error("Metadata fetch error: {0}")]
    MetadataFetch(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Pipeline run cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True for the caller-visible validation class.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
