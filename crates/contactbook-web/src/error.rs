use contactbook_api::service;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the contactbook API service layer
    #[error("Service error: {0}")]
    Service(#[from] service::Error),
}
