pub mod contact_service;
pub mod import;

use super::Config;
use crate::persistence::DbContext;
use contact_service::{ContactService, ContactServiceApi};
use contactbook_core::RowError;
use std::sync::Arc;
use thiserror::Error;

/// Generic result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic error type
#[derive(Debug, Error)]
pub enum Error {
    /// all errors originating from the persistence layer
    #[error("Persistence error: {0}")]
    Persistence(#[from] contactbook_persistence::Error),

    /// errors that currently return early http status code Status::NotFound
    #[error("Contact not found.")]
    NotFound,

    /// errors that stem from validation
    #[error("Validation Error: {0}")]
    Validation(String),

    /// an import request without an uploaded file and without a usable body
    #[error("No file uploaded or data provided.")]
    NoFileOrData,

    /// at least one row of an import batch is invalid, the first failing row is displayed
    #[error("{}", .0.first().map(|e| e.to_string()).unwrap_or_default())]
    RowValidation(Vec<RowError>),

    /// the uploaded file could not be read as a workbook
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// std io
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A dependency container for all services that are used by the application
#[derive(Clone)]
pub struct ServiceContext {
    pub config: Config,
    pub contact_service: Arc<dyn ContactServiceApi>,
}

/// building up the service context dependencies here for now. Later we can modularize this
/// and make it more flexible.
pub fn create_service_context(config: Config, db: DbContext) -> ServiceContext {
    let contact_service = Arc::new(ContactService::new(db.contact_store));
    ServiceContext {
        config,
        contact_service,
    }
}
