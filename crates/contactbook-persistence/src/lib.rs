pub mod constants;
pub mod contact;
pub mod db;

use thiserror::Error;

/// Generic persistence result type
pub type Result<T> = std::result::Result<T, Error>;

/// Generic persistence error type
#[derive(Debug, Error)]
pub enum Error {
    /// connectivity errors, constraint violations and any other error reported by SurrealDB
    #[error("SurrealDB error: {0}")]
    SurrealDb(#[from] surrealdb::Error),

    #[error("Failed to insert into database: {0}")]
    InsertFailed(String),

    #[error("no such {0} entity {1}")]
    NoSuchEntity(String, String),

    #[error("invalid {0} record: {1}")]
    InvalidRecord(String, String),
}

pub use contact::{ContactSearch, ContactSearchResult, ContactStoreApi};
pub use db::{SurrealDbConfig, contact::SurrealContactStore, get_surreal_db};
