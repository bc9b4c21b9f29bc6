mod constants;
pub mod data;
mod persistence;
pub mod service;
#[cfg(test)]
mod tests;
pub mod util;

pub use constants::MAX_FILE_SIZE_BYTES;
pub use persistence::DbContext;
pub use persistence::get_db_context;

#[derive(Debug, Clone)]
pub struct Config {
    pub surreal_db_connection: String,
    pub surreal_db_namespace: String,
    pub surreal_db_database: String,
}
