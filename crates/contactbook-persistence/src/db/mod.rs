use super::Result;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
};

pub mod contact;

/// Connection settings for SurrealDB
#[derive(Debug, Clone)]
pub struct SurrealDbConfig {
    pub connection_string: String,
    pub namespace: String,
    pub database: String,
}

impl SurrealDbConfig {
    pub fn new(connection_string: &str, namespace: &str, database: &str) -> Self {
        Self {
            connection_string: connection_string.to_owned(),
            namespace: namespace.to_owned(),
            database: database.to_owned(),
        }
    }
}

pub async fn get_surreal_db(config: &SurrealDbConfig) -> Result<Surreal<Any>> {
    let db = connect(config.connection_string.as_str()).await?;
    db.use_ns(config.namespace.as_str())
        .use_db(config.database.as_str())
        .await?;
    Ok(db)
}

#[cfg(test)]
pub async fn get_memory_db(namespace: &str, database: &str) -> Result<Surreal<Any>> {
    let db = connect("mem://").await?;
    db.use_ns(namespace).use_db(database).await?;
    Ok(db)
}
