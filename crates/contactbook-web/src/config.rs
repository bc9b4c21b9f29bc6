use clap::{Parser, ValueEnum};

/// Deployment environment, controls how much detail error responses carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(default_value_t = 8000, long, env = "HTTP_PORT")]
    pub http_port: u16,
    #[arg(default_value_t = String::from("127.0.0.1"), long, env = "HTTP_ADDRESS")]
    pub http_address: String,
    #[cfg(not(feature = "embedded-db"))]
    #[arg(
        default_value_t = String::from("ws://localhost:8800"),
        long,
        env = "SURREAL_DB_CONNECTION"
    )]
    pub surreal_db_connection: String,
    #[cfg(feature = "embedded-db")]
    #[arg(
        default_value_t = String::from("rocksdb://data/surrealdb"),
        long,
        env = "SURREAL_DB_CONNECTION"
    )]
    pub surreal_db_connection: String,
    #[arg(default_value_t = String::from("contacts"), long, env = "SURREAL_DB_NAMESPACE")]
    pub surreal_db_namespace: String,
    #[arg(default_value_t = String::from("contacts"), long, env = "SURREAL_DB_DATABASE")]
    pub surreal_db_database: String,
    #[arg(value_enum, default_value = "development", long, env = "APP_ENV")]
    pub environment: Environment,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn api_config(&self) -> contactbook_api::Config {
        contactbook_api::Config {
            surreal_db_connection: self.surreal_db_connection.clone(),
            surreal_db_namespace: self.surreal_db_namespace.clone(),
            surreal_db_database: self.surreal_db_database.clone(),
        }
    }
}
