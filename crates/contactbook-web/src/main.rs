use anyhow::Result;
use clap::Parser;
use config::Config;
use contactbook_api::get_db_context;
use contactbook_api::service::create_service_context;
use log::info;

mod api_docs;
mod config;
mod constants;
mod data;
mod error;
mod handlers;
mod router;
#[cfg(test)]
mod tests;

// MAIN
#[macro_use]
extern crate lazy_static;
lazy_static! {
    pub static ref CONFIG: Config = Config::parse();
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let conf = CONFIG.clone();
    let api_config = conf.api_config();
    info!(
        "Connecting to SurrealDB at {} (namespace: {}, database: {})",
        api_config.surreal_db_connection,
        api_config.surreal_db_namespace,
        api_config.surreal_db_database
    );

    // Initialize the database context
    let db = get_db_context(&api_config).await?;
    let service_context = create_service_context(api_config, db);

    router::rocket_main(conf, service_context)?
        .launch()
        .await?;

    info!("web server was shut down...");
    Ok(())
}
