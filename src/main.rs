//! rustbank - service entry point
//!
//! Startup order: config, logging, database (pool + schema), HTTP server.

use std::sync::Arc;

use rustbank::config::AppConfig;
use rustbank::db::Database;
use rustbank::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);

    // Guard must stay alive for the file appender to flush
    let _guard = logging::init_logging(&config);

    tracing::info!(env = %env, version = env!("GIT_HASH"), "rustbank starting");

    let db = match Database::connect(&config.postgres_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("FATAL: Failed to connect to PostgreSQL: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db.init_schema().await {
        eprintln!("FATAL: Failed to initialize database schema: {}", e);
        std::process::exit(1);
    }

    gateway::run_server(&config, db).await;
}
