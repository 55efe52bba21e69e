#![allow(non_snake_case)]

mod cli;

use std::env;
use std::sync::Arc;

use medSchedule::config::AppConfig;
use medSchedule::runtime::start_session;
use medSchedule::service::notifier::ConsoleNotifier;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match env::var("CONFIG_FILE") {
        Ok(path) => AppConfig::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Failed to read CONFIG_FILE {}: {}", path, e);
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    };

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let engine = match start_session(&settings, Arc::new(ConsoleNotifier)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Failed to start session: {}", e);
            return;
        }
    };
    cli::cli(engine).await;
}
