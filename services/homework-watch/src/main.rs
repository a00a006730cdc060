//! Homework Watch daemon
//!
//! Startup: load the environment, initialize logging to stdout and an
//! append-mode log file, build the configuration, and hand off to the poll
//! loop. There are no command line flags.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use homework_watch::Config;

const DEFAULT_LOG_FILE: &str = "homework-watch.log";

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_file(true).with_line_number(true))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let log_file = std::env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    init_logging(Path::new(&log_file))?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}. The service will not start.");
            std::process::exit(1);
        }
    };

    homework_watch::run(config).await?;

    Ok(())
}
