//! Homework Watch - homework review status notification service
//!
//! Polls the review API, detects status changes for the most recent
//! submission, and relays them to a Telegram chat.

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod notifier;
pub mod response;
pub mod review_client;
pub mod state;
pub mod telegram;
pub mod verdict;

pub use config::Config;
pub use error::{Result, WatchError};

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio_util::sync::CancellationToken;

use crate::engine::Engine;
use crate::io::ReqwestHttpClient;
use crate::notifier::Notifier;
use crate::review_client::ReviewClient;
use crate::telegram::TelegramNotifier;

/// Run the homework watch service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let cancel = CancellationToken::new();

    let client = ReviewClient::new(&config, Arc::clone(&http));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(&config, http));
    let engine = Engine::new(client, notifier, &config, cancel.clone());

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let start_cursor = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;

    tracing::info!(
        "Homework watch started, polling every {:?}",
        config.poll_interval
    );

    // Run the poll loop (blocks until cancelled)
    engine.run(start_cursor).await;

    tracing::info!("Homework watch stopped");

    Ok(())
}
