//! Configuration for the homework watch service
//!
//! All behavior is driven by environment variables and the constants below;
//! there are no command line flags.

use std::time::Duration;

use crate::{Result, WatchError};

/// Review API endpoint used when `HOMEWORK_ENDPOINT` is not set
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Pause between poll cycles when `POLL_INTERVAL_SECONDS` is not set
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 600;

/// How the `from_date` cursor moves between poll cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPolicy {
    /// Re-query from the process start time on every cycle
    Rescan,
    /// Adopt the API's returned `current_date` as the next `from_date`
    Advance,
}

/// Immutable service configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the review API
    pub api_token: String,
    /// Telegram bot token
    pub bot_token: String,
    /// Telegram chat to notify
    pub chat_id: String,
    /// Review API endpoint
    pub endpoint: String,
    /// Pause between poll cycles
    pub poll_interval: Duration,
    /// Cursor advancement policy
    pub cursor_policy: CursorPolicy,
}

impl Config {
    /// Build the configuration from process environment variables.
    ///
    /// `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN` and `TELEGRAM_CHAT_ID` are
    /// required; the rest fall back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_token = require(&lookup, "PRACTICUM_TOKEN")?;
        let bot_token = require(&lookup, "TELEGRAM_TOKEN")?;
        let chat_id = require(&lookup, "TELEGRAM_CHAT_ID")?;

        let endpoint = lookup("HOMEWORK_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let poll_interval = match lookup("POLL_INTERVAL_SECONDS") {
            Some(raw) => {
                let seconds: u64 = raw.parse().map_err(|_| {
                    WatchError::Config(format!("POLL_INTERVAL_SECONDS is not a number: {raw:?}"))
                })?;
                Duration::from_secs(seconds)
            }
            None => Duration::from_secs(DEFAULT_POLL_INTERVAL_SECONDS),
        };

        let cursor_policy = match lookup("CURSOR_POLICY").as_deref() {
            None | Some("rescan") => CursorPolicy::Rescan,
            Some("advance") => CursorPolicy::Advance,
            Some(other) => {
                return Err(WatchError::Config(format!(
                    "CURSOR_POLICY must be \"rescan\" or \"advance\", got {other:?}"
                )))
            }
        };

        Ok(Self {
            api_token,
            bot_token,
            chat_id,
            endpoint,
            poll_interval,
            cursor_policy,
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String> {
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(WatchError::MissingCredential(name)),
    }
}
