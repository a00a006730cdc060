//! Telegram notification client

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::io::HttpClient;
use crate::notifier::Notifier;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Bot API response envelope; `ok: false` means the message was refused
#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    description: Option<String>,
}

/// Telegram sendMessage notifier
pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created TelegramNotifier for chat {}", config.chat_id);
        Self {
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn type_name(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, text: &str) -> crate::Result<()> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_BASE, self.bot_token);
        let params = [("chat_id", self.chat_id.as_str()), ("text", text)];

        tracing::debug!("Sending Telegram message to chat {}", self.chat_id);

        let response = self.http.post_form(&url, &params).await?;

        if response.status != 200 {
            return Err(crate::WatchError::Notifier(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        match serde_json::from_str::<TelegramResponse>(&response.body) {
            Ok(parsed) if parsed.ok => Ok(()),
            Ok(parsed) => Err(crate::WatchError::Notifier(format!(
                "Telegram API refused the message: {}",
                parsed.description.unwrap_or_else(|| "no description".to_string())
            ))),
            Err(e) => Err(crate::WatchError::Notifier(format!(
                "Unexpected Telegram API response: {}",
                e
            ))),
        }
    }
}
