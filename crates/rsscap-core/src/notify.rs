//! Telegram run notifications.
//!
//! Optional collaborator: configured purely from `TELEGRAM_BOT_TOKEN` and
//! `TELEGRAM_CHAT_ID`, silently disabled when either is missing. A failed
//! notification never fails the run.

use serde_json::json;
use std::env;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),

    #[error("Telegram API returned HTTP {code}: {body}")]
    Api { code: u32, body: String },

    #[error("payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Telegram Bot API client for run summaries.
pub struct TelegramNotifier {
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    /// Builds a notifier from `TELEGRAM_BOT_TOKEN` / `TELEGRAM_CHAT_ID`.
    /// Returns None when either is missing or empty.
    pub fn from_env() -> Option<Self> {
        let bot_token = env::var("TELEGRAM_BOT_TOKEN").ok().filter(|t| !t.is_empty())?;
        let chat_id = env::var("TELEGRAM_CHAT_ID").ok().filter(|c| !c.is_empty())?;
        Some(Self::new(bot_token, chat_id))
    }

    /// Send a Markdown-formatted text message to the configured chat.
    pub fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let payload = serde_json::to_vec(&json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
        }))?;

        let mut response: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&url)?;
        easy.post(true)?;
        easy.timeout(REQUEST_TIMEOUT)?;
        let mut headers = curl::easy::List::new();
        headers.append("Content-Type: application/json")?;
        easy.http_headers(headers)?;
        easy.post_fields_copy(&payload)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(NotifyError::Api {
                code,
                body: String::from_utf8_lossy(&response).into_owned(),
            });
        }
        Ok(())
    }
}
