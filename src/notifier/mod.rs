use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::info;

const BROADCAST_URL: &str = "https://api.line.me/v2/bot/message/broadcast";
const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Serialize)]
struct BroadcastPayload {
    messages: Vec<TextMessage>,
}

#[derive(Debug, Serialize)]
struct TextMessage {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

/// Delivers one text message to all followers of the LINE bot.
pub struct LineNotifier {
    client: Client,
    token: Option<String>,
}

impl LineNotifier {
    pub fn new(token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("failed to build http client");

        Self { client, token }
    }

    /// The token is checked here rather than at startup so that runs which
    /// end up with nothing to say never need the credential.
    pub async fn send_broadcast(&self, text: &str) -> Result<()> {
        let token = self.token.as_deref().context("LINE_TOKEN is not set")?;

        let payload = BroadcastPayload {
            messages: vec![TextMessage {
                kind: "text",
                text: text.to_string(),
            }],
        };

        let response = self
            .client
            .post(BROADCAST_URL)
            .header("Authorization", format!("Bearer {}", token))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("LINE broadcast failed {}: {}", status, body);
        }

        info!("LINE notification sent");
        Ok(())
    }
}
