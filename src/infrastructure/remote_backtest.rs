use crate::config::Config;
use crate::domain::backtest::types::{BacktestRequest, BacktestResult};
use crate::domain::ports::BacktestService;
use crate::infrastructure::core::http_client_factory::{HttpClientFactory, join_url};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

pub const BACKTEST_PATH: &str = "/api/trading/backtest";

/// Most characters of an undecodable body kept in the error message.
const BODY_EXCERPT_CHARS: usize = 200;

/// Backtest service backed by the fund backend's REST API.
pub struct HttpBacktestService {
    client: Client,
    endpoint: String,
}

impl HttpBacktestService {
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            client,
            endpoint: join_url(base_url, BACKTEST_PATH),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let client =
            HttpClientFactory::create_client(config.http_timeout(), config.http_connect_timeout());
        Self::new(&config.api_url, client)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BacktestService for HttpBacktestService {
    async fn run_backtest(&self, request: &BacktestRequest) -> Result<BacktestResult> {
        debug!(
            "HttpBacktestService: POST {} symbol={} strategy={} days={}",
            self.endpoint, request.symbol, request.strategy, request.days
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .context("Failed to send backtest request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Backtest API returned HTTP {}", status);
        }

        let text = response
            .text()
            .await
            .context("Failed to read backtest response text")?;
        serde_json::from_str(&text).map_err(|e| {
            debug!("HttpBacktestService: undecodable body: {}", text);
            anyhow::anyhow!(
                "Failed to decode backtest result: {}. Body: {}",
                e,
                body_excerpt(&text)
            )
        })
    }
}

fn body_excerpt(text: &str) -> String {
    match text.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}... ({} bytes)", &text[..cut], text.len()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_excerpt_keeps_short_bodies() {
        let body = r#"{"error": "insufficient_data"}"#;
        assert_eq!(body_excerpt(body), body);
    }

    #[test]
    fn test_body_excerpt_truncates_long_bodies() {
        let body = "é".repeat(1_000);
        let excerpt = body_excerpt(&body);
        assert!(excerpt.starts_with(&"é".repeat(BODY_EXCERPT_CHARS)));
        assert!(excerpt.ends_with("... (2000 bytes)"));
        assert!(excerpt.chars().count() < 300);
    }
}
