//! Minimal HTTP client for page fetches.

use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

use super::ScrapeError;

pub const USER_AGENT: &str = concat!("imadic/", env!("CARGO_PKG_VERSION"));

/// HTTP client that spaces consecutive requests by a fixed delay.
pub struct HttpClient {
    client: Client,
    request_delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl HttpClient {
    pub fn new(
        user_agent: &str,
        timeout: Duration,
        request_delay: Duration,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            request_delay,
            last_request: Mutex::new(None),
        })
    }

    /// GET `url` and return the body as text. Non-ASCII URLs are
    /// percent-encoded before sending.
    pub async fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        let parsed = Url::parse(url).map_err(|source| ScrapeError::Url {
            url: url.to_string(),
            source,
        })?;

        self.wait_turn().await;

        let start = Instant::now();
        let response = self.client.get(parsed.clone()).send().await?;
        let status = response.status();
        debug!(
            "GET {} -> {} in {}ms",
            parsed,
            status.as_u16(),
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: parsed.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn wait_turn(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.request_delay {
                tokio::time::sleep(self.request_delay - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
