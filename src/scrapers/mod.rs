//! Fetching candidate name strings from source pages.

pub mod config;
mod http_client;
mod section;

pub use config::{default_sources, DictionarySource};
pub use http_client::{HttpClient, USER_AGENT};
pub use section::extract_section;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("invalid URL {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("anchor #{0} not found on page")]
    AnchorNotFound(String),
    #[error("invalid tag selector {0}")]
    Selector(String),
}

/// Supplies the raw candidate strings for a dictionary, in page order.
#[async_trait]
pub trait NameSource: Send + Sync {
    async fn fetch_candidates(&self, source: &DictionarySource) -> Result<Vec<String>, ScrapeError>;
}

/// Scrapes one section of a wiki page per dictionary.
pub struct WikiScraper {
    client: HttpClient,
}

impl WikiScraper {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NameSource for WikiScraper {
    async fn fetch_candidates(&self, source: &DictionarySource) -> Result<Vec<String>, ScrapeError> {
        info!("Fetching {} from {}", source.name, source.url);
        let html = self.client.get_text(&source.url).await?;
        let texts = extract_section(&html, &source.begin_id, &source.end_id, &source.tag)?;
        info!("Found {} <{}> candidates for {}", texts.len(), source.tag, source.name);
        Ok(texts)
    }
}
