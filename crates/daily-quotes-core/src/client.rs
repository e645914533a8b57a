use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

use crate::error::ProviderError;
use crate::quote::QuoteRecord;

pub const DEFAULT_BASE_URL: &str = "https://api.quotable.io";

#[derive(Deserialize)]
struct QuoteResponse {
    content: Option<String>,
    author: Option<String>,
    tags: Option<Vec<String>>,
}

/// HTTP client for the random quote endpoint
#[derive(Clone)]
pub struct QuoteClient {
    client: Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("daily-quotes/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one random quote, filtered by `tag` when one is given.
    /// The tag is passed through as-is; the service decides what an unknown tag means.
    pub async fn fetch_quote(&self, tag: Option<&str>) -> Result<QuoteRecord, ProviderError> {
        let url = format!("{}/random", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(tag) = tag.filter(|t| !t.is_empty()) {
            request = request.query(&[("tags", tag)]);
        }

        tracing::debug!(%url, ?tag, "fetching quote");

        let response = request.send().await.map_err(ProviderError::Network)?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus(response.status()));
        }

        let body = response.text().await.map_err(ProviderError::Network)?;
        parse_quote(&body)
    }
}

fn parse_quote(body: &str) -> Result<QuoteRecord, ProviderError> {
    let raw: QuoteResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::MalformedPayload(e.to_string()))?;

    let content = raw
        .content
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ProviderError::MalformedPayload("missing content".to_string()))?;
    let author = raw
        .author
        .ok_or_else(|| ProviderError::MalformedPayload("missing author".to_string()))?;

    Ok(QuoteRecord {
        content,
        author,
        tags: raw.tags.unwrap_or_default(),
    })
}
