use thiserror::Error;

/// Why a quote fetch failed. The view treats every variant the same way.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("quote service returned status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("malformed quote payload: {0}")]
    MalformedPayload(String),
}
