pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod quote;
pub mod share;
pub mod state;

// Re-export main types for convenience
pub use client::QuoteClient;
pub use config::Config;
pub use error::ProviderError;
pub use history::{History, HISTORY_CAP};
pub use quote::{QuoteRecord, Tag};
pub use share::{copy_fallback, share_native, ShareOutcome, ShareTarget};
pub use state::{AppState, Effect, Intent, Lifecycle, RequestId};
