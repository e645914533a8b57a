//! UI-agnostic view state for the quote viewer
//!
//! `AppState::apply` is the only place state changes. It returns an `Effect` when the
//! caller has to do something outside the state (fetch a quote, share text); results
//! of that work come back as further intents.

use std::fmt;

use crate::error::ProviderError;
use crate::history::History;
use crate::quote::{QuoteRecord, Tag};
use crate::share::ShareOutcome;

/// Identifies one issued fetch so late responses can be told apart from current ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Status of the most recently issued fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading { request: RequestId },
    Loaded(QuoteRecord),
    Failed,
}

#[derive(Debug)]
pub enum Intent {
    RequestQuote(Option<Tag>),
    ProviderSucceeded(RequestId, QuoteRecord),
    ProviderFailed(RequestId, ProviderError),
    SelectTag(Tag),
    /// Fetch again with the current tag filter; ignored while loading
    Refresh,
    ToggleFavorite,
    ToggleHistoryPanel,
    CloseHistoryPanel,
    HistoryCursorUp,
    HistoryCursorDown,
    SelectHistoryCursor,
    SelectFromHistory(usize),
    Share,
    ShareCompleted(ShareOutcome),
    DismissNotice,
}

/// Work the caller must perform on behalf of the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch {
        request: RequestId,
        tag: Option<Tag>,
    },
    Share {
        text: String,
    },
}

#[derive(Debug, Default)]
pub struct AppState {
    pub lifecycle: Lifecycle,
    pub current: Option<QuoteRecord>,
    pub history: History,
    pub selected_tag: Option<Tag>,
    // Single flag for whatever quote is on screen; not reset when the quote changes
    pub is_favorited: bool,
    pub show_history: bool,
    pub history_cursor: usize,
    pub notice: Option<String>,
    last_request: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the first quote. Call once when the view comes up.
    pub fn start(&mut self) -> Option<Effect> {
        self.apply(Intent::RequestQuote(None))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Loading { .. })
    }

    pub fn apply(&mut self, intent: Intent) -> Option<Effect> {
        match intent {
            Intent::RequestQuote(tag) => Some(self.request_quote(tag)),
            Intent::SelectTag(tag) => Some(self.request_quote(Some(tag))),
            Intent::Refresh => {
                if self.is_loading() {
                    tracing::debug!("refresh ignored while a request is in flight");
                    None
                } else {
                    Some(self.request_quote(self.selected_tag))
                }
            }
            Intent::ProviderSucceeded(request, record) => {
                if self.is_current_request(request) {
                    tracing::info!(%request, author = %record.author, "quote loaded");
                    self.history.push(record.clone());
                    if self.show_history {
                        // Keep the highlight on the same quote as rows shift down
                        let last = self.history.len().saturating_sub(1);
                        self.history_cursor = (self.history_cursor + 1).min(last);
                    }
                    self.current = Some(record.clone());
                    self.lifecycle = Lifecycle::Loaded(record);
                } else {
                    tracing::debug!(%request, "dropping stale quote response");
                }
                None
            }
            Intent::ProviderFailed(request, error) => {
                if self.is_current_request(request) {
                    tracing::warn!(%request, error = %error, "error fetching quote");
                    self.lifecycle = Lifecycle::Failed;
                } else {
                    tracing::debug!(%request, error = %error, "dropping stale quote failure");
                }
                None
            }
            Intent::ToggleFavorite => {
                if self.current.is_some() {
                    self.is_favorited = !self.is_favorited;
                }
                None
            }
            Intent::ToggleHistoryPanel => {
                self.show_history = !self.show_history;
                if self.show_history {
                    self.history_cursor = 0;
                }
                None
            }
            Intent::CloseHistoryPanel => {
                self.show_history = false;
                None
            }
            Intent::HistoryCursorUp => {
                self.history_cursor = self.history_cursor.saturating_sub(1);
                None
            }
            Intent::HistoryCursorDown => {
                let last = self.history.len().saturating_sub(1);
                self.history_cursor = (self.history_cursor + 1).min(last);
                None
            }
            Intent::SelectHistoryCursor => self.apply(Intent::SelectFromHistory(self.history_cursor)),
            Intent::SelectFromHistory(index) => {
                match self.history.get(index) {
                    Some(record) => {
                        self.current = Some(record.clone());
                        self.show_history = false;
                    }
                    None => {
                        tracing::warn!(index, len = self.history.len(), "history index out of range");
                    }
                }
                None
            }
            Intent::Share => self.current.as_ref().map(|quote| Effect::Share {
                text: quote.share_text(),
            }),
            Intent::ShareCompleted(outcome) => {
                self.notice = outcome.notice().map(str::to_string);
                None
            }
            Intent::DismissNotice => {
                self.notice = None;
                None
            }
        }
    }

    fn request_quote(&mut self, tag: Option<Tag>) -> Effect {
        self.last_request += 1;
        let request = RequestId(self.last_request);

        if tag.is_some() {
            self.selected_tag = tag;
        }
        self.lifecycle = Lifecycle::Loading { request };

        Effect::Fetch { request, tag }
    }

    fn is_current_request(&self, request: RequestId) -> bool {
        matches!(self.lifecycle, Lifecycle::Loading { request: latest } if latest == request)
    }
}
