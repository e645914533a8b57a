use std::collections::VecDeque;

use crate::quote::QuoteRecord;

/// Maximum number of quotes kept in the history panel
pub const HISTORY_CAP: usize = 10;

/// Recently displayed quotes, newest first. Pushing past the cap drops the oldest.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<QuoteRecord>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(HISTORY_CAP + 1),
        }
    }

    pub fn push(&mut self, record: QuoteRecord) {
        self.entries.push_front(record);
        self.entries.truncate(HISTORY_CAP);
    }

    pub fn get(&self, index: usize) -> Option<&QuoteRecord> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuoteRecord> {
        self.entries.iter()
    }
}
