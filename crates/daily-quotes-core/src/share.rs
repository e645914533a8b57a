//! Sharing a quote: a native share target when one exists, otherwise the clipboard

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share target
    Shared,
    /// Copied to the clipboard instead
    Copied,
    /// Neither target worked
    Unavailable,
}

impl ShareOutcome {
    /// Message to show the user, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ShareOutcome::Shared => None,
            ShareOutcome::Copied => Some("Quote copied to clipboard!"),
            ShareOutcome::Unavailable => Some("Sharing is not available"),
        }
    }
}

/// Something that can receive shared text (a share sheet, a clipboard)
pub trait ShareTarget {
    fn send_text(&mut self, text: &str) -> Result<()>;
}

/// Hand `text` to the native share target. May block, so run it off the UI thread.
pub fn share_native(native: &mut dyn ShareTarget, text: &str) -> ShareOutcome {
    match native.send_text(text) {
        Ok(()) => ShareOutcome::Shared,
        Err(e) => {
            tracing::warn!(error = %e, "native share failed");
            ShareOutcome::Unavailable
        }
    }
}

/// Clipboard fallback used when there is no native target or it failed
pub fn copy_fallback(clipboard: Option<&mut dyn ShareTarget>, text: &str) -> ShareOutcome {
    match clipboard.map(|c| c.send_text(text)) {
        Some(Ok(())) => ShareOutcome::Copied,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "clipboard copy failed");
            ShareOutcome::Unavailable
        }
        None => ShareOutcome::Unavailable,
    }
}
