use daily_quotes_core::{
    copy_fallback, share_native, AppState, Config, Effect, Intent, QuoteClient, ShareOutcome,
    ShareTarget, Tag,
};
use tokio::sync::mpsc;

use crate::share::{ClipboardShare, CommandShare};
use crate::tui::AppEvent;

pub struct App {
    // Core state
    pub should_quit: bool,
    pub state: AppState,

    // Tag bar cursor (index into Tag::all())
    pub tag_cursor: usize,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    client: QuoteClient,
    events: mpsc::UnboundedSender<AppEvent>,

    // Share targets
    share_command: Option<CommandShare>,
    clipboard: Option<ClipboardShare>,
}

impl App {
    pub fn new(client: QuoteClient, config: &Config, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        let share_command = config
            .share_command
            .as_deref()
            .and_then(CommandShare::from_argv);

        Self {
            should_quit: false,
            state: AppState::new(),
            tag_cursor: 0,
            animation_frame: 0,
            client,
            events,
            share_command,
            clipboard: None,
        }
    }

    /// Issue the first fetch, optionally with a tag already selected
    pub fn start(&mut self, tag: Option<Tag>) {
        let effect = match tag {
            Some(tag) => {
                if let Some(index) = Tag::all().iter().position(|t| *t == tag) {
                    self.tag_cursor = index;
                }
                self.state.apply(Intent::SelectTag(tag))
            }
            None => self.state.start(),
        };
        if let Some(effect) = effect {
            self.perform(effect);
        }
    }

    /// Run an intent through the state and carry out whatever it asks for
    pub fn dispatch(&mut self, intent: Intent) {
        if let Some(effect) = self.state.apply(intent) {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Fetch { request, tag } => {
                let client = self.client.clone();
                let events = self.events.clone();
                tokio::spawn(async move {
                    let result = client.fetch_quote(tag.map(|t| t.as_str())).await;
                    // Receiver is gone only when the app is shutting down
                    let _ = events.send(AppEvent::Fetched(request, result));
                });
            }
            Effect::Share { text } => match self.share_command.clone() {
                // The command may block, keep it off the event loop
                Some(mut command) => {
                    let events = self.events.clone();
                    tokio::task::spawn_blocking(move || {
                        let outcome = share_native(&mut command, &text);
                        let _ = events.send(AppEvent::NativeShareFinished(text, outcome));
                    });
                }
                None => self.finish_share(&text, ShareOutcome::Unavailable),
            },
        }
    }

    /// Complete a share once the native attempt is known, falling back to the clipboard
    pub fn finish_share(&mut self, text: &str, native: ShareOutcome) {
        let outcome = if native == ShareOutcome::Shared {
            native
        } else {
            self.open_clipboard();
            let clipboard = self.clipboard.as_mut().map(|c| c as &mut dyn ShareTarget);
            copy_fallback(clipboard, text)
        };

        tracing::info!(?outcome, "shared quote");
        self.dispatch(Intent::ShareCompleted(outcome));
    }

    fn open_clipboard(&mut self) {
        if self.clipboard.is_some() {
            return;
        }
        match ClipboardShare::new() {
            Ok(clipboard) => self.clipboard = Some(clipboard),
            Err(e) => tracing::warn!(error = %e, "clipboard unavailable"),
        }
    }

    // Tag bar
    pub fn tag_cursor_left(&mut self) {
        self.tag_cursor = self.tag_cursor.saturating_sub(1);
    }

    pub fn tag_cursor_right(&mut self) {
        let last = Tag::all().len() - 1;
        self.tag_cursor = (self.tag_cursor + 1).min(last);
    }

    pub fn tag_at_cursor(&self) -> Option<Tag> {
        Tag::all().get(self.tag_cursor).copied()
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.state.is_loading() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }
}
