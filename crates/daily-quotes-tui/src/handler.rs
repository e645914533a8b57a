use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use daily_quotes_core::{Intent, Tag};
use crate::app::App;
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Resize => {}
        AppEvent::Tick => {
            app.tick_animation();
        }
        AppEvent::Fetched(request, result) => {
            let intent = match result {
                Ok(record) => Intent::ProviderSucceeded(request, record),
                Err(e) => Intent::ProviderFailed(request, e),
            };
            app.dispatch(intent);
        }
        AppEvent::NativeShareFinished(text, outcome) => app.finish_share(&text, outcome),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    // Any key clears a pending notice; Esc does nothing else
    if app.state.notice.is_some() {
        app.dispatch(Intent::DismissNotice);
        if key.code == KeyCode::Esc {
            return;
        }
    }

    if app.state.show_history {
        handle_history_panel(app, key);
    } else {
        handle_main_view(app, key);
    }
}

fn handle_main_view(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Char('r') => app.dispatch(Intent::Refresh),

        // Tag bar: digits pick directly, arrows + Enter walk the bar
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(tag) = Tag::all().get(index).copied() {
                app.tag_cursor = index;
                app.dispatch(Intent::SelectTag(tag));
            }
        }
        KeyCode::Left => app.tag_cursor_left(),
        KeyCode::Right => app.tag_cursor_right(),
        KeyCode::Enter => {
            if let Some(tag) = app.tag_at_cursor() {
                app.dispatch(Intent::SelectTag(tag));
            }
        }

        KeyCode::Char('f') => app.dispatch(Intent::ToggleFavorite),
        KeyCode::Char('s') => app.dispatch(Intent::Share),
        KeyCode::Char('h') => app.dispatch(Intent::ToggleHistoryPanel),

        _ => {}
    }
}

fn handle_history_panel(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.dispatch(Intent::HistoryCursorDown),
        KeyCode::Char('k') | KeyCode::Up => app.dispatch(Intent::HistoryCursorUp),
        KeyCode::Enter => app.dispatch(Intent::SelectHistoryCursor),
        KeyCode::Char('h') => app.dispatch(Intent::ToggleHistoryPanel),
        KeyCode::Esc => app.dispatch(Intent::CloseHistoryPanel),
        _ => {}
    }
}
