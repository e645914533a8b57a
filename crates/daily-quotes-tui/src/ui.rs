use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use daily_quotes_core::{Lifecycle, QuoteRecord, Tag};
use crate::app::App;

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, tag bar, quote card, actions, footer
    let [header_area, tags_area, quote_area, actions_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(app, frame, header_area);
    render_tag_bar(app, frame, tags_area);
    render_quote(app, frame, quote_area);
    render_actions(app, frame, actions_area);
    render_footer(app, frame, footer_area);

    if app.state.show_history {
        render_history(app, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let status = match app.state.lifecycle {
        Lifecycle::Loading { .. } => {
            let dots = ".".repeat((app.animation_frame as usize) + 1);
            Span::styled(format!(" loading{:<3}", dots), Style::default().fg(Color::Yellow))
        }
        _ => Span::raw(""),
    };

    let title = Line::from(vec![
        Span::styled(" Daily Quotes ", Style::default().fg(Color::Cyan).bold()),
        Span::raw(" "),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        status,
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_tag_bar(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (idx, tag) in Tag::all().iter().enumerate() {
        let selected = app.state.selected_tag == Some(*tag);
        let mut style = if selected {
            Style::default().bg(Color::Indexed(62)).fg(Color::White).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        if idx == app.tag_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        spans.push(Span::styled(format!(" {} {} ", idx + 1, tag.display_name()), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Tags "));
    frame.render_widget(bar, area);
}

fn render_quote(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Indexed(62)));

    let text = match &app.state.current {
        Some(quote) => quote_text(quote),
        None => placeholder_text(app),
    };

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn quote_text(quote: &QuoteRecord) -> Text<'static> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("\"{}\"", quote.content),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("- {}", quote.author),
            Style::default().fg(Color::Gray),
        )),
    ];

    if !quote.tags.is_empty() {
        let tags: Vec<Span> = quote
            .tags
            .iter()
            .flat_map(|tag| {
                [
                    Span::styled(format!(" {} ", tag), Style::default().bg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(tags));
    }

    Text::from(lines)
}

fn placeholder_text(app: &App) -> Text<'static> {
    let message = match app.state.lifecycle {
        Lifecycle::Failed => "Could not load a quote. Press r to try again.".to_string(),
        _ => format!("Fetching a quote{}", ".".repeat((app.animation_frame as usize) + 1)),
    };

    Text::from(vec![
        Line::default(),
        Line::from(Span::styled(message, Style::default().fg(Color::DarkGray))),
    ])
}

fn render_actions(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    if let Some(notice) = &app.state.notice {
        spans.push(Span::styled(format!(" {} ", notice), Style::default().fg(Color::Green).bold()));
        spans.push(Span::raw("  "));
    }

    let heart = if app.state.is_favorited {
        Span::styled(" ♥ favorited ", Style::default().fg(Color::Red).bold())
    } else {
        Span::styled(" ♡ favorite ", Style::default().fg(Color::DarkGray))
    };
    spans.push(heart);
    spans.push(Span::styled(" ⇪ share ", Style::default().fg(Color::DarkGray)));

    let actions = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(actions, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    // Key style: dark background with bright text for visibility on both light/dark terminals
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);

    let hints = if app.state.show_history {
        vec![
            Span::styled(" j/k ", key_style),
            Span::styled(" nav ", label_style),
            Span::styled(" Enter ", key_style),
            Span::styled(" show ", label_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" close ", label_style),
        ]
    } else {
        vec![
            Span::styled(" r ", key_style),
            Span::styled(" refresh ", label_style),
            Span::styled(" 1-6 ", key_style),
            Span::styled(" tag ", label_style),
            Span::styled(" f ", key_style),
            Span::styled(" favorite ", label_style),
            Span::styled(" s ", key_style),
            Span::styled(" share ", label_style),
            Span::styled(" h ", key_style),
            Span::styled(" history ", label_style),
            Span::styled(" q ", key_style),
            Span::styled(" quit ", label_style),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

fn render_history(app: &App, frame: &mut Frame, area: Rect) {
    // Sidebar on the right edge
    let width = (area.width / 2).max(30).min(area.width);
    let popup_area = Rect::new(area.x + area.width - width, area.y, width, area.height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Quote History ");

    if app.state.history.is_empty() {
        let empty = Paragraph::new("No quotes yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, popup_area);
        return;
    }

    let text_width = width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .state
        .history
        .iter()
        .map(|quote| {
            ListItem::new(vec![
                Line::from(truncate(&quote.content, text_width)),
                Line::from(Span::styled(
                    format!("- {}", quote.author),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::default(),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.state.history_cursor));
    frame.render_stateful_widget(list, popup_area, &mut state);
}

/// Cut `text` to at most `width` characters, marking the cut with an ellipsis
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate("The only way out is through", 10), "The only…");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééé", 3), "éé…");
    }
}
