use anyhow::Result;
use clap::Parser;
use daily_quotes_core::{Config, QuoteClient, Tag};

mod app;
mod handler;
mod logging;
mod share;
mod tui;
mod ui;

use app::App;
use tui::{EventHandler, Tui};

#[derive(Parser)]
#[command(name = "quotes")]
#[command(version, about = "Random quotes in your terminal, filtered by topic")]
struct Cli {
    /// Base URL of the quote service (overrides QUOTES_API_URL and the config file)
    #[arg(long)]
    api_url: Option<String>,
    /// Request timeout in seconds
    #[arg(short, long)]
    timeout: Option<u64>,
    /// Start with this tag selected (wisdom, inspiration, happiness, success, love, life)
    #[arg(long, value_parser = parse_tag)]
    tag: Option<Tag>,
}

fn parse_tag(s: &str) -> Result<Tag, String> {
    Tag::from_str(s).ok_or_else(|| {
        let names: Vec<&str> = Tag::all().iter().map(|t| t.as_str()).collect();
        format!("unknown tag '{}', expected one of: {}", s, names.join(", "))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read config, using defaults");
        Config::new()
    });

    let (base_url, timeout) = config.resolve(
        cli.api_url,
        cli.timeout,
        std::env::var("QUOTES_API_URL").ok(),
    );
    let client = QuoteClient::with_timeout(&base_url, timeout)?;
    tracing::info!(base_url = client.base_url(), ?timeout, tag = ?cli.tag, "starting");

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    let mut app = App::new(client, &config, events.sender());
    app.start(cli.tag);

    let result = run(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    result
}

async fn run(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event),
            None => break,
        }
    }
    Ok(())
}
