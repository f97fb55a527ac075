//! Parley terminal chat widget.
//!
//! Talks to a running `parley_server` over `POST /api/chat`.

// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

mod app;
mod handler;
mod logging;
mod tui;
mod ui;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use parley_client::client::DEFAULT_SERVER_URL;
use parley_client::{ChatSession, HttpChatClient, ReplyEvent};
use tokio::sync::mpsc;
use tracing::{error, info};

use app::App;
use tui::{EventHandler, Tui};

#[derive(Parser, Debug)]
#[command(name = "parley", version, about = "Terminal chat widget for the Parley proxy")]
struct Cli {
    /// Base URL of the Parley proxy server.
    #[arg(long, env = "PARLEY_SERVER", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// File to write diagnostic logs to [default: <cache dir>/parley/parley.log].
    #[arg(long, env = "PARLEY_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        eprintln!("parley: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;
    info!(server = %cli.server, "starting parley");

    let client = Arc::new(HttpChatClient::new(&cli.server));
    let (session, mut replies) = ChatSession::new(client);
    let mut app = App::new(session, cli.server);

    tui::install_panic_hook();
    let mut terminal = tui::init()?;

    let result = event_loop(&mut terminal, &mut app, &mut replies).await;
    tui::restore()?;

    info!("exiting parley");
    result
}

/// Draw, then wait for either terminal input or a backend reply.
async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    replies: &mut mpsc::UnboundedReceiver<ReplyEvent>,
) -> Result<()> {
    let mut events = EventHandler::new();

    while !app.should_quit {
        let frame = terminal.draw(|frame| ui::render(app, frame))?;
        app.viewport = frame.area;

        tokio::select! {
            Some(event) = events.next() => handler::handle_event(app, event),
            Some(reply) = replies.recv() => app.session.apply(reply),
            else => break,
        }
    }

    Ok(())
}
