//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use rdeck_app::config::Settings;
use rdeck_app::message::Message;
use rdeck_app::process::process_message;
use rdeck_app::signals;
use rdeck_app::state::AppState;
use rdeck_core::prelude::*;
use rdeck_source::{DefaultRecipeSource, RecipeSource};

use super::{event, render, terminal};

/// Run the TUI browsing `locator`
pub async fn run(settings: Settings, locator: String) -> Result<()> {
    terminal::install_panic_hook();

    let source = Arc::new(DefaultRecipeSource::new(settings.http_config())?);
    info!(
        "Starting TUI on {} (timeout {}s)",
        locator, settings.source.timeout_secs
    );

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(64);
    signals::spawn_signal_handler(msg_tx.clone());

    process_message(&mut state, Message::LoadSource { locator }, &msg_tx, &source);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, source);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
) -> Result<()>
where
    S: RecipeSource + Sync + 'static,
{
    while !state.should_quit() {
        // Fetch results and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &source);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &source);
        }
    }

    info!("Quitting");
    Ok(())
}
