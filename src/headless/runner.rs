//! Headless mode runner - one fetch through the TEA loop, JSON out

use std::io::Write;
use std::sync::Arc;

use tokio::sync::mpsc;

use rdeck_app::config::Settings;
use rdeck_app::message::Message;
use rdeck_app::process::process_message;
use rdeck_app::state::{AppState, FetchState};
use rdeck_core::prelude::*;
use rdeck_core::{category_labels, CategoryFilter};
use rdeck_source::{DefaultRecipeSource, RecipeSource};

use super::HeadlessEvent;

/// Run in headless mode against the configured sources, writing to stdout
///
/// Returns `Ok(false)` when the fetch failed and an error event was written.
pub async fn run_headless(
    settings: Settings,
    locator: String,
    category: Option<String>,
) -> Result<bool> {
    info!("Recipe Deck starting in HEADLESS mode on {}", locator);
    let source = Arc::new(DefaultRecipeSource::new(settings.http_config())?);
    let mut stdout = std::io::stdout().lock();
    run_headless_with(source, settings, locator, category, &mut stdout).await
}

/// Headless run with an explicit source and output
pub async fn run_headless_with<S, W>(
    source: Arc<S>,
    settings: Settings,
    locator: String,
    category: Option<String>,
    out: &mut W,
) -> Result<bool>
where
    S: RecipeSource + Sync + 'static,
    W: Write,
{
    let mut state = AppState::with_settings(settings);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(8);

    process_message(&mut state, Message::LoadSource { locator }, &msg_tx, &source);

    // Wait for this mount's fetch to resolve
    let mut failure_detail = None;
    while state.collection.fetch.is_pending() {
        let Some(msg) = msg_rx.recv().await else {
            return Err(Error::ChannelClosed);
        };
        if let Message::RecipesFetchFailed { error, .. } = &msg {
            failure_detail = Some(error.clone());
        }
        process_message(&mut state, msg, &msg_tx, &source);
    }

    if let FetchState::Failed { message } = &state.collection.fetch {
        HeadlessEvent::error(message.clone(), failure_detail.unwrap_or_default()).emit_to(out)?;
        return Ok(false);
    }

    if let Some(label) = category {
        process_message(
            &mut state,
            Message::SelectFilter(CategoryFilter::from_label(&label)),
            &msg_tx,
            &source,
        );
    }

    let collection = &state.collection;
    let visible = collection.visible();
    for recipe in &visible {
        HeadlessEvent::recipe(recipe).emit_to(out)?;
    }

    let categories = category_labels(collection.recipes())
        .into_iter()
        .map(str::to_string)
        .collect();
    HeadlessEvent::summary(visible.len(), collection.recipes().len(), categories).emit_to(out)?;

    info!(
        "Headless run finished: {} of {} recipes",
        visible.len(),
        collection.recipes().len()
    );
    Ok(true)
}
