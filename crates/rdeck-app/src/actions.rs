//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Fetches never block the event loop. Each one runs on its own task and
//! reports back with the token it was issued, so [`crate::handler::update`]
//! can drop results that belong to an earlier mount.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use crate::UpdateAction;
use rdeck_core::prelude::*;
use rdeck_source::RecipeSource;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, source: Arc<S>)
where
    S: RecipeSource + Sync + 'static,
{
    match action {
        UpdateAction::FetchRecipes { token, locator } => {
            spawn_fetch(token, locator, msg_tx, source);
        }
    }
}

/// Spawn a one-shot fetch of `locator` that answers with `token`
pub(crate) fn spawn_fetch<S>(
    token: u64,
    locator: String,
    msg_tx: mpsc::Sender<Message>,
    source: Arc<S>,
) -> JoinHandle<()>
where
    S: RecipeSource + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match source.fetch(&locator).await {
            Ok(collection) => {
                let recipes = collection.into_recipes();
                debug!("Fetched {} recipes from {}", recipes.len(), locator);
                Message::RecipesLoaded { token, recipes }
            }
            Err(e) => {
                warn!("Fetching {} failed: {}", locator, e);
                Message::RecipesFetchFailed {
                    token,
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            // Event loop already gone
            debug!("Dropping fetch result for token {}: channel closed", token);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdeck_source::test_utils::{sample_recipes, FailingSource, StaticSource};
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_fetch_success_sends_loaded() {
        let (tx, mut rx) = mpsc::channel(4);
        let source = Arc::new(StaticSource::new(sample_recipes()));

        assert_ok!(spawn_fetch(7, "anything".to_string(), tx, source.clone()).await);

        match rx.recv().await {
            Some(Message::RecipesLoaded { token, recipes }) => {
                assert_eq!(token, 7);
                assert_eq!(recipes.len(), 5);
            }
            other => panic!("expected RecipesLoaded, got {other:?}"),
        }
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_sends_failed() {
        let (tx, mut rx) = mpsc::channel(4);
        let source = Arc::new(FailingSource::new("connection refused"));

        assert_ok!(spawn_fetch(3, "https://example.invalid".to_string(), tx, source).await);

        match rx.recv().await {
            Some(Message::RecipesFetchFailed { token, error }) => {
                assert_eq!(token, 3);
                assert!(error.contains("connection refused"));
            }
            other => panic!("expected RecipesFetchFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_with_closed_channel_does_not_panic() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let source = Arc::new(StaticSource::new(Vec::new()));

        assert_ok!(spawn_fetch(1, "x".to_string(), tx, source).await);
    }

    #[tokio::test]
    async fn test_handle_action_dispatches_fetch() {
        let (tx, mut rx) = mpsc::channel(4);
        let source = Arc::new(StaticSource::new(sample_recipes()));

        handle_action(
            UpdateAction::FetchRecipes {
                token: 2,
                locator: "recipes.json".to_string(),
            },
            tx,
            source,
        );

        let msg = tokio::time::timeout(std::time::Duration::from_secs(1), rx.recv())
            .await
            .unwrap();
        assert!(matches!(msg, Some(Message::RecipesLoaded { token: 2, .. })));
    }
}
