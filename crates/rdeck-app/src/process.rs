//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages, and hands actions off to [`handle_action`].

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use rdeck_source::RecipeSource;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &Arc<S>,
) where
    S: RecipeSource + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), source.clone());
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::Screen;
    use rdeck_source::test_utils::{sample_recipes, StaticSource};

    #[tokio::test]
    async fn test_load_then_deliver_result() {
        let (tx, mut rx) = mpsc::channel(8);
        let source = Arc::new(StaticSource::new(sample_recipes()));
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::LoadSource {
                locator: "recipes.json".to_string(),
            },
            &tx,
            &source,
        );
        assert!(state.collection.fetch.is_pending());

        let loaded = rx.recv().await.unwrap();
        process_message(&mut state, loaded, &tx, &source);

        assert_eq!(state.collection.visible().len(), 5);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_key_chain_is_followed() {
        let (tx, mut rx) = mpsc::channel(8);
        let source = Arc::new(StaticSource::new(sample_recipes()));
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::LoadSource {
                locator: "recipes.json".to_string(),
            },
            &tx,
            &source,
        );
        let loaded = rx.recv().await.unwrap();
        process_message(&mut state, loaded, &tx, &source);

        // Key -> OpenDetail in one call
        process_message(&mut state, Message::Key(InputKey::Enter), &tx, &source);

        assert_eq!(state.screen, Screen::Detail);
        assert_eq!(state.detail.recipe.as_ref().map(|r| r.id), Some(1));
    }

    #[tokio::test]
    async fn test_reload_key_fetches_again() {
        let (tx, mut rx) = mpsc::channel(8);
        let source = Arc::new(StaticSource::new(sample_recipes()));
        let mut state = AppState::new();

        process_message(
            &mut state,
            Message::LoadSource {
                locator: "recipes.json".to_string(),
            },
            &tx,
            &source,
        );
        let first = rx.recv().await.unwrap();
        process_message(&mut state, first, &tx, &source);

        process_message(&mut state, Message::Key(InputKey::Char('r')), &tx, &source);
        assert!(state.collection.fetch.is_pending());

        let second = rx.recv().await.unwrap();
        process_message(&mut state, second, &tx, &source);

        assert_eq!(source.calls(), 2);
        assert_eq!(state.collection.recipes().len(), 5);
    }
}
