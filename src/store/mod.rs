//! The state container and the bridge components dispatch through.

pub mod posts;

use flume::{Receiver, Sender};
use serde::{Deserialize, Serialize};

use crate::environment::model::{Post, PostsAction};

/// Top-level application state: a single slice holding the posts.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub posts: im::Vector<Post>,
}

/// Actions accepted by the container, keyed by slice.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum StoreAction {
    Posts(PostsAction),
}

fn reduce(state: &AppState, action: &StoreAction) -> AppState {
    match action {
        StoreAction::Posts(action) => AppState {
            posts: posts::reduce(&state.posts, action),
        },
    }
}

/// The state container. Constructed explicitly at application start;
/// everything else hands actions in through a [`DispatchBridge`].
pub struct Store {
    state: AppState,
    sender: Sender<StoreAction>,
    receiver: Receiver<StoreAction>,
}

impl Store {
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            state: AppState::default(),
            sender,
            receiver,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A clone-able handle for dispatching into this store.
    pub fn bridge(&self) -> DispatchBridge {
        DispatchBridge {
            sender: self.sender.clone(),
        }
    }

    /// Apply a single action to the state.
    pub fn dispatch(&mut self, action: StoreAction) {
        log::trace!("{action:?}");
        self.state = reduce(&self.state, &action);
    }

    /// Number of bridged actions not yet folded into the state.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Drain everything the bridges sent since the last call.
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.receiver.try_recv() {
            self.dispatch(action);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// The form's single point of contact with the store. Forwards
/// action-creator output verbatim; delivery is fire-and-forget.
#[derive(Clone)]
pub struct DispatchBridge {
    sender: Sender<StoreAction>,
}

impl DispatchBridge {
    pub fn dispatch(&self, action: PostsAction) {
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&action) {
                Ok(json) => log::debug!("dispatch {json}"),
                Err(e) => log::debug!("dispatch <unserializable: {e:?}>"),
            }
        }
        if let Err(e) = self.sender.send(StoreAction::Posts(action)) {
            log::error!("store dropped before dispatch: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::model::{Model, PostId, PostRecord};

    fn record() -> PostRecord {
        PostRecord {
            creator: "grace".to_string(),
            title: "hello".to_string(),
            message: "one two three four five".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            image: None,
        }
    }

    #[test]
    fn bridged_actions_apply_on_process_pending() {
        let mut store = Store::new();
        let bridge = store.bridge();

        bridge.dispatch(Model.create_post(record()));
        assert_eq!(store.pending(), 1);
        assert!(store.state().posts.is_empty());

        store.process_pending();
        assert_eq!(store.pending(), 0);
        assert_eq!(store.state().posts.len(), 1);
        assert_eq!(store.state().posts[0].id, PostId(1));
    }

    #[test]
    fn the_container_routes_posts_actions_to_the_posts_slice() {
        let mut store = Store::new();
        store.dispatch(StoreAction::Posts(Model.create_post(record())));

        let mut updated = record();
        updated.title = "changed".to_string();
        store.dispatch(StoreAction::Posts(Model.update_post(PostId(1), updated)));

        assert_eq!(store.state().posts.len(), 1);
        assert_eq!(store.state().posts[0].title, "changed");
    }
}
