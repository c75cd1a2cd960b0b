pub mod encoding;
pub mod model;

use std::sync::Arc;

pub use encoding::{Base64Encoder, EncodedImage, FileEncoder};
pub use model::{Model, Post, PostId, PostRecord, PostsAction};

use crate::store::DispatchBridge;

/// The external collaborators every reduce call gets handed: the
/// action-creator pair, the dispatch bridge into the store, and the
/// file-encoding collaborator.
#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub bridge: DispatchBridge,
    pub encoder: Arc<dyn FileEncoder>,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish()
    }
}

impl Environment {
    pub fn new(model: Model, bridge: DispatchBridge) -> Self {
        Self {
            model,
            bridge,
            encoder: Arc::new(Base64Encoder),
        }
    }

    /// Swap the encoding collaborator, e.g. for a stub in tests.
    pub fn with_encoder(mut self, encoder: Arc<dyn FileEncoder>) -> Self {
        self.encoder = encoder;
        self
    }
}
