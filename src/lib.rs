//! Headless client core of a small posts CRUD application: the draft
//! form reducer, the state container it dispatches into, and the
//! collaborators at the seams (action creators, file encoding).

pub mod app;
pub mod components;
pub mod dispatch;
pub mod environment;
pub mod store;

pub use app::{init_logging, App};
pub use components::form::{FormAction, FormDelegate, FormReducer};
pub use environment::{Environment, Model, Post, PostId, PostRecord, PostsAction};
pub use store::{AppState, DispatchBridge, Store, StoreAction};
