use std::future::Future;

use futures_util::future::{BoxFuture, FutureExt};

/// What a reducer wants to happen next: nothing, another action, or an
/// asynchronous piece of work whose result comes back in as an action.
pub enum Effect<'a, Action> {
    Nothing,
    Action(Action),
    Future(BoxFuture<'a, Action>),
    Merge(Vec<Effect<'a, Action>>),
}

impl<'a, Action: 'a> Effect<'a, Action> {
    pub const NONE: Self = Effect::Nothing;

    pub fn action(action: Action) -> Self {
        Effect::Action(action)
    }

    /// Run `future` off the reducer and map its output into an action.
    pub fn future<F, T, M>(future: F, map: M) -> Self
    where
        Action: Send,
        F: Future<Output = T> + Send + 'a,
        M: FnOnce(T) -> Action + Send + 'a,
    {
        Effect::Future(async move { map(future.await) }.boxed())
    }

    pub fn merge2(a: Self, b: Self) -> Self {
        Effect::Merge(vec![a, b])
    }
}

impl<'a, Action> std::fmt::Debug for Effect<'a, Action> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Nothing => write!(f, "Effect::Nothing"),
            Effect::Action(_) => write!(f, "Effect::Action"),
            Effect::Future(_) => write!(f, "Effect::Future"),
            Effect::Merge(inner) => write!(f, "Effect::Merge({})", inner.len()),
        }
    }
}
