//! The reducer machinery the components run on: actions go in, state
//! mutates, effects describe everything else.

mod effect;
mod runtime;

pub use effect::Effect;
pub use runtime::Runtime;

/// Handed into every reduce call. Allows queueing follow-up actions on
/// the owning runtime and messaging the parent component.
pub trait MessageContext<Action, Delegate> {
    fn send(&self, action: Action);
    fn send_parent(&self, message: Delegate);
}

pub trait Reducer {
    type Action: std::fmt::Debug + Send + 'static;
    type DelegateMessage;
    type State;
    type Environment;

    fn reduce<'a>(
        context: &'a impl MessageContext<Self::Action, Self::DelegateMessage>,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> Effect<'static, Self::Action>;

    /// Dispatched once when a runtime for this reducer starts up.
    fn initial_action() -> Option<Self::Action> {
        None
    }
}
