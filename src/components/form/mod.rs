mod action;
mod reducer;
mod state;

pub use action::{FormAction, FormDelegate};
pub use reducer::reduce;
pub use state::{
    parse_tags, validate_message, Draft, DraftField, State, SubmitIntent, MIN_MESSAGE_WORDS,
};

use crate::dispatch::{Effect, MessageContext, Reducer};

pub struct FormReducer;

impl Reducer for FormReducer {
    type Action = FormAction;
    type DelegateMessage = FormDelegate;
    type State = State;
    type Environment = crate::environment::Environment;

    fn reduce<'a>(
        context: &'a impl MessageContext<Self::Action, Self::DelegateMessage>,
        action: Self::Action,
        state: &'a mut Self::State,
        environment: &'a Self::Environment,
    ) -> Effect<'static, Self::Action> {
        reducer::reduce(context, action, state, environment)
    }
}
