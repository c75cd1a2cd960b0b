use crate::dispatch::{Effect, MessageContext};
use crate::environment::model::PostId;
use crate::environment::Environment;

use super::state::{validate_message, Draft, DraftField, State, SubmitIntent};
use super::{FormAction, FormDelegate};

pub fn reduce<'a>(
    context: &'a impl MessageContext<FormAction, FormDelegate>,
    action: FormAction,
    state: &'a mut State,
    environment: &'a Environment,
) -> Effect<'static, FormAction> {
    log::trace!("{action:?}");

    match action {
        FormAction::UpdateField(field, value) => {
            if matches!(field, DraftField::Message) {
                state.validity = validate_message(&value);
            }
            state.draft.set(field, value);
            Effect::NONE
        }
        FormAction::AttachFile(path) => {
            let encoder = environment.encoder.clone();
            Effect::future(
                async move { encoder.encode(&path).await },
                FormAction::FileEncoded,
            )
        }
        FormAction::FileEncoded(result) => {
            match result {
                // Stored verbatim; the payload is opaque here.
                Ok(image) => state.draft.selected_file = Some(image),
                Err(e) => {
                    log::error!("could not encode file: {e}");
                    state.error_message = Some(e);
                }
            }
            Effect::NONE
        }
        FormAction::SetEditTarget(target) => {
            // A zero id means "new post" in the surrounding system.
            match target.filter(|(id, _)| *id != PostId::NONE) {
                Some((id, post)) => {
                    state.edit_target = Some(id);
                    state.draft = Draft::from_post(&post);
                }
                None => {
                    state.edit_target = None;
                    state.draft = Draft::default();
                }
            }
            state.validity = validate_message(&state.draft.message);
            state.error_message = None;
            Effect::NONE
        }
        FormAction::Submit => {
            let (valid, words, min) = validate_message(&state.draft.message);
            if !valid {
                state.validity = (valid, words, min);
                state.error_message = Some(format!(
                    "The message needs at least {min} words, it has {words}"
                ));
                return Effect::NONE;
            }

            let record = state.draft.to_record();
            let action = match SubmitIntent::from_target(state.edit_target) {
                SubmitIntent::Create => environment.model.create_post(record),
                SubmitIntent::Update(id) => environment.model.update_post(id, record),
            };
            // Fire and forget; the store folds it in at its own pace.
            environment.bridge.dispatch(action);

            state.draft = Draft::default();
            state.edit_target = None;
            state.validity = validate_message("");
            state.error_message = None;
            context.send_parent(FormDelegate::EditTargetCleared);
            Effect::NONE
        }
        FormAction::ClearError => {
            state.error_message = None;
            Effect::NONE
        }
    }
}
