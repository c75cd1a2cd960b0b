use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::components::form::{DraftField, FormAction, FormDelegate, FormReducer, State};
use crate::dispatch::Runtime;
use crate::environment::model::{Model, Post, PostId};
use crate::environment::Environment;
use crate::store::Store;

pub fn init_logging() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .try_init()
        .ok();
}

/// Wires the pieces together: one store created at application start,
/// one form runtime, and the parent-owned edit target the form asks to
/// clear after every submit.
pub struct App {
    store: Store,
    form: Runtime<FormReducer>,
    edit_target: Rc<Cell<Option<PostId>>>,
}

impl App {
    pub fn new() -> Self {
        let store = Store::new();
        let environment = Environment::new(Model, store.bridge());
        let edit_target = Rc::new(Cell::new(None));

        let cleared = edit_target.clone();
        let form = Runtime::new(State::new(), environment, move |message| match message {
            FormDelegate::EditTargetCleared => cleared.set(None),
        });

        Self {
            store,
            form,
            edit_target,
        }
    }

    pub fn form_state(&self) -> &State {
        self.form.state()
    }

    pub fn posts(&self) -> &im::Vector<Post> {
        &self.store.state().posts
    }

    pub fn edit_target(&self) -> Option<PostId> {
        self.edit_target.get()
    }

    /// Enter edit mode for a stored post; an unknown id leaves the form
    /// in compose mode.
    pub fn edit_post(&mut self, id: PostId) {
        let target = self
            .store
            .state()
            .posts
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .map(|post| (id, post));
        if target.is_none() {
            log::warn!("cannot edit unknown post {id}");
        }
        self.edit_target.set(target.as_ref().map(|(id, _)| *id));
        self.form.send(FormAction::SetEditTarget(target));
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.form.send(FormAction::UpdateField(field, value.into()));
    }

    pub fn attach_file(&mut self, path: PathBuf) {
        self.form.send(FormAction::AttachFile(path));
    }

    /// Wait for outstanding file encodes and fold their results in.
    pub async fn settle(&mut self) {
        self.form.settle().await;
    }

    /// Submit the draft and fold the resulting action into the store.
    pub fn submit(&mut self) {
        self.form.send(FormAction::Submit);
        self.store.process_pending();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
