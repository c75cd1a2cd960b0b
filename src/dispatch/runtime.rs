use std::cell::RefCell;
use std::collections::VecDeque;

use tokio::task::JoinHandle;

use super::{Effect, MessageContext, Reducer};

/// Drives a single reducer instance: owns its state, queues actions,
/// spawns effect futures and feeds their results back in as actions.
/// Dropping the runtime aborts everything still in flight.
pub struct Runtime<R: Reducer> {
    state: R::State,
    environment: R::Environment,
    delegate: Box<dyn Fn(R::DelegateMessage)>,
    tasks: Vec<JoinHandle<R::Action>>,
    fallback: Option<tokio::runtime::Runtime>,
}

impl<R: Reducer> Runtime<R> {
    pub fn new(
        state: R::State,
        environment: R::Environment,
        delegate: impl Fn(R::DelegateMessage) + 'static,
    ) -> Self {
        let mut runtime = Self {
            state,
            environment,
            delegate: Box::new(delegate),
            tasks: Vec::new(),
            fallback: None,
        };
        if let Some(action) = R::initial_action() {
            runtime.send(action);
        }
        runtime
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn environment(&self) -> &R::Environment {
        &self.environment
    }

    /// Reduce one action synchronously, then drain whatever it queued.
    pub fn send(&mut self, action: R::Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(next) = queue.pop_front() {
            let effect = {
                let context = QueueContext {
                    queued: RefCell::new(Vec::new()),
                    delegate: self.delegate.as_ref(),
                };
                let effect = R::reduce(&context, next, &mut self.state, &self.environment);
                queue.extend(context.queued.into_inner());
                effect
            };
            self.apply(effect, &mut queue);
        }
    }

    fn apply(&mut self, effect: Effect<'static, R::Action>, queue: &mut VecDeque<R::Action>) {
        match effect {
            Effect::Nothing => {}
            Effect::Action(action) => queue.push_back(action),
            Effect::Future(future) => {
                let handle = match tokio::runtime::Handle::try_current() {
                    Ok(handle) => Some(handle),
                    Err(_) => self.fallback_handle(),
                };
                match handle {
                    Some(handle) => self.tasks.push(handle.spawn(future)),
                    None => log::warn!("dropping pending effect, no async runtime available"),
                }
            }
            Effect::Merge(effects) => {
                for effect in effects {
                    self.apply(effect, queue);
                }
            }
        }
    }

    // Started on demand when an effect arrives outside an async
    // context, so encodes keep making progress on a background worker.
    fn fallback_handle(&mut self) -> Option<tokio::runtime::Handle> {
        if self.fallback.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(runtime) => self.fallback = Some(runtime),
                Err(e) => log::error!("could not start a fallback runtime: {e:?}"),
            }
        }
        self.fallback.as_ref().map(|runtime| runtime.handle().clone())
    }

    /// Await all outstanding effect futures and feed their results back
    /// in. Actions produced while settling are settled as well.
    pub async fn settle(&mut self) {
        while !self.tasks.is_empty() {
            for task in std::mem::take(&mut self.tasks) {
                match task.await {
                    Ok(action) => self.send(action),
                    Err(e) if e.is_cancelled() => {}
                    Err(e) => log::error!("effect task failed: {e:?}"),
                }
            }
        }
    }

    /// Number of effect futures still in flight.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }
}

impl<R: Reducer> Drop for Runtime<R> {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

struct QueueContext<'a, Action, Delegate> {
    queued: RefCell<Vec<Action>>,
    delegate: &'a dyn Fn(Delegate),
}

impl<'a, Action, Delegate> MessageContext<Action, Delegate> for QueueContext<'a, Action, Delegate> {
    fn send(&self, action: Action) {
        self.queued.borrow_mut().push(action);
    }

    fn send_parent(&self, message: Delegate) {
        (self.delegate)(message);
    }
}
