use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, RwLock};
use tracing::{debug, debug_span, trace, warn};

use super::subscription::{Subscriber, SubscriberSet, Subscription};
use crate::config::{NotifyPolicy, StoreConfig};
use crate::error::StoreError;
use crate::reducer::{Action, Reducer, State};

/// Actions waiting to be applied by the dispatch currently in progress.
struct DispatchQueue<A> {
    pending: VecDeque<A>,
    draining: bool,
}

struct StoreInner<S, A, R> {
    config: StoreConfig,
    reducer: R,
    state: RwLock<S>,
    queue: ReentrantMutex<RefCell<DispatchQueue<A>>>,
}

/// A store owning one state value, updated only through its reducer.
///
/// `dispatch` runs the reducer, replaces the state and then calls every
/// subscriber with the new state before returning. Clones share the same
/// state and subscribers, so a store is built once and handed to whoever
/// needs it.
///
/// Dispatches are serialized. A subscriber may dispatch; the action is
/// queued and applied once the current notification round finishes, still
/// within the outer `dispatch` call.
///
/// ```
/// use unistore::{CounterAction, CounterReducer, CounterState, Store};
///
/// let store = Store::new(CounterState::default(), CounterReducer);
/// store.dispatch(CounterAction::Increment).unwrap();
/// assert_eq!(store.get_current(), CounterState::new(1));
/// ```
pub struct Store<S, A, R> {
    inner: Arc<StoreInner<S, A, R>>,
    subscribers: Arc<RwLock<SubscriberSet<S>>>,
}

impl<S, A, R> Store<S, A, R>
where
    S: State,
    A: Action,
    R: Reducer<S, A>,
{
    /// Create a new store with the given initial state and reducer.
    pub fn new(initial: S, reducer: R) -> Self {
        Self::with_config(initial, reducer, StoreConfig::default())
    }

    /// Create a new store with explicit settings.
    pub fn with_config(initial: S, reducer: R, config: StoreConfig) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                config,
                reducer,
                state: RwLock::new(initial),
                queue: ReentrantMutex::new(RefCell::new(DispatchQueue {
                    pending: VecDeque::new(),
                    draining: false,
                })),
            }),
            subscribers: Arc::new(RwLock::new(SubscriberSet::new())),
        }
    }

    /// Name from the store's config, recorded on dispatch spans.
    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    /// Settings the store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }

    /// Apply an action and notify subscribers.
    ///
    /// If the reducer fails on `action`, the state is left unchanged, no
    /// subscriber is called and `StoreError::Reducer` is returned.
    ///
    /// Called from inside a subscriber, the action is only queued and this
    /// returns `Ok(())`. The outermost call applies the queue; if a queued
    /// action fails it returns `StoreError::Queued` and discards the rest.
    pub fn dispatch(&self, action: A) -> Result<(), StoreError<R::Error>> {
        let queue = self.inner.queue.lock();
        {
            let mut queued = queue.borrow_mut();
            queued.pending.push_back(action);
            if queued.draining {
                trace!(
                    store = %self.inner.config.name,
                    pending = queued.pending.len(),
                    "re-entrant dispatch queued"
                );
                return Ok(());
            }
            queued.draining = true;
        }

        // Reset on every exit path, including a panicking subscriber.
        let queue = scopeguard::guard(queue, |queue| {
            let mut queued = queue.borrow_mut();
            queued.draining = false;
            queued.pending.clear();
        });

        let mut applied = 0;
        loop {
            let Some(action) = queue.borrow_mut().pending.pop_front() else {
                return Ok(());
            };
            match self.apply(action) {
                Ok(()) => applied += 1,
                Err(source) if applied > 0 => {
                    return Err(StoreError::Queued { applied, source });
                }
                Err(source) => return Err(StoreError::Reducer(source)),
            }
        }
    }

    fn apply(&self, action: A) -> Result<(), R::Error> {
        let inner = &*self.inner;
        let _span = debug_span!("dispatch", store = %inner.config.name).entered();

        let result = {
            let current = inner.state.read();
            inner.reducer.reduce(&current, &action)
        };
        let next = match result {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, "reducer failed, state unchanged");
                return Err(e);
            }
        };

        let changed = {
            let mut state = inner.state.write();
            let changed = *state != next;
            *state = next.clone();
            changed
        };

        if !changed && inner.config.notify == NotifyPolicy::OnChange {
            debug!(changed, "state unchanged, notification skipped");
            return Ok(());
        }

        let subscribers = self.subscribers.read().snapshot();

        debug!(changed, subscribers = subscribers.len(), "state replaced");
        for subscriber in &subscribers {
            subscriber(&next);
        }
        Ok(())
    }

    /// Register a subscriber. Returns `false` if it was already registered.
    pub fn add_subscriber(&self, subscriber: &Subscriber<S>) -> bool {
        let added = self.subscribers.write().insert(subscriber);
        trace!(store = %self.inner.config.name, added, "add subscriber");
        added
    }

    /// Unregister a subscriber. Returns `false` if it was not registered.
    pub fn remove_subscriber(&self, subscriber: &Subscriber<S>) -> bool {
        let removed = self.subscribers.write().remove(subscriber);
        trace!(store = %self.inner.config.name, removed, "remove subscriber");
        removed
    }

    /// Subscribe a closure for as long as the returned guard lives.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<S>
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let subscriber: Subscriber<S> = Arc::new(callback);
        self.add_subscriber(&subscriber);
        Subscription::new(subscriber, Arc::downgrade(&self.subscribers))
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Get a clone of the current state.
    pub fn get_current(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Read state without cloning it.
    pub fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.inner.state.read();
        f(&state)
    }
}

impl<S, A, R> Clone for Store<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}
