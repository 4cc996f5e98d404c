use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::trace;

/// A callback invoked with the new state after each dispatch.
///
/// Identity is the `Arc` allocation: clones of one `Subscriber` are the same
/// subscriber, separately built closures are different ones.
pub type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Build a [`Subscriber`] from a closure.
pub fn subscriber<S, F>(f: F) -> Subscriber<S>
where
    F: Fn(&S) + Send + Sync + 'static,
{
    Arc::new(f)
}

fn same<S>(a: &Subscriber<S>, b: &Subscriber<S>) -> bool {
    // Compare data addresses only; vtable pointers are not unique.
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

/// Registered subscribers in insertion order, unique by identity.
pub(crate) struct SubscriberSet<S> {
    entries: Vec<Subscriber<S>>,
}

impl<S> SubscriberSet<S> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, subscriber: &Subscriber<S>) -> bool {
        if self.contains(subscriber) {
            return false;
        }
        self.entries.push(Arc::clone(subscriber));
        true
    }

    pub(crate) fn remove(&mut self, subscriber: &Subscriber<S>) -> bool {
        match self.entries.iter().position(|s| same(s, subscriber)) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, subscriber: &Subscriber<S>) -> bool {
        self.entries.iter().any(|s| same(s, subscriber))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copy of the current registrations, taken before a notification round.
    pub(crate) fn snapshot(&self) -> Vec<Subscriber<S>> {
        self.entries.clone()
    }
}

/// RAII guard returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Dropping the guard unregisters its subscriber. The guard does not keep
/// the store alive.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription<S> {
    subscriber: Subscriber<S>,
    registry: Weak<RwLock<SubscriberSet<S>>>,
}

impl<S> Subscription<S> {
    pub(crate) fn new(subscriber: Subscriber<S>, registry: Weak<RwLock<SubscriberSet<S>>>) -> Self {
        Self {
            subscriber,
            registry,
        }
    }

    /// The registered callback, usable with `remove_subscriber`.
    pub fn subscriber(&self) -> &Subscriber<S> {
        &self.subscriber
    }

    /// Unregister now. Returns `false` if it was already removed or the
    /// store is gone.
    pub fn unsubscribe(mut self) -> bool {
        self.detach()
    }

    fn detach(&mut self) -> bool {
        match std::mem::take(&mut self.registry).upgrade() {
            Some(registry) => {
                let removed = registry.write().remove(&self.subscriber);
                trace!(removed, "subscription released");
                removed
            }
            None => false,
        }
    }
}

impl<S> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
