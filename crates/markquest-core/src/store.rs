//! Generic state container with a single mutation entry point.
//!
//! A [`Store`] owns one state value. The only way to change it is
//! [`Store::dispatch`], which runs the reducer under the store's lock and
//! publishes the new state to every subscriber when it differs from the old
//! one. Readers only ever see cloned snapshots.

use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tracing::debug;

use crate::action::Action;
use crate::reducer::Reducer;

/// Default capacity of the change notification channel.
pub const DEFAULT_NOTIFY_CAPACITY: usize = 32;

/// State container driven by a [`Reducer`].
#[derive(Debug)]
pub struct Store<R: Reducer> {
    state: Mutex<R::State>,
    notifier: broadcast::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: R::State) -> Self {
        Self::with_capacity(initial, DEFAULT_NOTIFY_CAPACITY)
    }

    /// Creates a store whose notification channel buffers `capacity` states
    /// per lagging subscriber.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(initial: R::State, capacity: usize) -> Self {
        let (notifier, _) = broadcast::channel(capacity);
        Self {
            state: Mutex::new(initial),
            notifier,
            _reducer: PhantomData,
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> R::State {
        self.lock().clone()
    }

    /// Applies `action` and returns the resulting state.
    ///
    /// The reducer runs while the lock is held, so concurrent dispatches are
    /// applied one at a time. Subscribers are notified only when the state
    /// actually changed, in the order the changes were committed.
    pub fn dispatch(&self, action: &R::Action) -> R::State {
        let mut guard = self.lock();
        let next = R::reduce(&guard, action);
        if next == *guard {
            debug!(action_type = action.action_type(), "action left state unchanged");
            return next;
        }
        *guard = next.clone();

        // Publish before releasing the lock so notifications follow commit
        // order. No subscribers is not an error.
        let _ = self.notifier.send(next.clone());
        drop(guard);

        debug!(action_type = action.action_type(), "state transitioned");
        next
    }

    /// Subscribes to state changes made after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<R::State> {
        self.notifier.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.notifier.receiver_count()
    }

    // The reducer is pure, so a panic elsewhere cannot leave a half-written
    // state behind the lock.
    fn lock(&self) -> MutexGuard<'_, R::State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
