//! Single-slot notification broadcaster.
//!
//! Holds "the one current notification" and fans every change out to the
//! registered observers. The slot, its generation and the observer list live
//! behind one mutex that stays locked across mutation and fan-out, so each
//! observer sees changes in order and never a stale value after `publish` or
//! `clear` returns. Observers must not call back into the broadcaster from
//! inside their callback.

use super::{
    notification::{Durations, Kind, Notification},
    scheduler::{Scheduler, TokioScheduler},
};
use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};
use tokio::runtime::TryCurrentError;
use tracing::{debug, trace};

/// Callback receiving the current notification, `None` when the slot is empty.
pub type Observer = Arc<dyn Fn(Option<&Notification>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubscriberId(u64);

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    // Advanced by every publish and clear; a deferred dismiss only applies
    // while the generation it captured is still current.
    generation: u64,
    observers: Vec<(SubscriberId, Observer)>,
    next_subscriber: u64,
}

impl Slot {
    fn fan_out(&self) {
        let current = self.current.as_ref();
        for (_, observer) in &self.observers {
            observer(current);
        }
    }

    fn advance(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}

struct Shared {
    slot: Mutex<Slot>,
    scheduler: Box<dyn Scheduler>,
    durations: Durations,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Slot> {
        // An observer panicking mid fan-out leaves the slot itself consistent.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn dismiss(&self, generation: u64) {
        let mut slot = self.lock();
        if slot.generation != generation || slot.current.is_none() {
            trace!(generation, current = slot.generation, "stale dismiss ignored");
            return;
        }

        slot.current = None;
        slot.advance();
        debug!(generation, "notification auto-dismissed");
        slot.fan_out();
    }
}

/// Cloneable handle to the process-wide notification slot.
///
/// Build one at startup and pass clones to every collaborator that shows or
/// renders notifications.
#[derive(Clone)]
pub struct Broadcaster {
    shared: Arc<Shared>,
}

impl fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.shared.lock();
        f.debug_struct("Broadcaster")
            .field("current", &slot.current)
            .field("generation", &slot.generation)
            .field("observers", &slot.observers.len())
            .field("durations", &self.shared.durations)
            .finish()
    }
}

impl Broadcaster {
    pub fn new(scheduler: impl Scheduler + 'static) -> Self {
        Self::with_durations(scheduler, Durations::default())
    }

    pub fn with_durations(scheduler: impl Scheduler + 'static, durations: Durations) -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot::default()),
                scheduler: Box::new(scheduler),
                durations,
            }),
        }
    }

    /// Broadcaster whose dismiss timers run on the current tokio runtime.
    ///
    /// # Errors
    /// Returns an error when called outside a tokio runtime.
    pub fn on_current_runtime(durations: Durations) -> Result<Self, TryCurrentError> {
        Ok(Self::with_durations(
            TokioScheduler::try_current()?,
            durations,
        ))
    }

    #[must_use]
    pub fn durations(&self) -> Durations {
        self.shared.durations
    }

    pub fn show_success(&self, text: impl Into<String>) {
        self.show(Kind::Success, text);
    }

    pub fn show_error(&self, text: impl Into<String>) {
        self.show(Kind::Error, text);
    }

    pub fn show_warning(&self, text: impl Into<String>) {
        self.show(Kind::Warning, text);
    }

    pub fn show_info(&self, text: impl Into<String>) {
        self.show(Kind::Info, text);
    }

    /// Shows `text` with the configured default duration for `kind`.
    pub fn show(&self, kind: Kind, text: impl Into<String>) {
        self.show_for(kind, text, self.shared.durations.for_kind(kind));
    }

    /// Shows `text` for `duration`. A zero duration keeps it until replaced or cleared.
    pub fn show_for(&self, kind: Kind, text: impl Into<String>, duration: Duration) {
        self.publish(Notification::new(kind, text).with_duration(duration));
    }

    /// Replaces the current notification and notifies every observer.
    ///
    /// Any dismiss scheduled for the previous notification becomes a no-op.
    pub fn publish(&self, notification: Notification) {
        let delay = notification.auto_dismiss_after();
        let generation = {
            let mut slot = self.shared.lock();
            let generation = slot.advance();
            debug!(
                generation,
                kind = %notification.kind(),
                auto_dismiss = ?delay,
                "notification published"
            );
            slot.current = Some(notification);
            slot.fan_out();
            generation
        };

        if let Some(delay) = delay {
            let shared = Arc::downgrade(&self.shared);
            self.shared.scheduler.defer(
                delay,
                Box::new(move || {
                    if let Some(shared) = shared.upgrade() {
                        shared.dismiss(generation);
                    }
                }),
            );
        }
    }

    /// Empties the slot and notifies every observer, even if it was already empty.
    pub fn clear(&self) {
        let mut slot = self.shared.lock();
        let generation = slot.advance();
        debug!(generation, "notification cleared");
        slot.current = None;
        slot.fan_out();
    }

    /// Snapshot of the current notification.
    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.shared.lock().current.clone()
    }

    /// Registers `observer`, delivering the present value right away and every
    /// change after that until the returned [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Option<&Notification>) + Send + Sync + 'static,
    {
        let observer: Observer = Arc::new(observer);
        let mut slot = self.shared.lock();
        let id = SubscriberId(slot.next_subscriber);
        slot.next_subscriber += 1;

        observer(slot.current.as_ref());
        slot.observers.push((id, observer));
        trace!(subscriber = id.0, observers = slot.observers.len(), "observer subscribed");

        Subscription {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.shared.lock().observers.len()
    }
}

/// Keeps an observer registered. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes its observer"]
pub struct Subscription {
    id: SubscriberId,
    shared: Weak<Shared>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id.0).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            let mut slot = shared.lock();
            slot.observers.retain(|(id, _)| *id != self.id);
            trace!(subscriber = self.id.0, "observer unsubscribed");
        }
    }
}
