//! Transient toast notifications.
//!
//! A [`Broadcaster`] owns the single notification slot of the process. Form
//! handlers call the `show_*` helpers, renderers subscribe, and every
//! published notification with a non-zero duration clears itself once its
//! time is up unless something newer has replaced it first.

mod broadcaster;
mod notification;
mod scheduler;

pub use broadcaster::{Broadcaster, Observer, Subscription};
pub use notification::{Durations, Kind, Notification, UnknownKind};
pub use scheduler::{Scheduler, Task, TokioScheduler};
