//! Toast rendering contract.
//!
//! Renderers subscribe to a [`Broadcaster`], turn each delivered value into a
//! [`ToastView`] (nothing for an empty slot) and wire their close affordance
//! to a [`Dismiss`] handle.

mod style;
pub mod terminal;

pub use style::{Icon, ToastStyle};

use crate::notify::{Broadcaster, Kind, Notification};
use serde::Serialize;

pub const DISMISS_LABEL: &str = "Close";

/// Everything a renderer needs to draw one toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastView {
    pub kind: Kind,
    pub text: String,
    pub style: ToastStyle,
    pub dismiss_label: &'static str,
}

impl ToastView {
    /// View for the current slot value; `None` means render nothing.
    #[must_use]
    pub fn from_current(current: Option<&Notification>) -> Option<Self> {
        current.map(Self::from)
    }
}

impl From<&Notification> for ToastView {
    fn from(notification: &Notification) -> Self {
        Self {
            kind: notification.kind(),
            text: notification.text().to_string(),
            style: ToastStyle::for_kind(notification.kind()),
            dismiss_label: DISMISS_LABEL,
        }
    }
}

/// Manual close affordance for a rendered toast.
#[derive(Clone, Debug)]
pub struct Dismiss {
    broadcaster: Broadcaster,
}

impl Dismiss {
    #[must_use]
    pub fn new(broadcaster: Broadcaster) -> Self {
        Self { broadcaster }
    }

    pub fn dismiss(&self) {
        self.broadcaster.clear();
    }
}
