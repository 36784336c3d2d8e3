//! Notification values and the per-kind display defaults.

use serde::Serialize;
use std::{fmt, str::FromStr, time::Duration};

/// Kind of a notification. Drives the default display time and the styling
/// picked by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Success,
    Error,
    Warning,
    Info,
}

impl Kind {
    pub const ALL: [Self; 4] = [Self::Success, Self::Error, Self::Warning, Self::Info];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown notification kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

/// Default auto-dismiss time for each kind. Errors linger the longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub success: Duration,
    pub error: Duration,
    pub warning: Duration,
    pub info: Duration,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            success: Duration::from_millis(5000),
            error: Duration::from_millis(8000),
            warning: Duration::from_millis(6000),
            info: Duration::from_millis(5000),
        }
    }
}

impl Durations {
    #[must_use]
    pub const fn for_kind(&self, kind: Kind) -> Duration {
        match kind {
            Kind::Success => self.success,
            Kind::Error => self.error,
            Kind::Warning => self.warning,
            Kind::Info => self.info,
        }
    }
}

/// A message shown to the user. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: Kind,
    text: String,
    duration: Option<Duration>,
}

impl Notification {
    /// Creates a notification that stays until replaced or cleared.
    pub fn new(kind: Kind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            duration: None,
        }
    }

    /// Sets the display time. A zero duration disables auto-dismiss.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Delay after which the notification should clear itself, if any.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Option<Duration> {
        self.duration.filter(|duration| !duration.is_zero())
    }
}
