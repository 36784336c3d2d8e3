//! Visual styling for toasts. Class strings follow the portal's utility CSS.

use crate::notify::Kind;
use serde::Serialize;

/// Icon shown at the start of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    CheckCircle,
    XCircle,
    ExclamationTriangle,
    InformationCircle,
}

impl Icon {
    /// Single-character stand-in for terminals.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::CheckCircle => '✔',
            Self::XCircle => '✖',
            Self::ExclamationTriangle => '⚠',
            Self::InformationCircle => 'ℹ',
        }
    }

    /// Accessible name for screen readers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CheckCircle => "Success",
            Self::XCircle => "Error",
            Self::ExclamationTriangle => "Warning",
            Self::InformationCircle => "Information",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToastStyle {
    pub container: &'static str,
    pub text: &'static str,
    pub close_button: &'static str,
    pub icon: Option<Icon>,
}

impl ToastStyle {
    pub const SUCCESS: Self = Self {
        container: "border bg-green-50 border-green-200",
        text: "text-green-800",
        close_button: "text-green-400 hover:text-green-600 focus:ring-green-500",
        icon: Some(Icon::CheckCircle),
    };

    pub const ERROR: Self = Self {
        container: "border bg-red-50 border-red-200",
        text: "text-red-800",
        close_button: "text-red-400 hover:text-red-600 focus:ring-red-500",
        icon: Some(Icon::XCircle),
    };

    pub const WARNING: Self = Self {
        container: "border bg-yellow-50 border-yellow-200",
        text: "text-yellow-800",
        close_button: "text-yellow-400 hover:text-yellow-600 focus:ring-yellow-500",
        icon: Some(Icon::ExclamationTriangle),
    };

    pub const INFO: Self = Self {
        container: "border bg-blue-50 border-blue-200",
        text: "text-blue-800",
        close_button: "text-blue-400 hover:text-blue-600 focus:ring-blue-500",
        icon: Some(Icon::InformationCircle),
    };

    /// Fallback for kinds this renderer does not know about.
    pub const NEUTRAL: Self = Self {
        container: "border bg-gray-50 border-gray-200",
        text: "text-gray-800",
        close_button: "text-gray-400 hover:text-gray-600 focus:ring-gray-500",
        icon: None,
    };

    #[must_use]
    pub const fn for_kind(kind: Kind) -> Self {
        match kind {
            Kind::Success => Self::SUCCESS,
            Kind::Error => Self::ERROR,
            Kind::Warning => Self::WARNING,
            Kind::Info => Self::INFO,
        }
    }

    /// Styles a kind received as a raw tag, e.g. from a serialized payload.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        tag.parse::<Kind>()
            .map_or(Self::NEUTRAL, Self::for_kind)
    }
}
