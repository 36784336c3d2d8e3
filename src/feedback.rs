//! Turns the outcome of a form submission into a toast.
//!
//! Upstream calls (login, register, reset) live elsewhere; they hand back a
//! [`SubmitFailure`] carrying the HTTP status and the server's `detail`, if
//! any. This module owns the user-facing wording.

use crate::notify::Broadcaster;
use std::fmt;
use tracing::{info, warn};

/// Status used when the server could not be reached at all.
pub const STATUS_UNREACHABLE: u16 = 0;

pub const REGISTER_SUCCESS: &str = "Account created! Sign in to continue.";
pub const RESET_SUCCESS: &str = "Recovery email sent! Check your inbox.";
pub const UNREACHABLE: &str = "Could not connect to the server";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Login,
    Register,
    ForgotPassword,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::ForgotPassword => "forgot-password",
        })
    }
}

impl FormKind {
    fn generic_failure(self) -> &'static str {
        match self {
            Self::Login => "Could not sign in. Please try again.",
            Self::Register => "Could not create account. Please try again.",
            Self::ForgotPassword => "Could not send the recovery email. Please try again.",
        }
    }

    // Status this form explains with its own wording.
    fn known_status(self) -> (u16, &'static str) {
        match self {
            Self::Login => (401, "Incorrect email or password"),
            Self::Register => (409, "This email is already in use"),
            Self::ForgotPassword => (404, "Email not found"),
        }
    }

    fn success(self) -> Option<&'static str> {
        match self {
            Self::Login => None,
            Self::Register => Some(REGISTER_SUCCESS),
            Self::ForgotPassword => Some(RESET_SUCCESS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("request failed with status {status}")]
pub struct SubmitFailure {
    pub status: u16,
    pub detail: Option<String>,
}

impl SubmitFailure {
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            status: STATUS_UNREACHABLE,
            detail: None,
        }
    }

    #[must_use]
    pub fn http(status: u16, detail: Option<String>) -> Self {
        Self { status, detail }
    }
}

/// User-facing text for a failed submission.
#[must_use]
pub fn failure_message(form: FormKind, failure: &SubmitFailure) -> String {
    let (status, text) = form.known_status();
    if failure.status == status {
        return text.to_string();
    }
    if failure.status == STATUS_UNREACHABLE {
        return UNREACHABLE.to_string();
    }
    match failure.detail.as_deref().map(str::trim) {
        Some(detail) if !detail.is_empty() => detail.to_string(),
        _ => form.generic_failure().to_string(),
    }
}

/// Shows the toast matching `outcome`.
pub fn report(broadcaster: &Broadcaster, form: FormKind, outcome: &Result<(), SubmitFailure>) {
    match outcome {
        Ok(()) => {
            info!(%form, "form submitted");
            if let Some(text) = form.success() {
                broadcaster.show_success(text);
            }
        }
        Err(failure) => {
            warn!(%form, status = failure.status, "form submission failed");
            broadcaster.show_error(failure_message(form, failure));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{Kind, Notification, TokioScheduler};

    #[test]
    fn form_specific_status_wins_over_detail() {
        let failure = SubmitFailure::http(401, Some("bad credentials".to_string()));
        assert_eq!(
            failure_message(FormKind::Login, &failure),
            "Incorrect email or password"
        );
        assert_eq!(
            failure_message(FormKind::Register, &SubmitFailure::http(409, None)),
            "This email is already in use"
        );
        assert_eq!(
            failure_message(FormKind::ForgotPassword, &SubmitFailure::http(404, None)),
            "Email not found"
        );
    }

    #[test]
    fn unreachable_server() {
        for form in [FormKind::Login, FormKind::Register, FormKind::ForgotPassword] {
            assert_eq!(
                failure_message(form, &SubmitFailure::unreachable()),
                UNREACHABLE
            );
        }
    }

    #[test]
    fn detail_used_for_other_statuses() {
        let failure = SubmitFailure::http(422, Some("Password too common".to_string()));
        assert_eq!(
            failure_message(FormKind::Register, &failure),
            "Password too common"
        );
    }

    #[test]
    fn generic_message_without_detail() {
        assert_eq!(
            failure_message(FormKind::Login, &SubmitFailure::http(500, None)),
            "Could not sign in. Please try again."
        );
        assert_eq!(
            failure_message(FormKind::Register, &SubmitFailure::http(500, Some("  ".to_string()))),
            "Could not create account. Please try again."
        );
        // A status meaningful for another form is generic here.
        assert_eq!(
            failure_message(FormKind::ForgotPassword, &SubmitFailure::http(401, None)),
            "Could not send the recovery email. Please try again."
        );
    }

    #[tokio::test]
    async fn report_shows_matching_toast() -> Result<(), tokio::runtime::TryCurrentError> {
        let broadcaster = Broadcaster::new(TokioScheduler::try_current()?);

        report(&broadcaster, FormKind::Register, &Ok(()));
        assert_eq!(
            broadcaster.current(),
            Some(
                Notification::new(Kind::Success, REGISTER_SUCCESS)
                    .with_duration(broadcaster.durations().success)
            )
        );

        report(
            &broadcaster,
            FormKind::ForgotPassword,
            &Err(SubmitFailure::http(404, None)),
        );
        assert_eq!(
            broadcaster.current().map(|n| (n.kind(), n.text().to_string())),
            Some((Kind::Error, "Email not found".to_string()))
        );
        Ok(())
    }

    #[tokio::test]
    async fn login_success_shows_nothing() -> Result<(), tokio::runtime::TryCurrentError> {
        let broadcaster = Broadcaster::new(TokioScheduler::try_current()?);
        report(&broadcaster, FormKind::Login, &Ok(()));
        assert_eq!(broadcaster.current(), None);
        Ok(())
    }
}
