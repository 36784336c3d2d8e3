//! # Portal (authentication portal client utilities)
//!
//! `portal` holds the client-side pieces of the sign-in portal that are not
//! markup: the toast notification slot, the form validation rules and the
//! wording used to report submit outcomes.
//!
//! ## Toasts
//!
//! One [`notify::Broadcaster`] per process owns the single notification slot.
//! Publishing replaces whatever is showing; a notification with a non-zero
//! duration clears itself unless something newer replaced it first. Observers
//! receive the present value on subscribe and every change after that, in
//! subscription order, inside the publishing call.
//!
//! ## Forms
//!
//! [`forms`] validates the login, registration and password-reset forms,
//! including the password confirmation check, and produces typed requests.
//! Passwords are carried as `SecretString` and never appear in `Debug` output.
//!
//! ## Feedback
//!
//! [`feedback`] maps a submit result to the toast the user sees, e.g. a `409`
//! on registration becomes "This email is already in use".

pub mod cli;
pub mod feedback;
pub mod forms;
pub mod notify;
pub mod toast;
