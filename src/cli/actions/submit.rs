use crate::{
    cli::{actions::session::ToastSession, globals::GlobalArgs},
    feedback::{self, FormKind, SubmitFailure},
    forms::{ForgotPasswordForm, Form, LoginForm, RegisterForm},
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Values the user typed, one variant per form.
#[derive(Debug)]
pub enum FormInput {
    Login {
        email: String,
        password: SecretString,
    },
    Register {
        name: String,
        email: String,
        password: SecretString,
        confirm_password: SecretString,
    },
    ForgotPassword {
        email: String,
    },
}

impl FormInput {
    #[must_use]
    pub fn kind(&self) -> FormKind {
        match self {
            Self::Login { .. } => FormKind::Login,
            Self::Register { .. } => FormKind::Register,
            Self::ForgotPassword { .. } => FormKind::ForgotPassword,
        }
    }

    /// Fills the matching form and submits it.
    ///
    /// # Errors
    /// Returns the form's validation error when a field is invalid.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Login { email, password } => {
                let mut form = LoginForm::default();
                form.email.input(email.as_str());
                form.password.input(password.expose_secret());
                let request = form.submit()?;
                debug!(email = %request.email, "login request ready");
            }
            Self::Register {
                name,
                email,
                password,
                confirm_password,
            } => {
                let mut form = RegisterForm::default();
                form.name.input(name.as_str());
                form.email.input(email.as_str());
                form.input_password(password.expose_secret());
                form.input_confirm_password(confirm_password.expose_secret());
                let request = form.submit()?;
                debug!(email = %request.email, name = %request.name, "register request ready");
            }
            Self::ForgotPassword { email } => {
                let mut form = ForgotPasswordForm::default();
                form.email.input(email.as_str());
                let request = form.submit()?;
                debug!(email = %request.email, "password reset request ready");
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub input: FormInput,
    /// Server answer replayed for the submission.
    pub response: Result<(), SubmitFailure>,
}

/// Execute the submit action.
/// # Errors
/// Returns an error if the form is invalid or the toast cannot be displayed.
pub async fn execute(args: Args) -> Result<()> {
    args.input.validate()?;

    let session = ToastSession::start(&args.globals)?;
    feedback::report(session.broadcaster(), args.input.kind(), &args.response);
    session.wait_for_dismiss().await
}
