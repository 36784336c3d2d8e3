//! Client-side form handling for the portal screens.
//!
//! Each form owns its [`Field`]s, knows its cross-field checks and turns into
//! a typed request on a successful submit. An invalid submit marks every
//! field as touched so all messages become visible, mirroring what the user
//! sees after pressing the button on an incomplete form.

mod auth;
mod field;

pub use auth::{
    ForgotPasswordForm, LoginForm, LoginRequest, PasswordResetRequest, RegisterForm,
    RegisterRequest,
};
pub use field::{valid_email, Field, FieldError, InputType, Rule};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form has invalid fields: {}", .messages.join("; "))]
    Invalid { messages: Vec<String> },
}

pub trait Form {
    type Request;

    fn fields(&self) -> Vec<&Field>;

    fn fields_mut(&mut self) -> Vec<&mut Field>;

    /// Re-runs form-level validators. Forms without any keep the default.
    fn revalidate(&mut self) {}

    /// Builds the request from field values. Only called on a valid form.
    fn request(&self) -> Self::Request;

    fn is_valid(&self) -> bool {
        self.fields().iter().all(|field| field.is_valid())
    }

    fn mark_all_touched(&mut self) {
        for field in self.fields_mut() {
            field.blur();
        }
    }

    /// Messages of every invalid field, in field order.
    fn error_messages(&self) -> Vec<String> {
        self.fields()
            .iter()
            .flat_map(|field| field.error_messages())
            .collect()
    }

    /// Validates and returns the request to send.
    ///
    /// # Errors
    /// Returns [`FormError::Invalid`] after marking every field touched.
    fn submit(&mut self) -> Result<Self::Request, FormError> {
        self.revalidate();
        if self.is_valid() {
            return Ok(self.request());
        }

        self.mark_all_touched();
        Err(FormError::Invalid {
            messages: self.error_messages(),
        })
    }
}
