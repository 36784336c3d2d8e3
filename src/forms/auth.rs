//! Login, registration and password-reset forms.

use super::{
    field::{Field, FieldError, InputType, Rule},
    Form,
};
use secrecy::{ExposeSecret, SecretString};

const MIN_NAME_LENGTH: usize = 2;
const MIN_PASSWORD_LENGTH: usize = 6;

fn email_field() -> Field {
    Field::new("email", "Email", InputType::Email)
        .rule(Rule::Required)
        .rule(Rule::Email)
}

fn password_field() -> Field {
    Field::new("password", "Password", InputType::Password)
        .rule(Rule::Required)
        .rule(Rule::MinLength(MIN_PASSWORD_LENGTH))
}

#[derive(Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: Field,
    pub password: Field,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: email_field(),
            password: password_field(),
        }
    }
}

impl Form for LoginForm {
    type Request = LoginRequest;

    fn fields(&self) -> Vec<&Field> {
        vec![&self.email, &self.password]
    }

    fn fields_mut(&mut self) -> Vec<&mut Field> {
        vec![&mut self.email, &mut self.password]
    }

    fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.value().to_string(),
            password: SecretString::from(self.password.value().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: Field,
    pub email: Field,
    pub password: Field,
    pub confirm_password: Field,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: Field::new("name", "Full name", InputType::Text)
                .rule(Rule::Required)
                .rule(Rule::MinLength(MIN_NAME_LENGTH)),
            email: email_field(),
            password: password_field(),
            confirm_password: Field::new(
                "confirmPassword",
                "Confirm password",
                InputType::Password,
            )
            .rule(Rule::Required),
        }
    }
}

impl RegisterForm {
    pub fn input_password(&mut self, value: impl Into<String>) {
        self.password.input(value);
        self.revalidate();
    }

    pub fn input_confirm_password(&mut self, value: impl Into<String>) {
        self.confirm_password.input(value);
        self.revalidate();
    }

    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password.value() == self.confirm_password.value()
    }
}

impl Form for RegisterForm {
    type Request = RegisterRequest;

    fn fields(&self) -> Vec<&Field> {
        vec![
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
    }

    fn fields_mut(&mut self) -> Vec<&mut Field> {
        vec![
            &mut self.name,
            &mut self.email,
            &mut self.password,
            &mut self.confirm_password,
        ]
    }

    // The mismatch lives on the confirmation field so it shows under that input.
    fn revalidate(&mut self) {
        let mismatch = (!self.passwords_match()).then_some(FieldError::PasswordMismatch);
        self.confirm_password.set_cross_field_error(mismatch);
    }

    fn request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            password: SecretString::from(self.password.value().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ForgotPasswordForm {
    pub email: Field,
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self {
            email: email_field(),
        }
    }
}

impl Form for ForgotPasswordForm {
    type Request = PasswordResetRequest;

    fn fields(&self) -> Vec<&Field> {
        vec![&self.email]
    }

    fn fields_mut(&mut self) -> Vec<&mut Field> {
        vec![&mut self.email]
    }

    fn request(&self) -> PasswordResetRequest {
        PasswordResetRequest {
            email: self.email.value().to_string(),
        }
    }
}

impl LoginRequest {
    /// Password for the outgoing call; keep it out of logs.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl RegisterRequest {
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormError;

    fn filled_register(password: &str, confirm: &str) -> RegisterForm {
        let mut form = RegisterForm::default();
        form.name.input("Ada Lovelace");
        form.email.input("ada@example.com");
        form.input_password(password);
        form.input_confirm_password(confirm);
        form
    }

    #[test]
    fn login_submit_returns_request() {
        let mut form = LoginForm::default();
        form.email.input("user@example.com");
        form.password.input("secret1");

        let request = form.submit();
        assert!(request.is_ok());
        if let Ok(request) = request {
            assert_eq!(request.email, "user@example.com");
            assert_eq!(request.password(), "secret1");
        }
    }

    #[test]
    fn empty_login_marks_all_touched() {
        let mut form = LoginForm::default();
        assert!(!form.email.has_errors());

        let result = form.submit();
        assert_eq!(
            result.err(),
            Some(FormError::Invalid {
                messages: vec![
                    "Email is required".to_string(),
                    "Password is required".to_string()
                ]
            })
        );
        assert!(form.email.touched());
        assert!(form.password.touched());
        assert!(form.email.has_errors());
    }

    #[test]
    fn login_rejects_short_password_and_bad_email() {
        let mut form = LoginForm::default();
        form.email.input("not-an-email");
        form.password.input("123");

        assert_eq!(
            form.submit().err().map(|err| err.to_string()),
            Some(
                "form has invalid fields: Email must be a valid email; Password must be at least 6 characters"
                    .to_string()
            )
        );
    }

    #[test]
    fn register_mismatch_on_confirm_field() {
        let mut form = filled_register("secret1", "secret2");
        assert!(!form.passwords_match());
        assert_eq!(
            form.confirm_password.errors(),
            vec![FieldError::PasswordMismatch]
        );
        assert_eq!(
            form.submit().err(),
            Some(FormError::Invalid {
                messages: vec!["Passwords do not match".to_string()]
            })
        );
    }

    #[test]
    fn register_mismatch_clears_once_fixed() {
        let mut form = filled_register("secret1", "secret2");
        form.input_confirm_password("secret1");
        assert!(form.confirm_password.is_valid());

        let request = form.submit();
        assert!(request.is_ok());
        if let Ok(request) = request {
            assert_eq!(request.name, "Ada Lovelace");
            assert_eq!(request.password(), "secret1");
        }
    }

    #[test]
    fn register_mismatch_follows_password_edits() {
        let mut form = filled_register("secret1", "secret1");
        assert!(form.is_valid());

        form.input_password("secret9");
        assert_eq!(
            form.confirm_password.errors(),
            vec![FieldError::PasswordMismatch]
        );
    }

    #[test]
    fn register_submit_revalidates_direct_edits() {
        let mut form = filled_register("secret1", "secret1");
        form.password.input("changed1");
        assert!(form.submit().is_err());
    }

    #[test]
    fn register_name_too_short() {
        let mut form = filled_register("secret1", "secret1");
        form.name.input("A");
        assert_eq!(
            form.error_messages(),
            vec!["Full name must be at least 2 characters".to_string()]
        );
    }

    #[test]
    fn forgot_password_requires_valid_email() {
        let mut form = ForgotPasswordForm::default();
        form.email.input("user@");
        assert!(form.submit().is_err());

        form.email.input("user@example.com");
        assert_eq!(
            form.submit(),
            Ok(PasswordResetRequest {
                email: "user@example.com".to_string()
            })
        );
    }

    #[test]
    fn request_debug_hides_password() {
        let mut form = LoginForm::default();
        form.email.input("user@example.com");
        form.password.input("hunter22");
        if let Ok(request) = form.submit() {
            assert!(!format!("{request:?}").contains("hunter22"));
        }
    }
}
