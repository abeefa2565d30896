use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RegisterFormError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
}

/// "Create your account" form. Checked before anything is sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Required fields, then matching passwords, then password length.
    /// Passwords are compared as typed; length counts characters.
    pub fn validate(&self) -> Result<(), RegisterFormError> {
        let fields = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(RegisterFormError::MissingField);
        }
        if self.password != self.confirm_password {
            return Err(RegisterFormError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegisterFormError::PasswordTooShort);
        }
        Ok(())
    }
}
