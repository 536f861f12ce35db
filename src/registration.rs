//! Registration Form Logic
//!
//! Client-side validation for the sign-up form. Runs before any request is
//! made; the first failing rule wins.

use thiserror::Error;

use crate::models::{RegisterRequest, DEFAULT_ROLE};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Rejections shown in the form's message slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Optional
    pub profile_picture_url: String,
}

/// Live per-keystroke password flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecks {
    pub is_password_strong: bool,
    pub is_password_match: bool,
}

/// Length in UTF-16 code units, as the browser counts it
fn is_strong(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

impl RegistrationForm {
    /// Validate and build the request body
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let required = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if required.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_strong(&self.password) {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(RegisterRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: DEFAULT_ROLE.to_string(),
            profile_picture_url: if self.profile_picture_url.is_empty() {
                None
            } else {
                Some(self.profile_picture_url.clone())
            },
        })
    }

    pub fn password_checks(&self) -> PasswordChecks {
        PasswordChecks {
            is_password_strong: is_strong(&self.password),
            is_password_match: self.password == self.confirm_password,
        }
    }

    /// Inline "at least 8 characters" hint
    pub fn show_strength_hint(&self) -> bool {
        !self.password.is_empty() && !self.password_checks().is_password_strong
    }

    /// Inline "do not match" hint
    pub fn show_mismatch_hint(&self) -> bool {
        !self.confirm_password.is_empty() && !self.password_checks().is_password_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "engine-42".into(),
            confirm_password: "engine-42".into(),
            profile_picture_url: String::new(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.role, "team_member");
        assert_eq!(request.profile_picture_url, None);
        assert_eq!(request.email, "ada@example.com");
    }

    #[test]
    fn test_picture_url_passed_through() {
        let form = RegistrationForm { profile_picture_url: "https://img.example.com/a.png".into(), ..filled() };
        let request = form.validate().unwrap();
        assert_eq!(request.profile_picture_url.as_deref(), Some("https://img.example.com/a.png"));
    }

    #[test]
    fn test_each_required_field() {
        let blanks: [fn(&mut RegistrationForm); 5] = [
            |f| f.first_name.clear(),
            |f| f.last_name.clear(),
            |f| f.email.clear(),
            |f| f.password.clear(),
            |f| f.confirm_password.clear(),
        ];
        for blank in blanks {
            let mut form = filled();
            blank(&mut form);
            assert_eq!(form.validate(), Err(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_missing_fields_checked_before_length() {
        let form = RegistrationForm { email: String::new(), password: "abc".into(), ..filled() };
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));
    }

    #[test]
    fn test_short_password_rejected() {
        let form = RegistrationForm { password: "abc".into(), confirm_password: "abc".into(), ..filled() };
        let err = form.validate().unwrap_err();
        assert_eq!(err, ValidationError::PasswordTooShort);
        assert_eq!(err.to_string(), "Password must be at least 8 characters long.");
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // Each emoji is two UTF-16 units
        let form = RegistrationForm { password: "🔒🔒🔒🔒".into(), confirm_password: "🔒🔒🔒🔒".into(), ..filled() };
        assert!(form.validate().is_ok());

        let form = RegistrationForm { password: "🔒🔒🔒".into(), confirm_password: "🔒🔒🔒".into(), ..filled() };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_length_checked_before_match() {
        let form = RegistrationForm { password: "abc".into(), confirm_password: "xyz".into(), ..filled() };
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn test_mismatch_rejected() {
        let form = RegistrationForm { confirm_password: "engine-43".into(), ..filled() };
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match.");
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::MissingFields.to_string(), "Please fill in all required fields.");
    }

    #[test]
    fn test_live_checks_and_hints() {
        let mut form = RegistrationForm::default();
        assert!(!form.show_strength_hint());
        assert!(!form.show_mismatch_hint());

        form.password = "short".into();
        assert!(form.show_strength_hint());
        assert!(!form.show_mismatch_hint());

        form.confirm_password = "shor".into();
        assert!(form.show_mismatch_hint());

        form.password = "long-enough".into();
        form.confirm_password = "long-enough".into();
        assert_eq!(
            form.password_checks(),
            PasswordChecks { is_password_strong: true, is_password_match: true }
        );
        assert!(!form.show_strength_hint());
        assert!(!form.show_mismatch_hint());
    }
}
