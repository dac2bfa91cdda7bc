//! Sign-up form state.
//!
//! Validation runs on two triggers with different visibility. Every
//! keystroke re-validates silently to drive the submit button and the
//! strength meter; leaving a field (blur) makes that field's error
//! visible inline. Submitting validates everything at once and shows
//! all errors together.

use brasserie_core::types::Email;
use brasserie_core::validate::{self, FieldError, Strength};

/// Which sign-up field an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Email,
    Password,
    ConfirmPassword,
}

/// The inline errors currently shown next to each field. `None` means
/// no error is displayed for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl SignupErrors {
    /// Whether no field shows an error.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// What the sign-up screen shows for the current form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDisplay {
    /// Whether the create-account button is enabled.
    pub submittable: bool,
    /// Strength meter value, or `None` when the password is empty and
    /// the meter is hidden.
    pub strength: Option<(u8, Strength)>,
    /// The inline errors currently visible.
    pub errors: SignupErrors,
}

/// A validated sign-up, ready for the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    /// The parsed account email.
    pub email: Email,
    /// The password exactly as typed.
    pub password: String,
}

/// State machine behind the sign-up screen.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    email: String,
    password: String,
    confirm_password: String,
    shown: SignupErrors,
}

impl SignupForm {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The user typed into a field. Re-validates silently: the button
    /// state and strength meter update, but inline errors are left as
    /// they were.
    pub fn field_changed(&mut self, field: SignupField, value: &str) -> SignupDisplay {
        match field {
            SignupField::Email => self.email = value.to_owned(),
            SignupField::Password => self.password = value.to_owned(),
            SignupField::ConfirmPassword => self.confirm_password = value.to_owned(),
        }
        self.display()
    }

    /// Focus left a field; its current validation result becomes the
    /// inline error (or clears it).
    pub fn field_blurred(&mut self, field: SignupField) -> SignupDisplay {
        match field {
            SignupField::Email => self.shown.email = self.check_email().err(),
            SignupField::Password => self.shown.password = self.check_password().err(),
            SignupField::ConfirmPassword => {
                self.shown.confirm_password = self.check_confirm().err();
            }
        }
        self.display()
    }

    /// Validate everything and either produce a request or surface all
    /// field errors at once.
    ///
    /// # Errors
    ///
    /// Returns the full set of inline errors when any field fails.
    pub fn submit(&mut self) -> Result<SignupRequest, SignupErrors> {
        let email = self.check_email();
        let password = self.check_password();
        let confirm = self.check_confirm();

        self.shown = SignupErrors {
            email: email.as_ref().err().copied(),
            password: password.err(),
            confirm_password: confirm.err(),
        };

        match email {
            Ok(email) if self.shown.is_clear() => Ok(SignupRequest {
                email,
                password: self.password.clone(),
            }),
            _ => Err(self.shown.clone()),
        }
    }

    /// The current display state.
    #[must_use]
    pub fn display(&self) -> SignupDisplay {
        SignupDisplay {
            submittable: self.check_email().is_ok()
                && self.check_password().is_ok()
                && self.check_confirm().is_ok(),
            strength: validate::strength_indicator(&self.password),
            errors: self.shown.clone(),
        }
    }

    fn check_email(&self) -> Result<Email, FieldError> {
        validate::email(self.email.trim())
    }

    fn check_password(&self) -> Result<(), FieldError> {
        validate::password(&self.password)
    }

    fn check_confirm(&self) -> Result<(), FieldError> {
        validate::confirm_password(&self.password, &self.confirm_password)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.field_changed(SignupField::Email, "new@staff.com");
        form.field_changed(SignupField::Password, "Abcdefg1");
        form.field_changed(SignupField::ConfirmPassword, "Abcdefg1");
        form
    }

    #[test]
    fn test_empty_form_is_not_submittable() {
        let form = SignupForm::new();
        let display = form.display();
        assert!(!display.submittable);
        // No errors are shown until a blur or submit
        assert!(display.errors.is_clear());
        // Strength meter hidden while the password is empty
        assert!(display.strength.is_none());
    }

    #[test]
    fn test_keystrokes_do_not_show_errors() {
        let mut form = SignupForm::new();
        let display = form.field_changed(SignupField::Email, "not-an-email");
        assert!(!display.submittable);
        assert!(display.errors.is_clear());
    }

    #[test]
    fn test_blur_shows_the_field_error() {
        let mut form = SignupForm::new();
        form.field_changed(SignupField::Email, "not-an-email");
        let display = form.field_blurred(SignupField::Email);
        assert_eq!(display.errors.email, Some(FieldError::BadFormat));
        assert!(display.errors.password.is_none());
    }

    #[test]
    fn test_blur_clears_a_fixed_error() {
        let mut form = SignupForm::new();
        form.field_changed(SignupField::Email, "not-an-email");
        form.field_blurred(SignupField::Email);
        form.field_changed(SignupField::Email, "ok@staff.com");
        let display = form.field_blurred(SignupField::Email);
        assert!(display.errors.email.is_none());
    }

    #[test]
    fn test_strength_meter_follows_password() {
        let mut form = SignupForm::new();
        let display = form.field_changed(SignupField::Password, "Abcdefg1@");
        assert_eq!(display.strength, Some((100, Strength::Strong)));
        let display = form.field_changed(SignupField::Password, "");
        assert!(display.strength.is_none());
    }

    #[test]
    fn test_valid_form_submits() {
        let mut form = filled_form();
        assert!(form.display().submittable);
        let request = form.submit().unwrap();
        assert_eq!(request.email.as_str(), "new@staff.com");
        assert_eq!(request.password, "Abcdefg1");
    }

    #[test]
    fn test_email_is_trimmed_before_validation() {
        let mut form = filled_form();
        form.field_changed(SignupField::Email, "  new@staff.com  ");
        let request = form.submit().unwrap();
        assert_eq!(request.email.as_str(), "new@staff.com");
    }

    #[test]
    fn test_submit_shows_all_errors_at_once() {
        let mut form = SignupForm::new();
        form.field_changed(SignupField::Email, "bad");
        form.field_changed(SignupField::Password, "abc");
        form.field_changed(SignupField::ConfirmPassword, "abcd");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.email, Some(FieldError::BadFormat));
        assert_eq!(errors.password, Some(FieldError::TooShort { min: 6 }));
        assert_eq!(errors.confirm_password, Some(FieldError::Mismatch));
        // The same errors stay visible afterwards
        assert_eq!(form.display().errors, errors);
    }

    #[test]
    fn test_mismatched_confirmation_blocks_submit() {
        let mut form = filled_form();
        form.field_changed(SignupField::ConfirmPassword, "Abcdefg2");
        assert!(!form.display().submittable);
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.confirm_password, Some(FieldError::Mismatch));
        assert!(errors.email.is_none());
    }
}
