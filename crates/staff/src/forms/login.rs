//! Login form state.
//!
//! The form tracks the raw field values, the "remember me" checkbox,
//! and whether the invalid-credentials banner is showing. Every
//! mutation returns a [`LoginDisplay`] describing what the screen
//! should show next.

use crate::prefs::Preferences;

/// What the login screen shows for the current form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginDisplay {
    /// Whether the login button is enabled.
    pub submittable: bool,
    /// Whether the invalid-credentials banner is visible.
    pub banner_visible: bool,
}

/// A validated login attempt, ready for the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account identifier, trimmed of surrounding whitespace.
    pub account: String,
    /// The password exactly as typed.
    pub password: String,
    /// Whether to persist the account on success.
    pub remember_me: bool,
}

/// State machine behind the login screen.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    account: String,
    password: String,
    remember_me: bool,
    banner_visible: bool,
}

impl LoginForm {
    /// An empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form prefilled from saved preferences: when an account was
    /// remembered, it is filled in and the checkbox starts ticked.
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let mut form = Self::new();
        if prefs.remember_me {
            form.account = prefs.remembered_account.clone().unwrap_or_default();
            form.remember_me = true;
        }
        form
    }

    /// The user edited the account field. Any visible failure banner is
    /// dismissed.
    pub fn account_changed(&mut self, value: &str) -> LoginDisplay {
        self.account = value.to_owned();
        self.banner_visible = false;
        self.display()
    }

    /// The user edited the password field. Any visible failure banner is
    /// dismissed.
    pub fn password_changed(&mut self, value: &str) -> LoginDisplay {
        self.password = value.to_owned();
        self.banner_visible = false;
        self.display()
    }

    /// The user toggled the "remember me" checkbox.
    pub fn remember_me_changed(&mut self, checked: bool) -> LoginDisplay {
        self.remember_me = checked;
        self.display()
    }

    /// The auth service rejected the last attempt; show the banner.
    pub fn login_failed(&mut self) -> LoginDisplay {
        self.banner_visible = true;
        self.display()
    }

    /// The current display state.
    #[must_use]
    pub fn display(&self) -> LoginDisplay {
        LoginDisplay {
            submittable: !self.account.trim().is_empty() && !self.password.trim().is_empty(),
            banner_visible: self.banner_visible,
        }
    }

    /// Build a login request, or `None` while the form is not
    /// submittable. The account is trimmed; the password is passed
    /// through untouched.
    #[must_use]
    pub fn submit(&self) -> Option<LoginRequest> {
        if !self.display().submittable {
            return None;
        }
        Some(LoginRequest {
            account: self.account.trim().to_owned(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        })
    }
}
