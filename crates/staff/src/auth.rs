//! Authentication against the built-in sample directory.
//!
//! There is no real backend. A fixed admin credential resolves
//! immediately; every other attempt completes after a simulated
//! directory-lookup latency, during which the attempt can be cancelled
//! (the user navigated away). A cancelled attempt resolves to a
//! distinct outcome rather than an error so callers can drop it
//! silently.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::forms::{LoginRequest, SignupRequest};

/// The built-in administrator account name.
pub const ADMIN_ACCOUNT: &str = "admin";

const ADMIN_PASSWORD: &str = "admin123";

/// Accounts the sample directory recognizes besides the admin.
const SAMPLE_DIRECTORY: &[&str] = &["test@example.com", "user@domain.com"];

/// Errors the auth service can report to the login screen.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The account/password pair is not recognized.
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// How a login attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The admin credential matched; go to the staff dashboard.
    StaffDashboard,
    /// A directory account matched; go to the guest dashboard.
    GuestDashboard,
    /// The attempt was cancelled before it completed.
    Cancelled,
}

/// How a sign-up attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The account was created.
    Completed,
    /// The attempt was cancelled before it completed.
    Cancelled,
}

/// The placeholder authentication backend.
#[derive(Debug, Clone)]
pub struct AuthService {
    directory: Vec<String>,
    latency: Duration,
}

impl AuthService {
    /// A service backed by the sample directory, completing deferred
    /// attempts after `latency`.
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self::with_directory(SAMPLE_DIRECTORY.iter().copied().map(String::from), latency)
    }

    /// A service with an explicit account directory.
    #[must_use]
    pub fn with_directory(accounts: impl IntoIterator<Item = String>, latency: Duration) -> Self {
        Self {
            directory: accounts.into_iter().collect(),
            latency,
        }
    }

    /// Attempt a login.
    ///
    /// The admin credential resolves immediately. Everything else waits
    /// out the simulated latency first; if `cancel` fires during the
    /// wait, the result is [`LoginOutcome::Cancelled`] and nothing else
    /// happens.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when neither the admin
    /// credential nor a directory account matches.
    #[instrument(skip_all, fields(account = %request.account))]
    pub async fn login(
        &self,
        request: &LoginRequest,
        cancel: &CancellationToken,
    ) -> Result<LoginOutcome, AuthError> {
        if request.account == ADMIN_ACCOUNT && request.password == ADMIN_PASSWORD {
            info!("admin login");
            return Ok(LoginOutcome::StaffDashboard);
        }

        if !self.wait(cancel).await {
            debug!("login cancelled");
            return Ok(LoginOutcome::Cancelled);
        }

        if self.directory.iter().any(|a| a == &request.account) {
            info!("directory login");
            Ok(LoginOutcome::GuestDashboard)
        } else {
            warn!("login rejected");
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Attempt a sign-up. Always succeeds after the simulated latency
    /// unless cancelled first.
    #[instrument(skip_all, fields(account = %request.email))]
    pub async fn register(
        &self,
        request: &SignupRequest,
        cancel: &CancellationToken,
    ) -> SignupOutcome {
        if !self.wait(cancel).await {
            debug!("sign-up cancelled");
            return SignupOutcome::Cancelled;
        }
        info!("account created");
        SignupOutcome::Completed
    }

    /// Wait out the latency; returns false if cancelled first.
    async fn wait(&self, cancel: &CancellationToken) -> bool {
        tokio::select! {
            () = cancel.cancelled() => false,
            () = tokio::time::sleep(self.latency) => true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(Duration::from_millis(2_000))
    }

    fn request(account: &str, password: &str) -> LoginRequest {
        LoginRequest {
            account: account.to_owned(),
            password: password.to_owned(),
            remember_me: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_admin_login_is_immediate() {
        let outcome = service()
            .login(&request("admin", "admin123"), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::StaffDashboard);
    }

    #[tokio::test(start_paused = true)]
    async fn test_admin_with_wrong_password_is_rejected() {
        let err = service()
            .login(&request("admin", "admin124"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test(start_paused = true)]
    async fn test_directory_account_reaches_guest_dashboard() {
        let outcome = service()
            .login(
                &request("test@example.com", "anything"),
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::GuestDashboard);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_account_is_rejected_after_the_wait() {
        let err = service()
            .login(
                &request("nobody@example.com", "anything"),
                &CancellationToken::new(),
            )
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_wins_over_the_deferred_completion() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let outcome = service()
            .login(&request("test@example.com", "anything"), &cancel)
            .await
            .unwrap();
        assert_eq!(outcome, LoginOutcome::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_completes() {
        let signup = SignupRequest {
            email: "new@staff.com".parse().unwrap(),
            password: "Abcdefg1".to_owned(),
        };
        let outcome = service()
            .register(&signup, &CancellationToken::new())
            .await;
        assert_eq!(outcome, SignupOutcome::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_can_be_cancelled() {
        let signup = SignupRequest {
            email: "new@staff.com".parse().unwrap(),
            password: "Abcdefg1".to_owned(),
        };
        let cancel = CancellationToken::new();
        cancel.cancel();
        let outcome = service().register(&signup, &cancel).await;
        assert_eq!(outcome, SignupOutcome::Cancelled);
    }
}
