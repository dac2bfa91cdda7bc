//! Integration tests for the login flow.
//!
//! Drives the login form, the auth service, and the preferences store
//! together the way the login screen does. Deferred completions run
//! under the paused test clock.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use brasserie_staff::auth::{AuthError, AuthService, LoginOutcome};
use brasserie_staff::forms::LoginForm;
use brasserie_staff::prefs::{Preferences, PrefsStore};
use tokio_util::sync::CancellationToken;

const LATENCY: Duration = Duration::from_millis(2_000);

fn submitted(account: &str, password: &str, remember: bool) -> brasserie_staff::forms::LoginRequest {
    let mut form = LoginForm::new();
    form.account_changed(account);
    form.password_changed(password);
    form.remember_me_changed(remember);
    form.submit().unwrap()
}

// ============================================================================
// Outcome & Timing Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_admin_login_resolves_immediately() {
    let start = tokio::time::Instant::now();
    let outcome = AuthService::new(LATENCY)
        .login(&submitted("admin", "admin123", false), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::StaffDashboard);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_guest_login_waits_out_the_latency() {
    let start = tokio::time::Instant::now();
    let outcome = AuthService::new(LATENCY)
        .login(
            &submitted("user@domain.com", "password1", false),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::GuestDashboard);
    assert_eq!(start.elapsed(), LATENCY);
}

#[tokio::test(start_paused = true)]
async fn test_navigating_away_cancels_a_pending_login() {
    let auth = AuthService::new(LATENCY);
    let cancel = CancellationToken::new();
    let request = submitted("test@example.com", "password1", false);

    let pending = tokio::spawn({
        let auth = auth.clone();
        let cancel = cancel.clone();
        async move { auth.login(&request, &cancel).await }
    });

    // The user leaves the screen half a second in
    tokio::time::advance(Duration::from_millis(500)).await;
    cancel.cancel();

    let outcome = pending.await.unwrap().unwrap();
    assert_eq!(outcome, LoginOutcome::Cancelled);
}

// ============================================================================
// Banner Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_rejected_login_shows_the_banner_until_an_edit() {
    let mut form = LoginForm::new();
    form.account_changed("nobody@example.com");
    form.password_changed("password1");
    let request = form.submit().unwrap();

    let err = AuthService::new(LATENCY)
        .login(&request, &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::InvalidCredentials);

    assert!(form.login_failed().banner_visible);
    assert!(!form.password_changed("password2").banner_visible);
}

// ============================================================================
// Preferences Tests
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_remembered_account_round_trips_through_the_prefs_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = PrefsStore::new(dir.path().join("staff-prefs.json"));

    // First launch: nothing remembered, empty form
    let form = LoginForm::from_preferences(&store.load().unwrap());
    assert!(form.submit().is_none());

    // Successful login with the checkbox ticked
    let request = submitted("test@example.com", "password1", true);
    let outcome = AuthService::new(LATENCY)
        .login(&request, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::GuestDashboard);
    store
        .remember_account(&request.account, request.remember_me)
        .unwrap();

    // Next launch: the account is prefilled and the checkbox is ticked
    let mut form = LoginForm::from_preferences(&store.load().unwrap());
    form.password_changed("password1");
    let request = form.submit().unwrap();
    assert_eq!(request.account, "test@example.com");
    assert!(request.remember_me);

    // Logging in with the checkbox clear wipes the entry
    store.remember_account(&request.account, false).unwrap();
    assert_eq!(store.load().unwrap(), Preferences::default());
}
