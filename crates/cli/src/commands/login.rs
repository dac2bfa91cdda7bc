//! Attempt a login against the sample directory.

use brasserie_staff::auth::{AuthService, LoginOutcome};
use brasserie_staff::config::StaffConfig;
use brasserie_staff::forms::LoginForm;
use brasserie_staff::prefs::PrefsStore;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Run one login attempt end to end: form, auth service, and the
/// preferences file on success.
///
/// # Errors
///
/// Returns an error for missing fields, rejected credentials, or a
/// preferences file that cannot be written.
pub async fn attempt(
    account: &str,
    password: &str,
    remember: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = StaffConfig::from_env()?;

    let mut form = LoginForm::new();
    form.account_changed(account);
    form.password_changed(password);
    form.remember_me_changed(remember);
    let request = form.submit().ok_or("account and password are required")?;

    let auth = AuthService::new(config.login_latency);
    let outcome = auth.login(&request, &CancellationToken::new()).await?;

    match outcome {
        LoginOutcome::StaffDashboard => info!("login succeeded: staff dashboard"),
        LoginOutcome::GuestDashboard => info!("login succeeded: guest dashboard"),
        LoginOutcome::Cancelled => info!("login cancelled"),
    }

    if matches!(
        outcome,
        LoginOutcome::StaffDashboard | LoginOutcome::GuestDashboard
    ) {
        let store = PrefsStore::new(config.prefs_path);
        store.remember_account(&request.account, request.remember_me)?;
    }

    Ok(())
}
