//! Run field values through the form validators.

use brasserie_core::validate::{self, Strength};
use tracing::info;

/// Validate an email address.
///
/// # Errors
///
/// Returns the field error when the value is rejected.
pub fn email(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let email = validate::email(value)?;
    info!(%email, "valid email");
    Ok(())
}

/// Validate a menu price.
///
/// # Errors
///
/// Returns the field error when the value is rejected.
pub fn price(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let price = validate::price(value)?;
    info!(%price, "valid price");
    Ok(())
}

/// Validate a table number.
///
/// # Errors
///
/// Returns the field error when the value is rejected.
pub fn table(value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let table = validate::table_number(value)?;
    info!(%table, "valid table number");
    Ok(())
}

/// Score a password and report its tier.
pub fn strength(password: &str) {
    let score = validate::password_strength(password);
    let tier = Strength::classify(score);
    info!(score, %tier, "password strength");
}
