//! Brasserie staff CLI - field validation and auth checks.
//!
//! # Usage
//!
//! ```bash
//! # Validate form field values
//! staffctl validate email test@example.com
//! staffctl validate price 12.50
//! staffctl validate table 4
//!
//! # Score a password
//! staffctl strength "Abcdefg1@"
//!
//! # Attempt a login against the sample directory
//! staffctl login -a admin -p admin123 --remember
//!
//! # Show the seeded sample rosters
//! staffctl rosters
//! ```
//!
//! # Commands
//!
//! - `validate` - Run a field value through the form validators
//! - `strength` - Score a password and show its tier
//! - `login` - Attempt a login, persisting preferences on success
//! - `rosters` - Show the sample menu and reservation rosters

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "staffctl")]
#[command(author, version, about = "Brasserie staff CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a form field value
    Validate {
        #[command(subcommand)]
        field: ValidateField,
    },
    /// Score a password and show its strength tier
    Strength {
        /// The password to score
        password: String,
    },
    /// Attempt a login against the sample directory
    Login {
        /// Account identifier (email, or the admin account)
        #[arg(short, long)]
        account: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Remember the account on success
        #[arg(short, long)]
        remember: bool,
    },
    /// Show the seeded sample rosters
    Rosters,
}

#[derive(Subcommand)]
enum ValidateField {
    /// Validate an email address
    Email { value: String },
    /// Validate a menu price
    Price { value: String },
    /// Validate a table number
    Table { value: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Validate { field } => match field {
            ValidateField::Email { value } => commands::validate::email(&value)?,
            ValidateField::Price { value } => commands::validate::price(&value)?,
            ValidateField::Table { value } => commands::validate::table(&value)?,
        },
        Commands::Strength { password } => commands::validate::strength(&password),
        Commands::Login {
            account,
            password,
            remember,
        } => commands::login::attempt(&account, &password, remember).await?,
        Commands::Rosters => commands::rosters::show(),
    }
    Ok(())
}
