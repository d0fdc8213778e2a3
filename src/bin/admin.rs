//! CLI administration tool for guidepost.
//!
//! Provides commands for managing accounts, revoking sessions, and viewing
//! content/click statistics without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (prompts for a password)
//! cargo run --bin admin -- user create --name "Sam" --email sam@example.com
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # Revoke every session of an account
//! cargo run --bin admin -- session revoke sam@example.com
//!
//! # Remove expired sessions
//! cargo run --bin admin -- session purge
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use guidepost::domain::entities::{NewUser, UserRole};
use guidepost::domain::repositories::{
    SessionRepository, StatsRepository, UserRepository,
};
use guidepost::infrastructure::persistence::{
    PgSessionRepository, PgStatsRepository, PgUserRepository,
};

use anyhow::{Context, Result};
use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing guidepost.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address (login identifier)
        #[arg(short, long)]
        email: String,

        /// Role: admin or editor
        #[arg(short, long, default_value = "admin")]
        role: String,
    },

    /// List all accounts
    List,
}

/// Session management subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Revoke every active session of an account
    Revoke {
        /// Email of the account
        email: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Delete expired sessions
    Purge,
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Verify connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = Arc::new(PgPool::connect(&database_url).await?);

    match cli.command {
        Commands::User { action } => match action {
            UserAction::Create { name, email, role } => {
                create_user(pool, name, email, role).await?;
            }
            UserAction::List => list_users(pool).await?,
        },
        Commands::Session { action } => match action {
            SessionAction::Revoke { email, yes } => revoke_sessions(pool, email, yes).await?,
            SessionAction::Purge => purge_sessions(pool).await?,
        },
        Commands::Stats => show_stats(pool).await?,
        Commands::Db { action } => match action {
            DbAction::Check => db_check(pool).await?,
        },
    }

    Ok(())
}

async fn create_user(pool: Arc<PgPool>, name: String, email: String, role: String) -> Result<()> {
    let role = match role.as_str() {
        "admin" => UserRole::Admin,
        "editor" => UserRole::Editor,
        other => anyhow::bail!("Unknown role '{other}' (expected admin or editor)"),
    };

    let users = PgUserRepository::new(pool);

    if users.find_by_email(&email).await?.is_some() {
        println!("{} account {} already exists", "error:".red().bold(), email);
        return Ok(());
    }

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    if password.len() < 8 {
        anyhow::bail!("Password must be at least 8 characters");
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {e}"))?
        .to_string();

    let user = users
        .create(NewUser {
            name,
            email,
            password_hash,
            role,
        })
        .await?;

    println!(
        "{} created account {} ({})",
        "ok:".green().bold(),
        user.email.cyan(),
        user.role
    );

    Ok(())
}

async fn list_users(pool: Arc<PgPool>) -> Result<()> {
    let users = PgUserRepository::new(pool).list().await?;

    if users.is_empty() {
        println!("No accounts");
        return Ok(());
    }

    println!("{:<5} {:<30} {:<25} {:<8}", "ID", "EMAIL", "NAME", "ROLE");
    for user in users {
        println!(
            "{:<5} {:<30} {:<25} {:<8}",
            user.id, user.email, user.name, user.role
        );
    }

    Ok(())
}

async fn revoke_sessions(pool: Arc<PgPool>, email: String, yes: bool) -> Result<()> {
    let users = PgUserRepository::new(pool.clone());

    let Some(user) = users.find_by_email(&email).await? else {
        println!("{} no account with email {}", "error:".red().bold(), email);
        return Ok(());
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Revoke all sessions of {}?", user.email))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }

    let revoked = PgSessionRepository::new(pool)
        .revoke_all_for_user(user.id)
        .await?;

    println!("{} revoked {revoked} session(s)", "ok:".green().bold());

    Ok(())
}

async fn purge_sessions(pool: Arc<PgPool>) -> Result<()> {
    let removed = PgSessionRepository::new(pool).purge_expired().await?;
    println!("{} removed {removed} expired session(s)", "ok:".green().bold());
    Ok(())
}

async fn show_stats(pool: Arc<PgPool>) -> Result<()> {
    let stats = PgStatsRepository::new(pool);

    let guides = stats.guide_status_counts().await?;
    let categories = stats.category_count().await?;
    let clicks = stats.total_link_clicks().await?;
    let trending = stats.top_guides_by_clicks(5).await?;

    println!("{}", "Content".bold());
    println!("  guides:     {} ({} published, {} draft)", guides.total, guides.published, guides.draft);
    println!("  categories: {categories}");
    println!();
    println!("{}", "Clicks".bold());
    println!("  total: {clicks}");

    if !trending.is_empty() {
        println!();
        println!("{}", "Top guides by clicks".bold());
        for entry in trending {
            println!("  {:<6} {}", entry.clicks, entry.slug);
        }
    }

    Ok(())
}

async fn db_check(pool: Arc<PgPool>) -> Result<()> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool.as_ref())
        .await
        .context("Database check query failed")?;

    println!("{} database reachable", "ok:".green().bold());

    Ok(())
}
