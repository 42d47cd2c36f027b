//! Retail Admin CLI - customer management, catalog browsing, point of sale.
//!
//! # Usage
//!
//! ```bash
//! # Log in with an email from the mock user list
//! radm login -e Sincere@april.biz
//!
//! # Manage customer records
//! radm customers list
//! radm customers add -n "New Customer" -e new@example.com
//!
//! # Browse the seeded catalog
//! radm catalog
//!
//! # Run the interactive point-of-sale loop
//! radm pos
//! ```
//!
//! # Commands
//!
//! - `login` / `logout` / `whoami` - session management
//! - `customers` - list, show, add, update, remove customer records
//! - `catalog` - browse the seeded product catalog
//! - `pos` - interactive checkout loop

#![cfg_attr(not(test), forbid(unsafe_code))]
// All operator-facing output goes to stdout by design.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use retail_admin_dashboard::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "radm")]
#[command(author, version, about = "Retail Admin dashboard CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with an email from the mock user list
    Login {
        /// Email to match against fetched customer records (case-insensitive)
        #[arg(short, long)]
        email: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the logged-in operator
    Whoami,
    /// Manage customer records
    Customers {
        #[command(subcommand)]
        action: CustomerAction,
    },
    /// Browse the seeded product catalog
    Catalog,
    /// Interactive point-of-sale checkout loop
    Pos,
}

#[derive(Subcommand)]
enum CustomerAction {
    /// List all customer records
    List,
    /// Show one customer record
    Show {
        /// Customer id
        id: i64,
    },
    /// Create a customer record
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Username
        #[arg(short, long, default_value = "")]
        username: String,

        /// Phone number
        #[arg(short, long, default_value = "")]
        phone: String,

        /// Website
        #[arg(short, long, default_value = "")]
        website: String,

        /// Company name
        #[arg(short, long, default_value = "")]
        company: String,
    },
    /// Update fields of a customer record
    Update {
        /// Customer id
        id: i64,

        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New email address
        #[arg(short, long)]
        email: Option<String>,

        /// New phone number
        #[arg(short, long)]
        phone: Option<String>,
    },
    /// Remove a customer record
    Remove {
        /// Customer id
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = AppState::from_env()?;

    match cli.command {
        Commands::Login { email } => commands::auth::login(&mut state, &email).await?,
        Commands::Logout => commands::auth::logout(&mut state),
        Commands::Whoami => commands::auth::whoami(&state),
        Commands::Customers { action } => match action {
            CustomerAction::List => commands::customers::list(&mut state).await?,
            CustomerAction::Show { id } => commands::customers::show(&mut state, id).await?,
            CustomerAction::Add {
                name,
                email,
                username,
                phone,
                website,
                company,
            } => {
                commands::customers::add(
                    &mut state,
                    commands::customers::AddArgs {
                        name,
                        email,
                        username,
                        phone,
                        website,
                        company,
                    },
                )
                .await?;
            }
            CustomerAction::Update {
                id,
                name,
                email,
                phone,
            } => commands::customers::update(&mut state, id, name, email, phone).await?,
            CustomerAction::Remove { id } => commands::customers::remove(&mut state, id).await?,
        },
        Commands::Catalog => commands::catalog::list(&mut state).await?,
        Commands::Pos => commands::pos::run(&mut state).await?,
    }

    Ok(())
}
