//! Arukay CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! arukay migrate
//!
//! # Create a user
//! arukay user create -n "Ana" -e ana@example.com -b 2000-06-15
//!
//! # Print the eager vs lazy walkthrough
//! arukay generators --count 10
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `user create` - Create a user through the same rules as `POST /users`
//! - `generators` - Compare eager and lazy sequence production

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "arukay")]
#[command(author, version, about = "Arukay CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Print the eager vs lazy sequence walkthrough
    Generators {
        /// Length of the numeric runs to compare
        #[arg(short, long, default_value_t = commands::generators::DEFAULT_COUNT)]
        count: u64,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address (must be unique)
        #[arg(short, long)]
        email: String,

        /// Birth date as YYYY-MM-DD
        #[arg(short, long)]
        birth_date: NaiveDate,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                name,
                email,
                birth_date,
            } => {
                commands::user::create(name, email, birth_date).await?;
            }
        },
        Commands::Generators { count } => commands::generators::run(count),
    }
    Ok(())
}
