//! CLI administration tool for volley-fund.
//!
//! Operator commands that have no HTTP surface: creating campaigns, checking
//! the database, and debugging video links or payment callback signatures.
//!
//! # Usage
//!
//! ```bash
//! # Create a campaign
//! cargo run --bin admin -- campaign create
//!
//! # List campaigns
//! cargo run --bin admin -- campaign list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Resolve a video link the way profile pages do
//! cargo run --bin admin -- video "https://youtu.be/dQw4w9WgXcQ?t=5"
//!
//! # Compute the signature the gateway would send for a payment
//! cargo run --bin admin -- sign --order order_123 --payment pay_456
//!
//! # Build a linked-account onboarding request interactively
//! cargo run --bin admin -- account draft
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (`campaign` and `db` commands)
//! - `RAZORPAY_KEY_SECRET`: gateway key secret (`sign` command)

use volley_fund::application::services::CampaignService;
use volley_fund::domain::entities::{Campaign, LinkedAccountRequest, OnboardingField};
use volley_fund::infrastructure::persistence::PgCampaignRepository;
use volley_fund::utils::signature::compute_signature;
use volley_fund::utils::youtube::extract_video_id;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing volley-fund.
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
    /// Manage fundraising campaigns
    Campaign {
        #[command(subcommand)]
        action: CampaignAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Extract the video id from a YouTube link or id
    Video {
        /// Link or id as a profile owner would enter it
        reference: String,
    },

    /// Print the expected payment callback signature
    Sign {
        #[arg(long)]
        order: String,

        #[arg(long)]
        payment: String,
    },

    /// Linked-account onboarding helpers
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
}

/// Campaign management subcommands.
#[derive(Subcommand)]
enum CampaignAction {
    /// Create a new campaign
    Create {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// Cover image URL (http or https)
        #[arg(short, long)]
        image_url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List campaigns, newest first
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long, default_value_t = 25)]
        page_size: u32,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

/// Onboarding subcommands.
#[derive(Subcommand)]
enum AccountAction {
    /// Prompt for every onboarding field and print the request as JSON
    Draft,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Campaign { action } => {
            let pool = connect().await?;
            handle_campaign_action(action, &pool).await?
        }
        Commands::Db { action } => {
            let pool = connect().await?;
            handle_db_action(action, &pool).await?
        }
        Commands::Video { reference } => handle_video(&reference),
        Commands::Sign { order, payment } => handle_sign(&order, &payment)?,
        Commands::Account {
            action: AccountAction::Draft,
        } => draft_account()?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Dispatches campaign management commands.
async fn handle_campaign_action(action: CampaignAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgCampaignRepository::new(Arc::new(pool.clone())));
    let service = CampaignService::new(repo);

    match action {
        CampaignAction::Create {
            title,
            description,
            image_url,
            yes,
        } => create_campaign(&service, title, description, image_url, yes).await,
        CampaignAction::List { page, page_size } => {
            list_campaigns(&service, page, page_size).await
        }
    }
}

/// Creates a campaign, prompting for anything not given on the command line.
async fn create_campaign(
    service: &CampaignService<PgCampaignRepository>,
    title: Option<String>,
    description: Option<String>,
    image_url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create campaign".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let description = match description {
        Some(d) => d,
        None => Input::new().with_prompt("Description").interact_text()?,
    };

    let image_url = match image_url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Image URL (optional)")
            .allow_empty(true)
            .interact_text()?,
    };

    println!();
    println!("  Title:       {}", title.cyan());
    println!("  Description: {}", description);
    if !image_url.trim().is_empty() {
        println!("  Image:       {}", image_url.bright_black());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this campaign?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let campaign = service
        .create_campaign(&title, &description, Some(&image_url))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create campaign: {}", e))?;

    println!(
        "{} {}",
        "Campaign created with id".green().bold(),
        campaign.id.to_string().bright_white().bold()
    );

    Ok(())
}

/// Lists one page of campaigns.
///
/// # Output Format
///
/// ```text
///   ID   Title                                    Created
///   ---------------------------------------------------------------------
///   2    Nets for Ladakh                          2026-03-02 09:10
/// ```
async fn list_campaigns(
    service: &CampaignService<PgCampaignRepository>,
    page: u32,
    page_size: u32,
) -> Result<()> {
    anyhow::ensure!(page > 0, "--page must be at least 1");
    anyhow::ensure!(page_size > 0, "--page-size must be at least 1");

    println!("{}", "Campaigns".bright_blue().bold());
    println!();

    let offset = i64::from(page - 1) * i64::from(page_size);
    let (campaigns, total) = service
        .list_campaigns(offset, i64::from(page_size))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list campaigns: {}", e))?;

    if campaigns.is_empty() {
        println!("{}", "  No campaigns found".yellow());
        println!();
        println!(
            "  Create one with: {} admin campaign create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<40} {:<16}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "-".repeat(62).bright_black());

    for campaign in &campaigns {
        print_campaign_row(campaign);
    }

    println!();
    println!(
        "  Page {} ({} of {} total)",
        page,
        campaigns.len(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn print_campaign_row(campaign: &Campaign) {
    let title: String = campaign.title.chars().take(40).collect();
    println!(
        "  {:<4} {:<40} {}",
        campaign.id.to_string().bright_black(),
        title.cyan(),
        campaign
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let campaigns: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM campaigns")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Campaigns:  {}",
                campaigns.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

fn handle_video(reference: &str) {
    match extract_video_id(Some(reference)) {
        Some(id) => {
            println!("{}", id.as_str().green().bold());
            println!("  {}", id.embed_url().bright_black());
        }
        None => println!("{}", "no valid video id".yellow()),
    }
}

fn handle_sign(order_id: &str, payment_id: &str) -> Result<()> {
    let secret =
        std::env::var("RAZORPAY_KEY_SECRET").context("RAZORPAY_KEY_SECRET must be set")?;
    anyhow::ensure!(!secret.is_empty(), "RAZORPAY_KEY_SECRET must not be empty");

    println!("{}", compute_signature(order_id, payment_id, &secret));

    Ok(())
}

/// Builds an onboarding request field by field.
///
/// Prompts for every [`OnboardingField`], re-prompting required fields until
/// they are non-empty, then validates the whole request and prints it as
/// JSON ready for `POST /api/accounts`.
fn draft_account() -> Result<()> {
    println!("{}", "Linked account draft".bright_blue().bold());
    println!();

    let mut request = LinkedAccountRequest::default();

    for field in OnboardingField::ALL {
        let current = request.get(field).to_string();
        let prompt = if field.is_optional() {
            format!("{} (optional)", field.label())
        } else {
            field.label().to_string()
        };

        let value: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(current)
            .allow_empty(field.is_optional())
            .interact_text()?;

        request.set(field, value.trim());
    }

    println!();
    match request.validate() {
        Ok(()) => println!("{}", "Draft is complete".green().bold()),
        Err(errors) => {
            println!("{}", "Draft has problems:".yellow().bold());
            for (path, message) in flatten_errors(&errors) {
                println!("  {} {}", path.red(), message);
            }
        }
    }
    println!();

    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}

/// Flattens nested validation errors into `(dotted.path, message)` pairs.
fn flatten_errors(errors: &validator::ValidationErrors) -> Vec<(String, String)> {
    fn walk(prefix: &str, errors: &validator::ValidationErrors, out: &mut Vec<(String, String)>) {
        for (field, kind) in errors.errors() {
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{prefix}.{field}")
            };

            match kind {
                validator::ValidationErrorsKind::Field(list) => {
                    for error in list {
                        let message = error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| error.code.to_string());
                        out.push((path.clone(), message));
                    }
                }
                validator::ValidationErrorsKind::Struct(inner) => walk(&path, inner, out),
                validator::ValidationErrorsKind::List(items) => {
                    for (index, inner) in items {
                        walk(&format!("{path}[{index}]"), inner, out);
                    }
                }
            }
        }
    }

    let mut out = Vec::new();
    walk("", errors, &mut out);
    out.sort();
    out
}
