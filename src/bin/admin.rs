//! CLI administration tool for directory-insights.
//!
//! Runs the same reports as the HTTP API straight against the database,
//! for operators without dashboard access.
//!
//! # Usage
//!
//! ```bash
//! # Print likely duplicate listings
//! cargo run --bin admin -- duplicates
//!
//! # Same, as JSON
//! cargo run --bin admin -- duplicates --json
//!
//! # Listing growth over the last 7 days vs the 7 days before
//! cargo run --bin admin -- analytics --days 7
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`directory_insights::config`].

use directory_insights::api::dto::duplicates::DuplicateReportResponse;
use directory_insights::application::services::analytics_service::MAX_PERIOD_DAYS;
use directory_insights::application::services::{AnalyticsService, DataQualityService};
use directory_insights::config;
use directory_insights::domain::entities::{DuplicateReport, MetricDelta};
use directory_insights::domain::repositories::BusinessRepository;
use directory_insights::infrastructure::persistence::PgBusinessRepository;
use directory_insights::server::connect_pool;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for directory-insights reports.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Find likely duplicate listings
    Duplicates {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show period-over-period listing growth
    Analytics {
        /// Window length in days (defaults to ANALYTICS_DEFAULT_DAYS)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_PERIOD_DAYS as i64))]
        days: Option<u32>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
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

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;
    let repository: Arc<dyn BusinessRepository> =
        Arc::new(PgBusinessRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Duplicates { json } => {
            let service = DataQualityService::new(repository);
            handle_duplicates(&service, json).await?
        }
        Commands::Analytics { days } => {
            let service = AnalyticsService::new(repository);
            handle_analytics(&service, days.unwrap_or(config.analytics_default_days)).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Runs the duplicate scan and prints the groups.
async fn handle_duplicates(service: &DataQualityService, json: bool) -> Result<()> {
    let report = service
        .find_duplicates()
        .await
        .map_err(|e| anyhow::anyhow!("Duplicate scan failed: {}", e))?;

    if json {
        let body = serde_json::to_string_pretty(&DuplicateReportResponse::from(report))?;
        println!("{body}");
        return Ok(());
    }

    print_duplicate_report(&report);
    Ok(())
}

fn print_duplicate_report(report: &DuplicateReport) {
    println!("{}", "Duplicate listings".bright_blue().bold());
    println!();

    if report.groups.is_empty() {
        println!(
            "{} No likely duplicates among {} listings",
            "✓".green(),
            report.scanned
        );
        return;
    }

    for (n, group) in report.groups.iter().enumerate() {
        let region = match (&group.region_name, group.region_id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => format!("region #{id}"),
            (None, None) => "no region".to_string(),
        };

        println!(
            "{} {}",
            format!("Group {}", n + 1).bright_white().bold(),
            format!("({region})").dimmed()
        );

        for member in &group.members {
            let verified = if member.is_verified {
                "verified".green()
            } else {
                "unverified".yellow()
            };
            let views = member
                .view_count
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string());

            println!(
                "  #{:<8} {:<40} {:<10} views: {:<6} created: {}",
                member.id,
                member.name.cyan(),
                verified,
                views,
                member.created_at.format("%Y-%m-%d")
            );
        }
        println!();
    }

    println!(
        "{} {} groups, {} of {} listings affected",
        "!".yellow().bold(),
        report.groups.len(),
        report.duplicate_records,
        report.scanned
    );
}

/// Prints the analytics overview for the given window.
async fn handle_analytics(service: &AnalyticsService, days: u32) -> Result<()> {
    let overview = service
        .overview(Utc::now(), days)
        .await
        .map_err(|e| anyhow::anyhow!("Analytics failed: {}", e))?;

    println!(
        "{}",
        format!("Listing growth, last {} days", overview.period_days)
            .bright_blue()
            .bold()
    );
    println!(
        "  {} → {}",
        overview.current.from.format("%Y-%m-%d"),
        overview.current.to.format("%Y-%m-%d")
    );
    println!();

    print_metric("New listings", &overview.new_listings);
    print_metric("New verified listings", &overview.new_verified_listings);

    Ok(())
}

fn print_metric(label: &str, metric: &MetricDelta) {
    let change = format!("{:+.1}%", metric.change_percent);
    let change = if metric.change_percent > 0.0 {
        change.green()
    } else if metric.change_percent < 0.0 {
        change.red()
    } else {
        change.normal()
    };

    println!(
        "  {:<24} {:>6}  (previous: {:>6})  {}",
        label.bright_white(),
        metric.current,
        metric.previous,
        change
    );
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database check failed")?;
            println!("{}", "✓ Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version = sqlx::query_scalar::<_, String>("SELECT version()")
                .fetch_one(pool)
                .await?;
            let businesses = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM businesses")
                .fetch_one(pool)
                .await?;
            let regions = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM regions")
                .fetch_one(pool)
                .await?;
            let unassigned =
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM businesses WHERE region_id IS NULL")
                    .fetch_one(pool)
                    .await?;

            println!("{}", "Database info".bright_blue().bold());
            println!("  {:<22} {}", "Server:".bright_white(), version);
            println!("  {:<22} {}", "Listings:".bright_white(), businesses);
            println!("  {:<22} {}", "Regions:".bright_white(), regions);
            println!("  {:<22} {}", "Listings w/o region:".bright_white(), unassigned);
        }
    }

    Ok(())
}
