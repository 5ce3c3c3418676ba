//! CLI administration tool for shortlink.
//!
//! Works directly on the JSON data file, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all records, or the ones created on a given day
//! cargo run --bin admin -- list
//! cargo run --bin admin -- list --date 2024-01-01
//!
//! # Show one record by short code or id
//! cargo run --bin admin -- show Xb3_kQ
//!
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Record counts per day
//! cargo run --bin admin -- stats
//!
//! # Verify the data file
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATA_FILE` (default `database.json`): record file
//! - `BASE_URL` (default `http://localhost:3000`): used by `shorten`

use shortlink::application::services::LinkService;
use shortlink::config::{self, Config};
use shortlink::domain::entities::{Collection, UrlRecord};
use shortlink::domain::repositories::RecordStore;
use shortlink::infrastructure::persistence::JsonFileStore;
use shortlink::utils::code_generator::is_valid_code;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// CLI tool for managing shortlink data.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List records
    List {
        /// Only records created on this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show one record by short code or numeric id
    Show { code_or_id: String },

    /// Shorten a URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show record statistics
    Stats,

    /// Verify the data file loads and its invariants hold
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = Arc::new(JsonFileStore::new(&config.data_file));

    match cli.command {
        Commands::List { date } => list_records(store, &config, date).await?,
        Commands::Show { code_or_id } => show_record(store, &config, &code_or_id).await?,
        Commands::Shorten { url, yes } => shorten_url(store, &config, url, yes).await?,
        Commands::Stats => handle_stats(store).await?,
        Commands::Check => check_data_file(store).await?,
    }

    Ok(())
}

fn link_service(store: Arc<JsonFileStore>, config: &Config) -> LinkService<JsonFileStore> {
    LinkService::new(store, config.base_url.clone())
        .with_max_code_attempts(config.code_generation_attempts)
}

/// Lists records as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Short Links
///
///   ID    Code    Created     Original URL
///   ──────────────────────────────────────────────────
///   1     Xb3_kQ  2024-01-01  https://example.com
/// ```
async fn list_records(
    store: Arc<JsonFileStore>,
    config: &Config,
    date: Option<String>,
) -> Result<()> {
    println!("{}", "📋 Short Links".bright_blue().bold());
    println!();

    let service = link_service(store.clone(), config);

    let records = match date {
        Some(date) => service
            .get_by_date(&date)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to list records: {}", e))?,
        None => {
            store
                .load()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load records: {}", e))?
                .urls
        }
    };

    if records.is_empty() {
        println!("{}", "  No records found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<7} {:<11} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<5} {:<7} {:<11} {}",
            record.id.to_string().bright_black(),
            record.short_code.cyan(),
            record.created_at.to_string().bright_black(),
            record.original_url
        );
    }

    println!();
    println!(
        "  Total: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Shows a single record.
///
/// # Lookup
///
/// - If input is numeric, lookup by id
/// - Otherwise, lookup by short code
async fn show_record(store: Arc<JsonFileStore>, config: &Config, code_or_id: &str) -> Result<()> {
    let service = link_service(store, config);

    let record = match code_or_id.parse::<u64>() {
        Ok(id) => service.get_by_id(id).await,
        Err(_) => {
            if !is_valid_code(code_or_id) {
                anyhow::bail!("'{}' is neither an id nor a 6-character code", code_or_id);
            }
            service.get_by_short_code(code_or_id).await
        }
    }
    .map_err(|e| anyhow::anyhow!("Failed to load records: {}", e))?;

    let record = record.context("Record not found")?;
    print_record(&record);

    Ok(())
}

/// Creates a short link with an optional interactive prompt.
async fn shorten_url(
    store: Arc<JsonFileStore>,
    config: &Config,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("URL to shorten")
            .interact_text()?,
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Shorten {}?", url))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = link_service(store, config);
    let record = service
        .shorten(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!();
    println!("{}", "✅ Done".green().bold());
    print_record(&record);

    Ok(())
}

/// Displays record counts, overall and per creation day.
async fn handle_stats(store: Arc<JsonFileStore>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let collection = store
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load records: {}", e))?;

    println!(
        "  Records: {}",
        collection.len().to_string().bright_white().bold()
    );

    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in &collection.urls {
        *per_day.entry(record.created_at).or_default() += 1;
    }

    if !per_day.is_empty() {
        println!();
        for (day, count) in per_day {
            println!("  {}  {}", day.to_string().bright_black(), count);
        }
    }
    println!();

    Ok(())
}

/// Loads the data file and reports invariant violations.
async fn check_data_file(store: Arc<JsonFileStore>) -> Result<()> {
    println!("{}", "🔍 Checking data file".bright_blue().bold());
    println!("  Path: {}", store.path().display().to_string().cyan());
    println!();

    let collection = store
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load data file: {}", e))?;

    let problems = find_problems(&collection);

    if problems.is_empty() {
        println!(
            "{} {} records, all invariants hold",
            "✅".green(),
            collection.len()
        );
        return Ok(());
    }

    for problem in &problems {
        println!("  {} {}", "✗".red(), problem);
    }
    println!();
    anyhow::bail!("{} problem(s) found", problems.len())
}

/// Returns a description of every broken invariant in `collection`.
fn find_problems(collection: &Collection) -> Vec<String> {
    let mut problems = Vec::new();
    let mut codes = HashSet::new();
    let mut urls = HashSet::new();

    for (index, record) in collection.urls.iter().enumerate() {
        let expected_id = index as u64 + 1;
        if record.id != expected_id {
            problems.push(format!(
                "record #{} has id {}, expected {}",
                index + 1,
                record.id,
                expected_id
            ));
        }
        if !is_valid_code(&record.short_code) {
            problems.push(format!(
                "id {}: malformed short code '{}'",
                record.id, record.short_code
            ));
        }
        if !codes.insert(record.short_code.as_str()) {
            problems.push(format!(
                "id {}: duplicate short code '{}'",
                record.id, record.short_code
            ));
        }
        if !urls.insert(record.original_url.as_str()) {
            problems.push(format!(
                "id {}: duplicate original URL '{}'",
                record.id, record.original_url
            ));
        }
        if record.original_url.is_empty() {
            problems.push(format!("id {}: empty original URL", record.id));
        }
    }

    problems
}

fn print_record(record: &UrlRecord) {
    println!();
    println!("  ID:        {}", record.id.to_string().bright_black());
    println!("  Code:      {}", record.short_code.cyan());
    println!("  Short URL: {}", record.short_url.bright_yellow());
    println!("  Original:  {}", record.original_url);
    println!("  Created:   {}", record.created_at);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, code: &str, url: &str) -> UrlRecord {
        UrlRecord::new(
            id,
            url.to_string(),
            code.to_string(),
            "http://localhost:3000",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_find_problems_clean_collection() {
        let collection = Collection {
            urls: vec![
                record(1, "aaaaaa", "https://a.com"),
                record(2, "bbbbbb", "https://b.com"),
            ],
        };

        assert!(find_problems(&collection).is_empty());
    }

    #[test]
    fn test_find_problems_reports_duplicates_and_gaps() {
        let collection = Collection {
            urls: vec![
                record(1, "aaaaaa", "https://a.com"),
                record(1, "aaaaaa", "https://a.com"),
                record(4, "bad", "https://c.com"),
            ],
        };

        let problems = find_problems(&collection);

        assert!(problems.iter().any(|p| p.contains("duplicate short code")));
        assert!(problems.iter().any(|p| p.contains("duplicate original URL")));
        assert!(problems.iter().any(|p| p.contains("expected 2")));
        assert!(problems.iter().any(|p| p.contains("malformed short code")));
    }
}
