use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use ecou::catalog::store::Catalog;
use ecou::config::Config;
use ecou::ingest;
use ecou::lexicon::loader;
use ecou::normalize::pipeline::Normalizer;
use ecou::output::terminal;
use ecou::pipeline::analyze::{self, AnalysisOptions};
use ecou::reputation::months::month_range;
use ecou::sentiment::lexical::MarkerModel;

/// Ecou: e-reputation analysis for Romanian-language social media.
///
/// Normalizes scraped tweets about a company or industry, classifies their
/// sentiment, and aggregates them into a monthly reputation score.
#[derive(Parser)]
#[command(name = "ecou", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one text through the normalization pipeline and print the tokens
    Normalize {
        /// The raw text to normalize
        text: String,

        /// Skip the stemming stage
        #[arg(long)]
        no_stem: bool,
    },

    /// Score an entity's e-reputation over a period from scraped tweets
    Analyze {
        /// Company or industry name (must exist in the catalog)
        entity: String,

        /// First day of the period, YYYY-MM-DD
        #[arg(long)]
        from: String,

        /// Last day of the period, YYYY-MM-DD
        #[arg(long)]
        to: String,

        /// JSON file of scraped tweet records
        #[arg(long)]
        tweets: PathBuf,

        /// Print the score matrix as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the month keys a period spans
    Months {
        /// Period start, YYYY-MM-DD or YYYY-MM
        #[arg(long)]
        from: String,

        /// Period end, YYYY-MM-DD or YYYY-MM
        #[arg(long)]
        to: String,
    },

    /// List the companies and industries in the catalog
    Catalog,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ecou=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { text, no_stem } => {
            let config = Config::load()?;
            config.require_lexicon()?;
            let lexicon = loader::load_dir(&config.data_dir)?;
            let normalizer = Normalizer::new(&lexicon, config.stemming && !no_stem)?;
            let tokens = normalizer.normalize(&text);
            if tokens.is_empty() {
                println!("{}", "(no tokens survived normalization)".dimmed());
            } else {
                println!("{}", tokens.join(" "));
            }
        }

        Commands::Analyze {
            entity,
            from,
            to,
            tweets,
            json,
        } => {
            let config = Config::load()?;
            config.require_lexicon()?;
            config.require_catalog()?;

            let catalog = Catalog::load(&config.catalog_path)?;
            let Some(entity) = catalog.resolve(&entity) else {
                anyhow::bail!(
                    "{entity:?} is not in the catalog. Run `ecou catalog` to see known names."
                );
            };
            let period = ecou::catalog::entity::EntityPeriod::parse(entity, &from, &to)?;

            let lexicon = loader::load_dir(&config.data_dir)?;
            let records = ingest::load_records(&tweets)?;

            let options = AnalysisOptions {
                stem: config.stemming,
                confidence_threshold: config.confidence_threshold,
                progress: !json,
            };
            let outcome = analyze::run(&records, &lexicon, &MarkerModel, &period, &options)?;

            if json {
                let report = serde_json::json!({
                    "entity": period.entity.name(),
                    "matrix": outcome.matrix,
                    "yearly": outcome.yearly,
                    "tweets_scored": outcome.tweets_scored,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            terminal::display_score_matrix(period.entity.name(), &outcome.matrix);
            terminal::display_yearly_summary(outcome.yearly.as_ref(), outcome.tweets_scored);
            if let Some(by_company) = &outcome.by_company {
                terminal::display_company_breakdown(by_company);
            }
            if let Some(top) = &outcome.top_tweet {
                terminal::display_top_tweet(top);
            }
        }

        Commands::Months { from, to } => {
            let (start_year, start_month) = parse_month_arg(&from)?;
            let (end_year, end_month) = parse_month_arg(&to)?;
            let keys = month_range(start_year, start_month, end_year, end_month)?;
            println!("{} ({} months)", keys.join(" "), keys.len());
        }

        Commands::Catalog => {
            let config = Config::load()?;
            config.require_catalog()?;
            let catalog = Catalog::load(&config.catalog_path)?;

            println!("\n{}", "=== Companies ===".bold());
            for company in &catalog.companies {
                println!("  {company}");
            }
            println!("\n{}", "=== Industries ===".bold());
            for (industry, companies) in &catalog.industries {
                println!("  {industry} ({})", companies.join(", "));
            }
        }
    }

    Ok(())
}

/// Accept "YYYY-MM-DD" or bare "YYYY-MM" for the months command.
fn parse_month_arg(raw: &str) -> Result<(i32, u32)> {
    use chrono::{Datelike, NaiveDate};
    let padded = if raw.len() == 7 {
        format!("{raw}-01")
    } else {
        raw.to_string()
    };
    let date = NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date {raw:?}: {e}"))?;
    Ok((date.year(), date.month()))
}
