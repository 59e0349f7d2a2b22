// Colored terminal output for score matrices and summaries.
//
// All terminal-specific formatting lives here; main.rs delegates to these
// display functions.

use colored::Colorize;

use crate::ingest::TweetRecord;
use crate::reputation::aggregate::ScoreMatrix;

use super::truncate_chars;

/// Display the per-month sentiment distribution table for an entity.
pub fn display_score_matrix(entity_name: &str, matrix: &ScoreMatrix) {
    println!(
        "\n{}",
        format!("=== E-reputation for {entity_name} ===").bold()
    );
    println!();
    println!(
        "  {:<9} {:>9}  {:>9}  {:>9}",
        "Month".dimmed(),
        "Negative".dimmed(),
        "Neutral".dimmed(),
        "Positive".dimmed(),
    );
    println!("  {}", "-".repeat(42).dimmed());

    for (month, row) in matrix.months().iter().zip(matrix.rows()) {
        if row.iter().all(|v| *v == 0.0) {
            println!("  {:<9} {}", month, "no tweets".dimmed());
            continue;
        }
        println!(
            "  {:<9} {:>8}%  {:>8}%  {:>8}%",
            month,
            format_cell(row[0], row, 0),
            format_cell(row[1], row, 1),
            format_cell(row[2], row, 2),
        );
    }
}

// Percent cell, colored by label and bolded when dominant.
fn format_cell(value: f64, row: &[f64; 3], label: usize) -> colored::ColoredString {
    let text = format!("{:.1}", value * 100.0);
    let colored = match label {
        0 => text.red(),
        2 => text.green(),
        _ => text.normal(),
    };
    let dominant = row.iter().all(|other| value >= *other);
    if dominant && value > 0.0 {
        colored.bold()
    } else {
        colored
    }
}

/// Display the yearly-averaged distribution, or the insufficient-data
/// notice when the period held no scored weight.
pub fn display_yearly_summary(yearly: Option<&[f64; 3]>, tweets_scored: usize) {
    println!();
    match yearly {
        Some(avg) => {
            println!(
                "  Period average ({} tweets): {} negative, {} neutral, {} positive",
                tweets_scored,
                format!("{:.1}%", avg[0] * 100.0).red(),
                format!("{:.1}%", avg[1] * 100.0),
                format!("{:.1}%", avg[2] * 100.0).green(),
            );
        }
        None => {
            println!(
                "  {}",
                "Not enough scored tweets in this period for a yearly average.".yellow()
            );
        }
    }
}

/// Display the most influential tweet found for the entity.
pub fn display_top_tweet(record: &TweetRecord) {
    println!();
    println!("  Most influential tweet ({}):", record.date.dimmed());
    println!(
        "    \"{}\"",
        truncate_chars(record.text.trim(), 120).italic()
    );
    println!(
        "    {} retweets, {} likes (influence {:.0})",
        record.retweets, record.favorites, record.influence_score
    );
}

/// Display per-company yearly averages for an industry breakdown.
pub fn display_company_breakdown(by_company: &std::collections::BTreeMap<String, ScoreMatrix>) {
    if by_company.is_empty() {
        return;
    }
    println!("\n{}", "=== Per-company breakdown ===".bold());
    println!();
    for (company, matrix) in by_company {
        match matrix.yearly_average() {
            Ok(avg) => println!(
                "  {:<24} {} / {} / {}",
                company,
                format!("{:>5.1}%", avg[0] * 100.0).red(),
                format!("{:>5.1}%", avg[1] * 100.0),
                format!("{:>5.1}%", avg[2] * 100.0).green(),
            ),
            Err(_) => println!("  {:<24} {}", company, "insufficient data".dimmed()),
        }
    }
}
