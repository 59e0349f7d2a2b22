// Scraped-tweet ingest.
//
// The scraping collaborator writes a JSON array of per-tweet records; this
// module reads them back and turns labeled records into observations for
// the aggregator. Relevance and duplicate filtering already happened in
// the scraper — ingest takes the records as given.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::reputation::aggregate::Observation;
use crate::sentiment::label::Polarity;

/// One scraped tweet as the scraper records it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetRecord {
    pub company: String,
    pub industry: String,
    pub id: u64,
    pub text: String,
    pub year: i32,
    /// "YYYY-MM" bucket key.
    pub month: String,
    /// "YYYY-MM-DD".
    pub date: String,
    pub retweets: u64,
    pub favorites: u64,
    /// Influence weight, precomputed by the scraper.
    pub influence_score: f64,
    /// Sentiment label, absent until classification has run.
    #[serde(default)]
    pub label: Option<Polarity>,
}

impl TweetRecord {
    /// Build the observation for a record once a label has been accepted.
    pub fn to_observation(&self, polarity: Polarity) -> Observation {
        Observation {
            company: self.company.clone(),
            industry: self.industry.clone(),
            month: self.month.clone(),
            polarity,
            weight: self.influence_score,
        }
    }
}

/// The influence heuristic: a retweet carries an audience, a like is a
/// nod. `3 * retweets + likes`, matching what the scraper precomputes.
pub fn influence_score(retweets: u64, favorites: u64) -> f64 {
    (3 * retweets + favorites) as f64
}

/// Load a JSON array of tweet records.
pub fn load_records(path: &Path) -> Result<Vec<TweetRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading tweet records {}", path.display()))?;
    let records: Vec<TweetRecord> = serde_json::from_str(&content)
        .with_context(|| format!("parsing tweet records {}", path.display()))?;
    info!(records = records.len(), file = %path.display(), "Tweet records loaded");
    Ok(records)
}
