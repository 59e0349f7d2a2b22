// The analysis pipeline: records in, score matrix out.
//
// Orchestrates the core subsystems for one entity period — normalize each
// matching tweet, classify it, apply the acceptance policy, aggregate the
// labeled observations into the monthly score matrix and its yearly
// summary. Pre-labeled records keep their labels and skip classification.

use std::collections::BTreeMap;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::catalog::entity::{EntityKind, EntityPeriod};
use crate::ingest::TweetRecord;
use crate::lexicon::LexiconStore;
use crate::normalize::pipeline::Normalizer;
use crate::reputation::aggregate::{aggregate, aggregate_by_company, Observation, ScoreMatrix};
use crate::sentiment::label::{label_from_prediction, CONFIDENCE_THRESHOLD};
use crate::sentiment::traits::SentimentModel;

pub struct AnalysisOptions {
    /// Stem tokens before classification.
    pub stem: bool,
    /// Confidence below which a prediction is labeled neutral.
    pub confidence_threshold: f64,
    /// Show a terminal progress bar while classifying.
    pub progress: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            stem: true,
            confidence_threshold: CONFIDENCE_THRESHOLD,
            progress: false,
        }
    }
}

pub struct AnalysisOutcome {
    pub matrix: ScoreMatrix,
    /// None when the period held no scored weight — insufficient data.
    pub yearly: Option<[f64; 3]>,
    /// Per-company breakdown, present for industry entities.
    pub by_company: Option<BTreeMap<String, ScoreMatrix>>,
    pub tweets_scored: usize,
    /// The matched record with the highest influence score.
    pub top_tweet: Option<TweetRecord>,
}

/// Run the full analysis for `period` over the scraped records.
pub fn run(
    records: &[TweetRecord],
    lexicon: &LexiconStore,
    model: &dyn SentimentModel,
    period: &EntityPeriod,
    options: &AnalysisOptions,
) -> Result<AnalysisOutcome> {
    let months = period.month_keys()?;
    let normalizer = Normalizer::new(lexicon, options.stem)?;

    let matched: Vec<&TweetRecord> = records
        .iter()
        .filter(|r| period.entity.matches_names(&r.company, &r.industry))
        .collect();

    info!(
        entity = %period.entity,
        matched = matched.len(),
        months = months.len(),
        "Scoring tweets"
    );

    let pb = if options.progress {
        let pb = ProgressBar::new(matched.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Scoring [{bar:30}] {pos}/{len} ({eta})")
                .unwrap(),
        );
        Some(pb)
    } else {
        None
    };

    let mut observations: Vec<Observation> = Vec::with_capacity(matched.len());
    let mut top_tweet: Option<TweetRecord> = None;

    for record in &matched {
        let polarity = match record.label {
            Some(polarity) => polarity,
            None => {
                let tokens = normalizer.normalize(&record.text);
                match model.predict(&tokens.join(" ")) {
                    Ok(prediction) => {
                        label_from_prediction(&prediction, options.confidence_threshold)
                    }
                    Err(e) => {
                        warn!(id = record.id, error = %e, "Classification failed, skipping tweet");
                        if let Some(pb) = &pb {
                            pb.inc(1);
                        }
                        continue;
                    }
                }
            }
        };
        observations.push(record.to_observation(polarity));

        let is_top = top_tweet
            .as_ref()
            .map_or(true, |t| record.influence_score > t.influence_score);
        if is_top {
            top_tweet = Some((*record).clone());
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let matrix = aggregate(&observations, &period.entity, &months);
    let yearly = match matrix.yearly_average() {
        Ok(yearly) => Some(yearly),
        Err(e) => {
            warn!(entity = %period.entity, "{e}");
            None
        }
    };

    let by_company = match &period.entity {
        EntityKind::Industry { .. } => Some(aggregate_by_company(&observations, &months)),
        EntityKind::Company { .. } => None,
    };

    Ok(AnalysisOutcome {
        matrix,
        yearly,
        by_company,
        tweets_scored: observations.len(),
        top_tweet,
    })
}
