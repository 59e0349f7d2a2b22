// Temporal sentiment aggregation.
//
// Converts labeled, influence-weighted observations into a per-month
// 3-way sentiment distribution (the score matrix) and its yearly-averaged
// summary. A tweet's contribution is weighted by its influence score, so
// one widely-shared tweet can outweigh dozens of ignored ones.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::catalog::entity::EntityKind;
use crate::sentiment::label::Polarity;

/// One tweet's contribution to scoring: entity names, month bucket,
/// accepted label, and influence weight. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub company: String,
    pub industry: String,
    /// "YYYY-MM" bucket key.
    pub month: String,
    pub polarity: Polarity,
    /// Non-negative influence weight, derived upstream from retweet and
    /// like counts.
    pub weight: f64,
}

/// Per-month sentiment distributions over an entity period.
///
/// Each row is [negative, neutral, positive] fractions summing to 1.0,
/// or all zeros for a month without observations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreMatrix {
    months: Vec<String>,
    rows: Vec<[f64; 3]>,
}

impl ScoreMatrix {
    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn rows(&self) -> &[[f64; 3]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Transpose from (months × 3) to 3 label series of month length —
    /// the shape the plotting collaborators consume.
    pub fn transpose(&self) -> [Vec<f64>; 3] {
        let mut series = [
            Vec::with_capacity(self.rows.len()),
            Vec::with_capacity(self.rows.len()),
            Vec::with_capacity(self.rows.len()),
        ];
        for row in &self.rows {
            for (label, value) in row.iter().enumerate() {
                series[label].push(*value);
            }
        }
        series
    }

    /// Average the whole period into one [negative, neutral, positive]
    /// distribution: each label's cells summed, divided by the grand total
    /// of all cells. Months with more observations therefore weigh more.
    ///
    /// Errors when every cell is zero — "insufficient data" is an explicit
    /// condition, never a NaN.
    pub fn yearly_average(&self) -> Result<[f64; 3]> {
        let mut sums = [0.0f64; 3];
        for row in &self.rows {
            for (label, value) in row.iter().enumerate() {
                sums[label] += value;
            }
        }
        let grand_total: f64 = sums.iter().sum();
        if grand_total == 0.0 {
            anyhow::bail!("no scored observations in the period — insufficient data to average");
        }
        Ok([
            sums[0] / grand_total,
            sums[1] / grand_total,
            sums[2] / grand_total,
        ])
    }
}

/// Bucket observations matching `entity` by month and normalize each
/// month's label weights into a distribution.
///
/// Months in `months` with no observations get an explicit all-zero row;
/// the output always has exactly one row per requested month.
pub fn aggregate(observations: &[Observation], entity: &EntityKind, months: &[String]) -> ScoreMatrix {
    let mut label_weights: HashMap<&str, [f64; 3]> = HashMap::new();
    let mut weight_sums: HashMap<&str, f64> = HashMap::new();

    for obs in observations.iter().filter(|o| entity.matches(o)) {
        let entry = label_weights.entry(obs.month.as_str()).or_insert([0.0; 3]);
        entry[obs.polarity.index()] += obs.weight;
        *weight_sums.entry(obs.month.as_str()).or_insert(0.0) += obs.weight;
    }

    let rows = months
        .iter()
        .map(|month| {
            let total = weight_sums.get(month.as_str()).copied().unwrap_or(0.0);
            if total == 0.0 {
                // Explicit divide-by-zero guard: an empty month is a row
                // of zeros, not a NaN.
                [0.0; 3]
            } else {
                let weights = label_weights
                    .get(month.as_str())
                    .copied()
                    .unwrap_or([0.0; 3]);
                [weights[0] / total, weights[1] / total, weights[2] / total]
            }
        })
        .collect();

    ScoreMatrix {
        months: months.to_vec(),
        rows,
    }
}

/// Per-company breakdown for an industry: aggregate each company present
/// in the observations separately over the same month range.
pub fn aggregate_by_company(
    observations: &[Observation],
    months: &[String],
) -> BTreeMap<String, ScoreMatrix> {
    let mut by_company: BTreeMap<String, ScoreMatrix> = BTreeMap::new();
    let mut companies: Vec<&str> = observations.iter().map(|o| o.company.as_str()).collect();
    companies.sort_unstable();
    companies.dedup();

    for company in companies {
        let entity = EntityKind::company(company);
        by_company.insert(company.to_string(), aggregate(observations, &entity, months));
    }
    by_company
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(company: &str, month: &str, polarity: Polarity, weight: f64) -> Observation {
        Observation {
            company: company.to_string(),
            industry: "banking".to_string(),
            month: month.to_string(),
            polarity,
            weight,
        }
    }

    #[test]
    fn distribution_is_weight_normalized() {
        let observations = vec![
            obs("alpha", "2021-01", Polarity::Positive, 10.0),
            obs("alpha", "2021-01", Polarity::Negative, 5.0),
        ];
        let months = vec!["2021-01".to_string()];
        let matrix = aggregate(&observations, &EntityKind::company("alpha"), &months);
        let row = matrix.rows()[0];
        assert!((row[0] - 5.0 / 15.0).abs() < 1e-9);
        assert_eq!(row[1], 0.0);
        assert!((row[2] - 10.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn empty_month_is_all_zeros() {
        let observations = vec![obs("alpha", "2021-01", Polarity::Positive, 3.0)];
        let months = vec!["2021-01".to_string(), "2021-02".to_string()];
        let matrix = aggregate(&observations, &EntityKind::company("alpha"), &months);
        assert_eq!(matrix.rows()[1], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn non_matching_entities_are_filtered() {
        let observations = vec![
            obs("alpha", "2021-01", Polarity::Positive, 3.0),
            obs("beta", "2021-01", Polarity::Negative, 9.0),
        ];
        let months = vec!["2021-01".to_string()];
        let matrix = aggregate(&observations, &EntityKind::company("alpha"), &months);
        assert_eq!(matrix.rows()[0], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn yearly_average_with_no_data_errors() {
        let months = vec!["2021-01".to_string()];
        let matrix = aggregate(&[], &EntityKind::company("alpha"), &months);
        assert!(matrix.yearly_average().is_err());
    }

    #[test]
    fn transpose_shape() {
        let observations = vec![obs("alpha", "2021-01", Polarity::Neutral, 1.0)];
        let months = vec!["2021-01".to_string(), "2021-02".to_string()];
        let matrix = aggregate(&observations, &EntityKind::company("alpha"), &months);
        let series = matrix.transpose();
        assert_eq!(series[1], vec![1.0, 0.0]);
        assert_eq!(series[0].len(), 2);
    }
}
