// Marker-count sentiment model — the self-contained default backend.
//
// The normalization pipeline already converts emoticons into the "bun" /
// "rau" sentiment markers, so a serviceable zero-dependency baseline is to
// count them: majority marker wins, confidence is the majority share.
// Accounts for the negation word by flipping the marker that follows it.

use anyhow::Result;

use crate::lexicon::{BAD_MARKER, GOOD_MARKER};
use crate::normalize::pipeline::NEGATION_WORD;

use super::label::Polarity;
use super::traits::{Prediction, SentimentModel};

/// Counts sentiment markers in the normalized token stream.
pub struct MarkerModel;

impl SentimentModel for MarkerModel {
    fn predict(&self, text: &str) -> Result<Prediction> {
        let mut good = 0usize;
        let mut bad = 0usize;
        let mut negated = false;

        for token in text.split_whitespace() {
            match token {
                NEGATION_WORD => negated = true,
                GOOD_MARKER => {
                    if negated {
                        bad += 1;
                    } else {
                        good += 1;
                    }
                    negated = false;
                }
                BAD_MARKER => {
                    if negated {
                        good += 1;
                    } else {
                        bad += 1;
                    }
                    negated = false;
                }
                _ => negated = false,
            }
        }

        let total = good + bad;
        if total == 0 {
            return Ok(Prediction {
                polarity: Polarity::Neutral,
                confidence: 1.0,
            });
        }

        let (polarity, majority) = if good >= bad {
            (Polarity::Positive, good)
        } else {
            (Polarity::Negative, bad)
        };

        Ok(Prediction {
            polarity,
            confidence: majority as f64 / total as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_is_confidently_neutral() {
        let p = MarkerModel.predict("merg la munte azi").unwrap();
        assert_eq!(p.polarity, Polarity::Neutral);
        assert_eq!(p.confidence, 1.0);
    }

    #[test]
    fn majority_marker_wins() {
        let p = MarkerModel.predict("bun bun rau").unwrap();
        assert_eq!(p.polarity, Polarity::Positive);
        assert!((p.confidence - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn negation_flips_the_following_marker() {
        let p = MarkerModel.predict("nu bun").unwrap();
        assert_eq!(p.polarity, Polarity::Negative);
        assert_eq!(p.confidence, 1.0);
    }

    #[test]
    fn negation_only_reaches_the_next_token() {
        let p = MarkerModel.predict("nu merg bun").unwrap();
        assert_eq!(p.polarity, Polarity::Positive);
    }
}
