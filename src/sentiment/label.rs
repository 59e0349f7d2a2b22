// Sentiment labels and the label-assignment policy.

use serde::{Deserialize, Serialize};

use super::traits::Prediction;

/// A classifier prediction is accepted as positive/negative only above
/// this confidence; anything weaker is treated as neutral.
pub const CONFIDENCE_THRESHOLD: f64 = 0.66;

/// Three-way sentiment label attached to an observation.
///
/// Serialized as -1/0/+1 to match the tabular records the scraper writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Polarity {
    Negative,
    Neutral,
    Positive,
}

impl Polarity {
    /// Index into a 3-element score vector: 0 negative, 1 neutral, 2 positive.
    pub fn index(self) -> usize {
        match self {
            Polarity::Negative => 0,
            Polarity::Neutral => 1,
            Polarity::Positive => 2,
        }
    }

    /// The -1/0/+1 value used in tabular records.
    pub fn value(self) -> i8 {
        match self {
            Polarity::Negative => -1,
            Polarity::Neutral => 0,
            Polarity::Positive => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
            Polarity::Positive => "positive",
        }
    }
}

impl From<Polarity> for i8 {
    fn from(p: Polarity) -> i8 {
        p.value()
    }
}

impl TryFrom<i8> for Polarity {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            -1 => Ok(Polarity::Negative),
            0 => Ok(Polarity::Neutral),
            1 => Ok(Polarity::Positive),
            other => Err(format!("invalid sentiment label {other}, expected -1/0/1")),
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Apply the acceptance policy: the predicted polarity stands only when
/// the classifier is confident enough, otherwise the observation is
/// labeled neutral.
pub fn label_from_prediction(prediction: &Prediction, threshold: f64) -> Polarity {
    if prediction.confidence > threshold {
        prediction.polarity
    } else {
        Polarity::Neutral
    }
}
