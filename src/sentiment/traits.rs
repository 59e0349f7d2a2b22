// Sentiment model trait — the classifier seam.
//
// The pretrained model is consumed as a black box: text in, polarity and
// confidence out. The default implementation is the marker-count model;
// a fastText or transformer backend can be swapped in behind this trait
// without touching the aggregation pipeline.

use anyhow::Result;

use super::label::Polarity;

/// One classifier prediction for a piece of text.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    /// The raw predicted class, before the acceptance policy is applied.
    pub polarity: Polarity,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
}

/// Trait for predicting the sentiment of a normalized text.
pub trait SentimentModel {
    /// Predict sentiment for one text (normalized tokens joined by spaces).
    fn predict(&self, text: &str) -> Result<Prediction>;
}

/// No-op model for flows that don't classify (e.g. `normalize`).
/// Errors if actually called — never silently produces fake predictions.
pub struct NoopModel;

impl SentimentModel for NoopModel {
    fn predict(&self, _text: &str) -> Result<Prediction> {
        anyhow::bail!("NoopModel should never be called — this flow does not classify")
    }
}
