// Sentiment classification — trait-based abstraction for swappable models.
//
// The SentimentModel trait defines the interface. MarkerModel is the
// built-in baseline; an external pretrained model can implement the same
// trait and slot into the pipeline unchanged.

pub mod label;
pub mod lexical;
pub mod traits;
