// The text normalization pipeline.
//
// Turns one raw tweet into an ordered list of clean tokens through a chain
// of heuristic rewrites: URL/mention/digit stripping, abbreviation
// expansion, diacritic folding, repeated-letter correction, CamelCase
// splitting, emoji substitution, stemming, and stop-word filtering.
//
// The pipeline is a pure function of its input and the lexicon. It never
// fails; malformed input just yields fewer (or zero) tokens.

use anyhow::Result;
use regex_lite::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::lexicon::{LexiconStore, BAD_MARKER, GOOD_MARKER};

use super::camel::{is_camel_case, split_camel_case};
use super::diacritics::fold_diacritics;
use super::repeats;

/// The negation word is preserved verbatim through every stage, including
/// the stop-word filter — dropping it would flip the meaning of a tweet.
pub const NEGATION_WORD: &str = "nu";

/// Normalizer over a shared lexicon.
///
/// Holds the compiled regexes and the Romanian Snowball stemmer, so build
/// one and reuse it across tweets.
pub struct Normalizer<'a> {
    lexicon: &'a LexiconStore,
    stem: bool,
    stemmer: Stemmer,
    url_re: Regex,
    digits_re: Regex,
    mention_re: Regex,
    non_word_re: Regex,
}

impl<'a> Normalizer<'a> {
    pub fn new(lexicon: &'a LexiconStore, stem: bool) -> Result<Self> {
        Ok(Self {
            lexicon,
            stem,
            stemmer: Stemmer::create(Algorithm::Romanian),
            url_re: Regex::new(r"(www\.[^\s]+)|(https?://[^\s]+)")?,
            digits_re: Regex::new(r"\d+")?,
            mention_re: Regex::new(r"@[^\s]+")?,
            non_word_re: Regex::new(r"\W+")?,
        })
    }

    /// Run the full pipeline on one raw text. Token order follows the
    /// original text; no deduplication.
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        let text = self.url_re.replace_all(raw, "");
        let text = self.digits_re.replace_all(&text, "");
        let text = self.mention_re.replace_all(&text, "");
        let text = text.replace('#', " ");

        // Word-level rewrites, accumulating into a rebuilt text.
        let mut rebuilt = String::new();
        for candidate in text.split_whitespace() {
            let mut word = candidate.to_string();

            if let Some(expansion) = self.lexicon.expand_abbreviation(&word.to_lowercase()) {
                word = expansion.to_string();
            }
            word = fold_diacritics(&word);

            let protected = self.lexicon.protects(&word);

            if !protected && repeats::has_adjacent_repeat(&word.to_lowercase()) {
                word = repeats::correct(&word.to_lowercase(), self.lexicon.multi_vowel_words());
            }

            if !protected && is_camel_case(&word) {
                // Each sub-word gets its own abbreviation pass.
                for sub in split_camel_case(&word) {
                    match self.lexicon.expand_abbreviation(&sub.to_lowercase()) {
                        Some(expansion) => rebuilt.push_str(expansion),
                        None => rebuilt.push_str(&sub),
                    }
                    rebuilt.push(' ');
                }
            } else {
                rebuilt.push_str(&word);
                rebuilt.push(' ');
            }

            if let Some(marker) = self.lexicon.emoji_marker(&word) {
                rebuilt = rebuilt.replace(&word, marker);
            }
        }

        let spaced = self.non_word_re.replace_all(&rebuilt, " ");

        // Token-level classification: markers and lexicon matches are
        // exempt from stemming; city/company mentions are scrubbed.
        let mut classified: Vec<String> = Vec::new();
        for token in spaced.split_whitespace() {
            let lower = token.to_lowercase();
            if lower == NEGATION_WORD {
                classified.push(lower);
                continue;
            }
            if token == GOOD_MARKER || token == BAD_MARKER {
                classified.push(lower);
                continue;
            }
            if self.lexicon.matches_city(&lower) || self.lexicon.matches_company_token(&lower) {
                continue;
            }
            if self.lexicon.matches_stop_word(&lower) {
                classified.push(lower);
                continue;
            }
            if self.stem {
                classified.push(self.stemmer.stem(&lower).into_owned());
            } else {
                classified.push(lower);
            }
        }

        // Post-stemming abbreviation re-expansion: a stemmed token can
        // land back on an abbreviation key.
        let mut expanded: Vec<String> = Vec::new();
        for token in classified {
            match self.lexicon.expand_abbreviation(&token) {
                Some(expansion) => {
                    expanded.extend(expansion.split_whitespace().map(str::to_string));
                }
                None => expanded.push(token),
            }
        }

        expanded
            .into_iter()
            .filter(|t| t == NEGATION_WORD || !self.lexicon.is_stop_word(t))
            .collect()
    }
}
