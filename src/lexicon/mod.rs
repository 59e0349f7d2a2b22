// Lexicon store — the immutable word lists and mappings shared by every
// normalization call.
//
// The store is built once (from data files via `loader`, or from synthetic
// collections in tests) and never mutated afterwards, so it can be shared
// freely across threads without locking. Lookup misses are ordinary
// branches, not errors.

pub mod loader;

use std::collections::{HashMap, HashSet};

/// Token the emoji map emits for a positive emoticon.
pub const GOOD_MARKER: &str = "bun";
/// Token the emoji map emits for a negative emoticon.
pub const BAD_MARKER: &str = "rau";

/// Immutable collection of stop-words, abbreviation expansions, emoji
/// mappings, city and company name lists, and the known multi-vowel words
/// used as ground truth by the repeated-letter corrector.
///
/// All entries are stored lowercased and diacritic-folded, matching the
/// state of the text at the pipeline stages that consult them.
pub struct LexiconStore {
    stop_words: HashSet<String>,
    abbreviations: HashMap<String, String>,
    emoji_markers: HashMap<String, String>,
    cities: Vec<String>,
    companies: Vec<String>,
    multi_vowel_words: HashSet<String>,
}

impl LexiconStore {
    /// Build a store from already-prepared collections.
    ///
    /// Entries are normalized here (lowercase, trimmed) so callers and the
    /// file loader don't each have to remember to do it.
    pub fn from_parts(
        stop_words: Vec<String>,
        abbreviations: Vec<(String, String)>,
        emoji_markers: Vec<(String, String)>,
        cities: Vec<String>,
        companies: Vec<String>,
        multi_vowel_words: Vec<String>,
    ) -> Self {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            abbreviations: abbreviations
                .into_iter()
                .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
                .collect(),
            emoji_markers: emoji_markers
                .into_iter()
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .collect(),
            cities: cities
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            companies: companies
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
            multi_vowel_words: multi_vowel_words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Exact stop-word membership — the final filter of the pipeline.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Whether `token` (already lowercased) is contained in any stop-word
    /// entry. Used at the classification stage, where a match means "keep
    /// the token unstemmed".
    pub fn matches_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|sw| sw.contains(token))
    }

    /// Whether `token` (already lowercased) is contained in any city name.
    pub fn matches_city(&self, token: &str) -> bool {
        self.cities.iter().any(|city| city.contains(token))
    }

    /// Whether `token` (already lowercased) is contained in any company name.
    pub fn matches_company_token(&self, token: &str) -> bool {
        self.companies.iter().any(|comp| comp.contains(token))
    }

    /// Company protection for whole words: true when any company-name entry
    /// is a substring of the word. Protected words skip repeated-letter
    /// correction and CamelCase splitting so brand spellings survive intact.
    pub fn protects(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.companies.iter().any(|comp| lower.contains(comp.as_str()))
    }

    /// Abbreviation expansion for an exact lowercased key, or None.
    pub fn expand_abbreviation(&self, word: &str) -> Option<&str> {
        self.abbreviations.get(word).map(String::as_str)
    }

    /// Sentiment marker for an emoji token, or None for unknown emojis.
    pub fn emoji_marker(&self, word: &str) -> Option<&str> {
        self.emoji_markers.get(word).map(String::as_str)
    }

    /// The set of known correctly-spelled multi-vowel words — ground truth
    /// for the repeated-letter corrector.
    pub fn multi_vowel_words(&self) -> &HashSet<String> {
        &self.multi_vowel_words
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LexiconStore {
        LexiconStore::from_parts(
            vec!["la".to_string(), "si".to_string()],
            vec![("fb".to_string(), "facebook".to_string())],
            vec![(":)".to_string(), GOOD_MARKER.to_string())],
            vec!["bucuresti".to_string()],
            vec!["petrom".to_string()],
            vec!["copiii".to_string()],
        )
    }

    #[test]
    fn entries_are_normalized_on_build() {
        let lex = LexiconStore::from_parts(
            vec!["  La ".to_string()],
            vec![(" FB ".to_string(), " facebook ".to_string())],
            vec![],
            vec![],
            vec![],
            vec![],
        );
        assert!(lex.is_stop_word("la"));
        assert_eq!(lex.expand_abbreviation("fb"), Some("facebook"));
    }

    #[test]
    fn protection_matches_company_inside_word() {
        let lex = store();
        assert!(lex.protects("Petrom"));
        assert!(lex.protects("#petromSA"));
        assert!(!lex.protects("benzina"));
    }

    #[test]
    fn token_matches_are_substring_of_entry() {
        let lex = store();
        // token contained in the entry, not the other way around
        assert!(lex.matches_city("bucur"));
        assert!(!lex.matches_city("bucurestiul"));
    }

    #[test]
    fn unknown_lookups_are_none() {
        let lex = store();
        assert_eq!(lex.expand_abbreviation("xyz"), None);
        assert_eq!(lex.emoji_marker(":("), None);
    }
}
