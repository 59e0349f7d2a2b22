// File-backed lexicon loading.
//
// The lexicon lives in a data directory as flat text files: one entry per
// line for the lists, `key=value` lines for the mappings. The custom
// Romanian stop-word list is merged with the `stop-words` crate's Romanian
// list so the pipeline doesn't depend on the custom list being exhaustive.
//
// Every entry is lowercased and diacritic-folded at load time, because the
// pipeline consults the lexicon only after its own folding stage.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::{info, warn};

use crate::normalize::diacritics::fold_diacritics;

use super::LexiconStore;

pub const STOP_WORDS_FILE: &str = "stop_words.txt";
pub const ABBREVIATIONS_FILE: &str = "abbreviations.txt";
pub const EMOJI_FILE: &str = "emoji.txt";
pub const CITIES_FILE: &str = "cities.txt";
pub const COMPANIES_FILE: &str = "companies.txt";
pub const MULTI_VOWEL_WORDS_FILE: &str = "multi_vowel_words.txt";

/// Load a complete lexicon from `dir`.
///
/// All six files must be present. A malformed mapping line is skipped with
/// a warning rather than aborting the load.
pub fn load_dir(dir: &Path) -> Result<LexiconStore> {
    let mut stop_words = read_lines(&dir.join(STOP_WORDS_FILE))?;
    // Merge the crate's Romanian list; duplicates collapse in the set.
    stop_words.extend(get(LANGUAGE::Romanian).into_iter().map(|w| fold_diacritics(&w)));

    let abbreviations = read_pairs(&dir.join(ABBREVIATIONS_FILE))?;
    let emoji_markers = read_pairs(&dir.join(EMOJI_FILE))?;
    let cities = read_lines(&dir.join(CITIES_FILE))?;
    let companies = read_lines(&dir.join(COMPANIES_FILE))?;
    let multi_vowel_words = read_lines(&dir.join(MULTI_VOWEL_WORDS_FILE))?;

    let store = LexiconStore::from_parts(
        stop_words,
        abbreviations,
        emoji_markers,
        cities,
        companies,
        multi_vowel_words,
    );

    info!(
        stop_words = store.stop_word_count(),
        companies = store.company_count(),
        multi_vowel_words = store.multi_vowel_words().len(),
        "Lexicon loaded"
    );

    Ok(store)
}

/// Read a one-entry-per-line list, folded and lowercased.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading lexicon list {}", path.display()))?;
    Ok(content
        .lines()
        .map(|line| fold_diacritics(line.trim()).to_lowercase())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Read a `key=value` mapping file.
///
/// Keys may themselves contain '=' (emoticons like "=))"), so the split is
/// taken at the last '=' on the line.
fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading lexicon mapping {}", path.display()))?;
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut halves = line.rsplitn(2, '=');
        match (halves.next(), halves.next()) {
            (Some(value), Some(key)) if !key.is_empty() && !value.is_empty() => {
                pairs.push((key.to_string(), fold_diacritics(value).to_lowercase()));
            }
            _ => {
                warn!(file = %path.display(), line, "Skipping malformed mapping line");
            }
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_split_at_last_equals() {
        let path = std::env::temp_dir().join("ecou_test_pairs.txt");
        std::fs::write(&path, "fb=facebook\n=))=bun\nbroken\n").unwrap();
        let pairs = read_pairs(&path).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("fb".to_string(), "facebook".to_string()));
        assert_eq!(pairs[1], ("=))".to_string(), "bun".to_string()));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn lines_are_folded_and_lowercased() {
        let path = std::env::temp_dir().join("ecou_test_lines.txt");
        std::fs::write(&path, "Brașov\n\n  Iași  \n").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["brasov".to_string(), "iasi".to_string()]);
        let _ = std::fs::remove_file(&path);
    }
}
