// CamelCase detection and splitting.
//
// Tweets frequently glue words together ("NuOSaCrezi", hashtag residue).
// A word qualifies as CamelCase only under fairly strict rules so that
// acronyms ("ABC") and ordinary capitalized words ("Merg") are left alone.

/// Whether `word` follows CamelCase rules.
///
/// Checked on the word with all non-word characters removed:
/// - every remaining character is a letter
/// - at least two uppercase letters
/// - the first character is uppercase, the last is not
/// - no run of three identical uppercase letters (screaming acronyms)
pub fn is_camel_case(word: &str) -> bool {
    let cleaned: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if cleaned.is_empty() || cleaned.iter().any(|c| !c.is_ascii_alphabetic()) {
        return false;
    }
    let capitals = cleaned.iter().filter(|c| c.is_ascii_uppercase()).count();
    if capitals < 2 {
        return false;
    }
    if !cleaned[0].is_ascii_uppercase() || cleaned[cleaned.len() - 1].is_ascii_uppercase() {
        return false;
    }
    for w in cleaned.windows(3) {
        if w[0] == w[1] && w[1] == w[2] && w[0].is_ascii_uppercase() {
            return false;
        }
    }
    true
}

/// Split a CamelCase word at each uppercase letter.
///
/// Each sub-word after the first starts with the uppercase letter that
/// triggered the split: "NuOSaCrezi" -> ["Nu", "O", "Sa", "Crezi"].
pub fn split_camel_case(word: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        if c.is_ascii_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    words.push(current);
    words
}
