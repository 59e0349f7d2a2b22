// Repeated-letter correction.
//
// Casual typing stretches words ("superrrr", "multtt"); Romanian also has
// legitimate doubled and tripled vowels ("copiii", "fiinta"). The corrector
// collapses spurious duplication while preserving words the multi-vowel
// lexicon vouches for.
//
// The combinatorial search in the last resort is exponential in the number
// of duplicate positions. Tweet words are short so the run count is small
// in practice, but a budget caps it anyway; overflow falls through to the
// collapse-everything fallback instead of searching forever.

use std::collections::HashSet;

use tracing::debug;

/// Hard cap on deletable duplicate positions fed to the subset search.
/// 12 positions bounds the enumeration at 4096 candidate words.
pub const MAX_DELETABLE_POSITIONS: usize = 12;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Whether the word contains any two identical adjacent characters.
pub fn has_adjacent_repeat(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.windows(2).any(|w| w[0] == w[1])
}

/// Collapse every adjacent duplicate pair, left to right, rescanning after
/// each removal. "aabbb" -> "ab".
fn collapse_all(chars: &[char]) -> String {
    let mut out: Vec<char> = chars.to_vec();
    let mut i = 0;
    while i + 1 < out.len() {
        if out[i] == out[i + 1] {
            out.remove(i);
        } else {
            i += 1;
        }
    }
    out.into_iter().collect()
}

/// Correct spurious character duplication in `word` (already lowercased),
/// using `known` as the set of legitimately multi-vowel words.
///
/// Total function: always returns a string, never fails. Words already in
/// the lexicon are returned unchanged.
pub fn correct(word: &str, known: &HashSet<String>) -> String {
    if known.contains(word) {
        return word.to_string();
    }

    let mut chars: Vec<char> = word.chars().collect();

    // Doubled consonants are never legitimate; collapse them first.
    // Removal can create a new adjacent pair, so stay on the same index.
    let mut i = 0;
    while i + 1 < chars.len() {
        if chars[i] == chars[i + 1] && !is_vowel(chars[i]) {
            chars.remove(i);
        } else {
            i += 1;
        }
    }

    // Triple runs of a vowel other than 'i' reduce to doubles.
    let mut i = 0;
    while i + 2 < chars.len() {
        if chars[i] == chars[i + 1]
            && chars[i + 1] == chars[i + 2]
            && is_vowel(chars[i])
            && chars[i] != 'i'
        {
            chars.remove(i);
        } else {
            i += 1;
        }
    }

    // The language admits triple 'i' ("copiii") but not quadruple.
    let mut i = 0;
    while i + 3 < chars.len() {
        if chars[i] == 'i'
            && chars[i + 1] == 'i'
            && chars[i + 2] == 'i'
            && chars[i + 3] == 'i'
        {
            chars.remove(i);
        } else {
            i += 1;
        }
    }

    let reduced: String = chars.iter().collect();
    if known.contains(&reduced) {
        return reduced;
    }

    // Every index that duplicates its predecessor is a deletable position.
    let dup_positions: Vec<usize> = (1..chars.len())
        .filter(|&i| chars[i] == chars[i - 1])
        .collect();

    if !dup_positions.is_empty() {
        if dup_positions.len() <= MAX_DELETABLE_POSITIONS {
            if let Some(found) = search_deletions(&chars, &dup_positions, known) {
                return found;
            }
        } else {
            debug!(
                word,
                positions = dup_positions.len(),
                "Duplicate-position budget exceeded, collapsing instead"
            );
        }
    }

    collapse_all(&chars)
}

/// Enumerate deletion subsets over the duplicate positions, smallest
/// subsets first, and return the first candidate found in the lexicon.
fn search_deletions(
    chars: &[char],
    dup_positions: &[usize],
    known: &HashSet<String>,
) -> Option<String> {
    let k = dup_positions.len();
    for size in 1..=k {
        for mask in 0u32..(1u32 << k) {
            if mask.count_ones() as usize != size {
                continue;
            }
            let mut candidate: Vec<char> = chars.to_vec();
            // Delete highest index first so lower indices stay valid.
            for bit in (0..k).rev() {
                if mask & (1 << bit) != 0 {
                    candidate.remove(dup_positions[bit]);
                }
            }
            let candidate: String = candidate.into_iter().collect();
            if known.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}
