// Diacritic folding for Romanian text.
//
// Maps each accented letter to its unaccented Latin equivalent, character
// by character. Both the comma-below forms (U+0218/U+021A) and the legacy
// cedilla forms (U+015E/U+0162) appear in the wild, so both are folded.

/// Fold Romanian diacritics to their base letters. Other characters pass
/// through unchanged.
pub fn fold_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'ă' | 'â' => 'a',
            'î' => 'i',
            'ș' | 'ş' => 's',
            'ț' | 'ţ' => 't',
            'Ă' | 'Â' => 'A',
            'Î' => 'I',
            'Ș' | 'Ş' => 'S',
            'Ț' | 'Ţ' => 'T',
            other => other,
        })
        .collect()
}
