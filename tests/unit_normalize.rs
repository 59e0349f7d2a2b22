// Unit tests for the text normalization pipeline.
//
// Each test builds a small synthetic lexicon so the behavior under test is
// isolated from any real data files.

use ecou::lexicon::LexiconStore;
use ecou::normalize::camel::{is_camel_case, split_camel_case};
use ecou::normalize::diacritics::fold_diacritics;
use ecou::normalize::pipeline::Normalizer;

fn lexicon(
    stop_words: &[&str],
    abbreviations: &[(&str, &str)],
    emoji: &[(&str, &str)],
    cities: &[&str],
    companies: &[&str],
    multi_vowel: &[&str],
) -> LexiconStore {
    LexiconStore::from_parts(
        stop_words.iter().map(|s| s.to_string()).collect(),
        abbreviations
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        emoji.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        cities.iter().map(|s| s.to_string()).collect(),
        companies.iter().map(|s| s.to_string()).collect(),
        multi_vowel.iter().map(|s| s.to_string()).collect(),
    )
}

fn empty() -> LexiconStore {
    lexicon(&[], &[], &[], &[], &[], &[])
}

// ============================================================
// Stripping stages: URLs, mentions, digits, hashtags
// ============================================================

#[test]
fn urls_are_stripped() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(
        n.normalize("vezi https://stiri.example.com/articol acum"),
        vec!["vezi", "acum"]
    );
    assert_eq!(n.normalize("vezi www.example.com acum"), vec!["vezi", "acum"]);
}

#[test]
fn mentions_and_digits_are_stripped() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(
        n.normalize("@user a zis asta in 2021 de 15 ori"),
        vec!["a", "zis", "asta", "in", "de", "ori"]
    );
}

#[test]
fn hashtag_word_survives_without_the_hash() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("merge #bine"), vec!["merge", "bine"]);
}

#[test]
fn garbage_input_yields_empty_tokens() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert!(n.normalize("").is_empty());
    assert!(n.normalize("!!! ??? 12345 @tot http://x.example").is_empty());
}

// ============================================================
// Abbreviation expansion — both passes
// ============================================================

#[test]
fn pre_stem_abbreviation_expands_whole_word() {
    let lex = lexicon(&[], &[("dl", "domnul")], &[], &[], &[], &[]);
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("dl director"), vec!["domnul", "director"]);
}

#[test]
fn post_stem_abbreviation_splits_multiword_expansion() {
    // "cf." misses the pre-stem pass (the dot is still attached); once
    // punctuation is gone the bare token matches and the expansion is
    // appended word by word
    let lex = lexicon(&[], &[("cf", "conform cu")], &[], &[], &[], &[]);
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("cf. planului"), vec!["conform", "cu", "planului"]);
}

#[test]
fn unknown_abbreviations_are_left_alone() {
    let lex = lexicon(&[], &[("dl", "domnul")], &[], &[], &[], &[]);
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("dna director"), vec!["dna", "director"]);
}

// ============================================================
// Diacritic folding
// ============================================================

#[test]
fn diacritics_fold_to_base_letters() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("învățământ școală"), vec!["invatamant", "scoala"]);
}

#[test]
fn fold_handles_both_cases() {
    assert_eq!(fold_diacritics("Țară Șes Îngheț"), "Tara Ses Inghet");
}

// ============================================================
// CamelCase detection and splitting
// ============================================================

#[test]
fn camel_case_rules() {
    assert!(is_camel_case("AbCd"));
    assert!(!is_camel_case("ABC"));
    assert!(!is_camel_case("Abcd"));
    assert!(!is_camel_case("abCd"));
    assert!(!is_camel_case("AbCD"));
}

#[test]
fn camel_split_keeps_trigger_letters() {
    assert_eq!(
        split_camel_case("NuOSaCrezi"),
        vec!["Nu", "O", "Sa", "Crezi"]
    );
}

#[test]
fn camel_word_splits_in_the_pipeline() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(
        n.normalize("Merg la NuOSaCrezi #bine azi"),
        vec!["merg", "la", "nu", "o", "sa", "crezi", "bine", "azi"]
    );
}

#[test]
fn protected_company_is_not_split() {
    let lex = lexicon(&[], &[], &[], &[], &["bancatransilvania"], &[]);
    let n = Normalizer::new(&lex, false).unwrap();
    // protected from splitting at the word stage, scrubbed at the token
    // stage as a company mention
    assert_eq!(n.normalize("BancaTransilvania creste"), vec!["creste"]);
}

// ============================================================
// Emoji substitution
// ============================================================

#[test]
fn known_emoji_becomes_marker() {
    let lex = lexicon(&[], &[], &[(":)", "bun"), (":(", "rau")], &[], &[], &[]);
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("serviciu :)"), vec!["serviciu", "bun"]);
    assert_eq!(n.normalize("serviciu :("), vec!["serviciu", "rau"]);
}

#[test]
fn unknown_emoji_is_dropped_with_punctuation() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("serviciu :/"), vec!["serviciu"]);
}

// ============================================================
// Token classification: markers, mentions, stop-words, negation
// ============================================================

#[test]
fn city_and_company_mentions_are_scrubbed() {
    let lex = lexicon(&[], &[], &[], &["cluj"], &["petrom"], &[]);
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("Petrom creste in Cluj"), vec!["creste", "in"]);
}

#[test]
fn stop_words_are_dropped_at_the_end() {
    let lex = lexicon(&["la", "de"], &[], &[], &[], &[], &[]);
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("merg la munte de azi"), vec!["merg", "munte", "azi"]);
}

#[test]
fn negation_always_survives() {
    let lex = lexicon(&["nu", "la"], &[], &[], &[], &[], &[]);
    let n = Normalizer::new(&lex, true).unwrap();
    let tokens = n.normalize("nu merg la munte");
    assert_eq!(tokens.first().map(String::as_str), Some("nu"));
    assert!(!tokens.contains(&"la".to_string()));
}

#[test]
fn markers_are_never_stemmed() {
    let lex = lexicon(&[], &[], &[(":)", "bun")], &[], &[], &[]);
    let n = Normalizer::new(&lex, true).unwrap();
    let tokens = n.normalize("serviciu :)");
    assert!(tokens.contains(&"bun".to_string()));
}

#[test]
fn multi_vowel_word_round_trips_through_the_pipeline() {
    // "copiii" contains adjacent repeats, but the lexicon vouches for it
    let lex = lexicon(&[], &[], &[], &[], &[], &["copiii", "aleea"]);
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("copiii pe aleea"), vec!["copiii", "pe", "aleea"]);
}

// ============================================================
// Stemming
// ============================================================

#[test]
fn stemmed_tokens_are_prefixes_of_their_words() {
    let lex = empty();
    let n = Normalizer::new(&lex, true).unwrap();
    for (word, token) in ["lucrurile", "frumoasa", "politica"]
        .iter()
        .flat_map(|w| n.normalize(w).into_iter().map(move |t| (*w, t)))
    {
        assert!(!token.is_empty());
        assert!(
            word.starts_with(&token),
            "stem {token:?} is not a prefix of {word:?}"
        );
    }
}

#[test]
fn stemming_off_lowercases_verbatim() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(n.normalize("Lucrurile Frumoase"), vec!["lucrurile", "frumoase"]);
}

// ============================================================
// Ordering
// ============================================================

#[test]
fn token_order_follows_the_text() {
    let lex = empty();
    let n = Normalizer::new(&lex, false).unwrap();
    assert_eq!(
        n.normalize("unu doi trei doi unu"),
        vec!["unu", "doi", "trei", "doi", "unu"]
    );
}
