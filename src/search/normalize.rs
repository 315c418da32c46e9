//! Name normalization for accent-insensitive matching.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Lowercase, decompose (NFD) and strip combining diacritics.
///
/// "Élodie" and "elodie" normalize to the same string. Surrounding whitespace
/// is kept; callers decide whether a blank query is meaningful.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Élodie", "elodie")]
    #[case("CHLOÉ", "chloe")]
    #[case("Noël", "noel")]
    #[case("françois", "francois")]
    #[case("Anaïs", "anais")]
    #[case("jean-rené", "jean-rene")]
    #[case("", "")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        check!(normalize(input) == expected);
    }

    #[rstest]
    #[case("Élodie")]
    #[case("Zoë")]
    #[case("日本")]
    #[case("🦀")]
    fn test_normalize_is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        check!(normalize(&once) == once);
    }

    #[test]
    fn test_precomposed_and_decomposed_match() {
        check!(normalize("e\u{0301}lodie") == normalize("\u{00e9}lodie"));
    }
}
