//! Korean numeral resolution.
//!
//! Maps a text fragment captured by a quantity pattern to a positive integer.
//! Two sources are tried in order: a direct decimal-digit parse, then a
//! whole-token lookup in the numeral-word table.  Anything else resolves to
//! `None`; the caller (the extractor) treats that as "assume quantity 1",
//! because quantity words are frequently dropped or mis-transcribed in
//! natural speech.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Built-in numeral-word table
// ---------------------------------------------------------------------------

/// Korean numeral words → value.
///
/// Covers native atoms (한/하나 … 열), Sino-Korean atoms (일 … 십) and the
/// compound tens (스물 … 쉰).  "않아" and "아나" are frequent ASR
/// mis-hearings of "하나" observed in production transcripts.  Counter words
/// are captured separately by the quantity patterns, so forms like "세 개"
/// never reach this table; "세" always means 3 here.
static NUMERAL_WORDS: &[(&str, u32)] = &[
    ("한", 1),
    ("하나", 1),
    ("않아", 1),
    ("아나", 1),
    ("일", 1),
    ("두", 2),
    ("둘", 2),
    ("이", 2),
    ("세", 3),
    ("셋", 3),
    ("서", 3),
    ("삼", 3),
    ("네", 4),
    ("넷", 4),
    ("사", 4),
    ("다섯", 5),
    ("오", 5),
    ("여섯", 6),
    ("육", 6),
    ("일곱", 7),
    ("칠", 7),
    ("여덟", 8),
    ("팔", 8),
    ("아홉", 9),
    ("구", 9),
    ("열", 10),
    ("십", 10),
    ("스물", 20),
    ("스무", 20),
    ("이십", 20),
    ("서른", 30),
    ("삼십", 30),
    ("마흔", 40),
    ("사십", 40),
    ("쉰", 50),
    ("오십", 50),
];

// ---------------------------------------------------------------------------
// NumeralResolver
// ---------------------------------------------------------------------------

/// Resolves Korean numeral words and digit strings to positive integers.
///
/// # Example
/// ```rust
/// use voice_order::order::NumeralResolver;
///
/// let resolver = NumeralResolver::default();
/// assert_eq!(resolver.resolve("다섯"), Some(5));
/// assert_eq!(resolver.resolve("12"), Some(12));
/// assert_eq!(resolver.resolve("좋네요"), None);
/// ```
#[derive(Debug, Clone)]
pub struct NumeralResolver {
    words: HashMap<String, u32>,
}

impl NumeralResolver {
    /// Build a resolver with a substitute word table (e.g. for a different
    /// dialect or language).  Entries with a zero value are dropped so the
    /// positive-quantity guarantee holds by construction.
    pub fn with_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let words = entries.into_iter().filter(|&(_, n)| n > 0).collect();
        Self { words }
    }

    /// Resolve a trimmed text fragment to a positive integer.
    ///
    /// Resolution order:
    /// 1. all-decimal-digit fragment → integer parse (zero and overflow
    ///    rejected);
    /// 2. whole-fragment lookup in the numeral-word table;
    /// 3. otherwise `None`.
    pub fn resolve(&self, token: &str) -> Option<u32> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        if token.chars().all(|c| c.is_ascii_digit()) {
            return token.parse::<u32>().ok().filter(|&n| n > 0);
        }

        self.words.get(token).copied()
    }
}

impl Default for NumeralResolver {
    fn default() -> Self {
        Self::with_entries(
            NUMERAL_WORDS
                .iter()
                .map(|&(word, n)| (word.to_string(), n)),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_native_atoms() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve("한"), Some(1));
        assert_eq!(r.resolve("하나"), Some(1));
        assert_eq!(r.resolve("두"), Some(2));
        assert_eq!(r.resolve("둘"), Some(2));
        assert_eq!(r.resolve("셋"), Some(3));
        assert_eq!(r.resolve("다섯"), Some(5));
        assert_eq!(r.resolve("아홉"), Some(9));
        assert_eq!(r.resolve("열"), Some(10));
    }

    #[test]
    fn resolves_sino_korean_atoms() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve("일"), Some(1));
        assert_eq!(r.resolve("이"), Some(2));
        assert_eq!(r.resolve("삼"), Some(3));
        assert_eq!(r.resolve("십"), Some(10));
    }

    #[test]
    fn resolves_compound_tens() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve("스물"), Some(20));
        assert_eq!(r.resolve("스무"), Some(20));
        assert_eq!(r.resolve("서른"), Some(30));
        assert_eq!(r.resolve("마흔"), Some(40));
        assert_eq!(r.resolve("쉰"), Some(50));
    }

    #[test]
    fn resolves_asr_mishearings_of_hana() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve("않아"), Some(1));
        assert_eq!(r.resolve("아나"), Some(1));
    }

    #[test]
    fn se_canonically_means_three() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve("세"), Some(3));
        assert_eq!(r.resolve("서"), Some(3));
    }

    #[test]
    fn resolves_digit_strings() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve("1"), Some(1));
        assert_eq!(r.resolve("5"), Some(5));
        assert_eq!(r.resolve("12"), Some(12));
        assert_eq!(r.resolve("100"), Some(100));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve(" 셋 "), Some(3));
        assert_eq!(r.resolve("  7"), Some(7));
    }

    #[test]
    fn rejects_zero_and_overflow() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve("0"), None);
        assert_eq!(r.resolve("00"), None);
        assert_eq!(r.resolve("99999999999999999999"), None);
    }

    #[test]
    fn rejects_mixed_and_unknown_tokens() {
        let r = NumeralResolver::default();
        assert_eq!(r.resolve(""), None);
        assert_eq!(r.resolve("2개"), None);
        assert_eq!(r.resolve("좋네요"), None);
        assert_eq!(r.resolve("-3"), None);
        assert_eq!(r.resolve("three"), None);
    }

    #[test]
    fn with_entries_replaces_table() {
        let r = NumeralResolver::with_entries(vec![("몇".to_string(), 3)]);
        assert_eq!(r.resolve("몇"), Some(3));
        assert_eq!(r.resolve("하나"), None);
        // Digit parsing is independent of the table.
        assert_eq!(r.resolve("4"), Some(4));
    }

    #[test]
    fn with_entries_drops_zero_values() {
        let r = NumeralResolver::with_entries(vec![("영".to_string(), 0)]);
        assert_eq!(r.resolve("영"), None);
    }
}
