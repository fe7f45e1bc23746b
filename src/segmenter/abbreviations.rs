// WHY: Abbreviation handling for sentence boundary detection. A period after a
// known abbreviation must not split the sentence, even when followed by whitespace.

use std::collections::HashSet;

/// Abbreviations recognized when no custom set is supplied.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "Sr.", "Jr.", "St.",
    "etc.", "vs.", "e.g.", "i.e.", "a.m.", "p.m.", "U.S.", "U.K.",
];

/// Case-insensitive abbreviation lookup with O(1) membership checks.
pub struct AbbreviationChecker {
    entries: HashSet<String>,
}

impl AbbreviationChecker {
    /// Checker over the default abbreviation set.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_ABBREVIATIONS.iter().copied())
    }

    /// Checker over a caller-supplied abbreviation set.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Check whether a sentence-final chunk (last word plus its punctuation) is
    /// a known abbreviation. Surrounding quotes are stripped before lookup so
    /// quoted abbreviations behave like bare ones.
    pub fn is_abbreviation(&self, chunk: &str) -> bool {
        let clean = chunk.trim_matches(|c: char| {
            matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}')
        });
        !clean.is_empty() && self.entries.contains(&clean.to_lowercase())
    }
}

impl Default for AbbreviationChecker {
    fn default() -> Self {
        Self::new()
    }
}
