// WHY: Centralized word-list store for all detectors. Lists are opaque data
// loaded once at startup and read-only afterwards, so detectors can share one
// process-wide instance without any locking.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use regex_automata::meta::Regex;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::{AnalyzeError, Result};

/// Built-in default word lists, embedded so the engine works with no files on disk.
const DEFAULT_LEXICON_TOML: &str = include_str!("../data/default_lexicon.toml");

/// On-disk shape of a lexicon file. Every list is optional; an absent list is empty.
#[derive(Debug, Default, Deserialize)]
struct LexiconLists {
    #[serde(default)]
    weak_words: Vec<String>,
    #[serde(default)]
    weak_phrases: Vec<String>,
    #[serde(default)]
    jargon: HashMap<String, String>,
    #[serde(default)]
    passive_auxiliaries: Vec<String>,
    #[serde(default)]
    irregular_participles: Vec<String>,
    #[serde(default)]
    common_exceptions: Vec<String>,
    #[serde(default)]
    abbreviations: Vec<String>,
}

/// Read-only membership and category lookups over the loaded word lists.
///
/// Lookups are case-insensitive and never fail: an unknown word is simply not
/// a member of any category.
pub struct Lexicon {
    weak_words: HashSet<String>,
    weak_phrases: Vec<String>,
    // Compiled alternation over weak_phrases; None when the list is empty.
    phrase_matcher: Option<Regex>,
    jargon: HashMap<String, String>,
    passive_auxiliaries: HashSet<String>,
    irregular_participles: HashSet<String>,
    common_exceptions: HashSet<String>,
    abbreviations: Vec<String>,
}

impl Lexicon {
    /// Load the embedded default lists.
    pub fn builtin() -> Result<Self> {
        let lists: LexiconLists = toml::from_str(DEFAULT_LEXICON_TOML)?;
        Self::from_lists(lists)
    }

    /// Load replacement lists from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let lists: LexiconLists = toml::from_str(&raw)?;
        debug!("Loaded lexicon from {}", path.display());
        Self::from_lists(lists)
    }

    /// An empty lexicon: every lookup returns false.
    pub fn empty() -> Self {
        Self {
            weak_words: HashSet::new(),
            weak_phrases: Vec::new(),
            phrase_matcher: None,
            jargon: HashMap::new(),
            passive_auxiliaries: HashSet::new(),
            irregular_participles: HashSet::new(),
            common_exceptions: HashSet::new(),
            abbreviations: Vec::new(),
        }
    }

    fn from_lists(lists: LexiconLists) -> Result<Self> {
        let lower_set = |words: Vec<String>| -> HashSet<String> {
            words.into_iter().map(|w| w.to_lowercase()).collect()
        };

        let weak_phrases: Vec<String> =
            lists.weak_phrases.into_iter().map(|p| p.to_lowercase()).collect();

        // WHY: one multi-pattern automaton over all phrases keeps phrase
        // detection a single pass per sentence, mirroring how sentence
        // boundary patterns are matched elsewhere in this crate's lineage
        let phrase_matcher = if weak_phrases.is_empty() {
            None
        } else {
            let patterns: Vec<String> = weak_phrases
                .iter()
                .map(|p| format!(r"(?i)\b{}\b", escape_literal(p)))
                .collect();
            let refs: Vec<&str> = patterns.iter().map(String::as_str).collect();
            Some(
                Regex::new_many(&refs)
                    .map_err(|e| AnalyzeError::LexiconPattern(e.to_string()))?,
            )
        };

        Ok(Self {
            weak_words: lower_set(lists.weak_words),
            weak_phrases,
            phrase_matcher,
            jargon: lists
                .jargon
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
            passive_auxiliaries: lower_set(lists.passive_auxiliaries),
            irregular_participles: lower_set(lists.irregular_participles),
            common_exceptions: lower_set(lists.common_exceptions),
            abbreviations: lists.abbreviations,
        })
    }

    pub fn is_weak(&self, word: &str) -> bool {
        self.weak_words.contains(&word.to_lowercase())
    }

    pub fn is_jargon(&self, word: &str) -> bool {
        self.jargon.contains_key(&word.to_lowercase())
    }

    /// The plainer alternative recorded for a jargon word, for message text.
    pub fn jargon_alternative(&self, word: &str) -> Option<&str> {
        self.jargon.get(&word.to_lowercase()).map(String::as_str)
    }

    pub fn is_passive_auxiliary(&self, word: &str) -> bool {
        self.passive_auxiliaries.contains(&word.to_lowercase())
    }

    pub fn is_irregular_participle(&self, word: &str) -> bool {
        self.irregular_participles.contains(&word.to_lowercase())
    }

    /// Everyday words exempt from the syllable-count jargon rule.
    pub fn is_common_exception(&self, word: &str) -> bool {
        self.common_exceptions.contains(&word.to_lowercase())
    }

    /// Abbreviation surface forms handed to the segmenter.
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    /// Find weak multi-word phrases in `text`.
    /// Returns byte ranges into `text` paired with the canonical phrase.
    pub fn weak_phrase_matches<'l>(&'l self, text: &str) -> Vec<(std::ops::Range<usize>, &'l str)> {
        let Some(matcher) = &self.phrase_matcher else {
            return Vec::new();
        };
        matcher
            .find_iter(text)
            .map(|m| {
                let phrase = self.weak_phrases[m.pattern().as_usize()].as_str();
                (m.start()..m.end(), phrase)
            })
            .collect()
    }
}

/// Escape a phrase for literal use inside a pattern.
fn escape_literal(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len() + 4);
    for ch in phrase.chars() {
        if ch.is_ascii_punctuation() {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

static GLOBAL: OnceLock<Lexicon> = OnceLock::new();

/// Install a lexicon as the process-wide store.
/// Returns false if a lexicon was already installed; the first install wins.
pub fn init(lexicon: Lexicon) -> bool {
    GLOBAL.set(lexicon).is_ok()
}

/// The process-wide lexicon, installing the built-in defaults on first use.
pub fn global() -> &'static Lexicon {
    GLOBAL.get_or_init(|| {
        Lexicon::builtin().unwrap_or_else(|e| {
            // Embedded defaults are validated by tests; reaching this means a
            // corrupted build. Degrade to an empty lexicon rather than abort.
            error!("built-in lexicon failed to load: {e}");
            Lexicon::empty()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_load() {
        let lex = Lexicon::builtin().expect("embedded lexicon must parse");
        assert!(lex.is_weak("very"));
        assert!(lex.is_weak("Basically"));
        assert!(lex.is_jargon("utilize"));
        assert_eq!(lex.jargon_alternative("Utilize"), Some("use"));
        assert!(lex.is_passive_auxiliary("was"));
        assert!(lex.is_passive_auxiliary("BEING"));
        assert!(lex.is_irregular_participle("thrown"));
        assert!(lex.is_common_exception("everybody"));
        assert!(!lex.abbreviations().is_empty());
    }

    #[test]
    fn unknown_words_are_no_category() {
        let lex = Lexicon::builtin().unwrap();
        assert!(!lex.is_weak("zebra"));
        assert!(!lex.is_jargon("zebra"));
        assert!(!lex.is_passive_auxiliary("zebra"));
        assert!(!lex.is_irregular_participle("zebra"));
    }

    #[test]
    fn phrase_matches_report_byte_ranges() {
        let lex = Lexicon::builtin().unwrap();
        let text = "This is kind of slow, sort of.";
        let hits = lex.weak_phrase_matches(text);
        assert_eq!(hits.len(), 2);
        assert_eq!(&text[hits[0].0.clone()], "kind of");
        assert_eq!(hits[0].1, "kind of");
        assert_eq!(&text[hits[1].0.clone()], "sort of");
    }

    #[test]
    fn phrase_matching_is_case_insensitive_and_word_bounded() {
        let lex = Lexicon::builtin().unwrap();
        assert_eq!(lex.weak_phrase_matches("Kind Of odd").len(), 1);
        // "mankind of" must not match "kind of" mid-word
        assert!(lex.weak_phrase_matches("mankind offered").is_empty());
    }

    #[test]
    fn custom_lists_replace_defaults() {
        let lists = LexiconLists {
            weak_words: vec!["splendid".into()],
            ..Default::default()
        };
        let lex = Lexicon::from_lists(lists).unwrap();
        assert!(lex.is_weak("splendid"));
        assert!(!lex.is_weak("very"));
        assert!(lex.weak_phrase_matches("kind of").is_empty());
    }

    #[test]
    fn empty_lexicon_rejects_everything() {
        let lex = Lexicon::empty();
        assert!(!lex.is_weak("very"));
        assert!(lex.weak_phrase_matches("kind of").is_empty());
    }
}
