// WHY: Passive voice shows up as auxiliary + past participle, possibly with an
// adverb in between ("was quickly thrown"). A small lookahead window over word
// tokens catches that without any real part-of-speech tagging.

use crate::lexicon::Lexicon;
use crate::report::{Category, Finding, Severity, TextSpan};
use crate::segmenter::{Sentence, Token};

use super::Detector;

/// Word tokens examined after an auxiliary before giving up. Two tolerates a
/// single intervening adverb.
const PARTICIPLE_WINDOW: usize = 2;

pub struct PassiveVoiceDetector<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> PassiveVoiceDetector<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }

    /// Heuristic participle shape: "-ed" suffix or a known irregular form.
    fn is_participle_shaped(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        lower.ends_with("ed") || self.lexicon.is_irregular_participle(&lower)
    }
}

impl Detector for PassiveVoiceDetector<'_> {
    fn detect(&self, sentences: &[Sentence<'_>]) -> Vec<Finding> {
        let mut findings = Vec::new();

        for sentence in sentences {
            let words: Vec<&Token<'_>> = sentence.words().collect();
            let mut i = 0;
            while i < words.len() {
                let aux = words[i];
                if !self.lexicon.is_passive_auxiliary(aux.text) {
                    i += 1;
                    continue;
                }

                let window_end = (i + 1 + PARTICIPLE_WINDOW).min(words.len());
                let hit = (i + 1..window_end)
                    .find(|&j| self.is_participle_shaped(words[j].text));

                match hit {
                    Some(j) => {
                        findings.push(Finding::new(
                            Category::PassiveVoice,
                            TextSpan::new(aux.span.start, words[j].span.end),
                            "Consider using active voice instead".to_string(),
                            Severity::Warning,
                        ));
                        // resume past the participle so one construction
                        // yields one finding
                        i = j + 1;
                    }
                    // auxiliary with no participle in the window: not passive
                    None => i += 1,
                }
            }
        }

        findings
    }
}
