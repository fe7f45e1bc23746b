// WHY: Long sentences are flagged as whole-sentence spans so the editor can
// highlight the full run, not a single word.

use crate::report::{Category, Finding, Severity};
use crate::segmenter::Sentence;

use super::Detector;

pub const DEFAULT_LONG_SENTENCE_THRESHOLD: usize = 25;

pub struct LongSentenceDetector {
    threshold: usize,
}

impl LongSentenceDetector {
    /// Flag sentences with strictly more than `threshold` word tokens.
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }
}

impl Default for LongSentenceDetector {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_SENTENCE_THRESHOLD)
    }
}

impl Detector for LongSentenceDetector {
    fn detect(&self, sentences: &[Sentence<'_>]) -> Vec<Finding> {
        sentences
            .iter()
            .filter_map(|sentence| {
                let words = sentence.word_count();
                if words > self.threshold {
                    Some(Finding::new(
                        Category::LongSentence,
                        sentence.span,
                        format!("Sentence is {words} words. Consider breaking it up"),
                        Severity::Warning,
                    ))
                } else {
                    None
                }
            })
            .collect()
    }
}
