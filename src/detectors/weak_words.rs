// WHY: Weak filler comes in two shapes: single words ("very") matched per
// token, and multi-word phrases ("kind of") matched over the sentence text
// with the lexicon's compiled phrase automaton.

use crate::lexicon::Lexicon;
use crate::report::{Category, Finding, Severity, TextSpan};
use crate::segmenter::Sentence;

use super::Detector;

pub struct WeakWordDetector<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> WeakWordDetector<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Self {
        Self { lexicon }
    }
}

impl Detector for WeakWordDetector<'_> {
    fn detect(&self, sentences: &[Sentence<'_>]) -> Vec<Finding> {
        let mut findings = Vec::new();

        for sentence in sentences {
            let mut sentence_findings = Vec::new();

            for word in sentence.words() {
                if self.lexicon.is_weak(word.text) {
                    sentence_findings.push(Finding::new(
                        Category::WeakWord,
                        word.span,
                        format!("Remove \"{}\" or replace with stronger wording", word.text),
                        Severity::Info,
                    ));
                }
            }

            // phrase matches come back as byte ranges into the sentence slice;
            // convert to character offsets in the document
            for (range, phrase) in self.lexicon.weak_phrase_matches(sentence.text) {
                let start =
                    sentence.span.start + sentence.text[..range.start].chars().count();
                let len = sentence.text[range.clone()].chars().count();
                sentence_findings.push(Finding::new(
                    Category::WeakWord,
                    TextSpan::new(start, start + len),
                    format!("Filler phrase \"{phrase}\". Consider cutting it"),
                    Severity::Info,
                ));
            }

            // document order within the sentence regardless of which pass
            // produced the finding
            sentence_findings.sort_by_key(|f| (f.span.start, f.span.end));
            findings.extend(sentence_findings);
        }

        findings
    }
}
