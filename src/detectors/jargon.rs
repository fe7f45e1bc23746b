// WHY: Two jargon signals share one category: words the lexicon names (each
// with a plainer alternative for the message) and words whose syllable count
// alone marks them as heavy, minus everyday polysyllables like "everybody".

use crate::lexicon::Lexicon;
use crate::readability::count_syllables;
use crate::report::{Category, Finding, Severity};
use crate::segmenter::Sentence;

use super::Detector;

pub const DEFAULT_JARGON_SYLLABLE_THRESHOLD: usize = 4;

pub struct JargonDetector<'l> {
    lexicon: &'l Lexicon,
    syllable_threshold: usize,
}

impl<'l> JargonDetector<'l> {
    /// Flag lexicon jargon hits, plus any word with strictly more than
    /// `syllable_threshold` syllables that is not a common-word exception.
    pub fn new(lexicon: &'l Lexicon, syllable_threshold: usize) -> Self {
        Self {
            lexicon,
            syllable_threshold,
        }
    }
}

impl Detector for JargonDetector<'_> {
    fn detect(&self, sentences: &[Sentence<'_>]) -> Vec<Finding> {
        let mut findings = Vec::new();

        for sentence in sentences {
            for word in sentence.words() {
                if let Some(alternative) = self.lexicon.jargon_alternative(word.text) {
                    findings.push(Finding::new(
                        Category::Jargon,
                        word.span,
                        format!("Use \"{alternative}\" instead of \"{}\"", word.text),
                        Severity::Warning,
                    ));
                    continue;
                }

                let syllables = count_syllables(word.text);
                if syllables > self.syllable_threshold
                    && !self.lexicon.is_common_exception(word.text)
                {
                    findings.push(Finding::new(
                        Category::Jargon,
                        word.span,
                        format!(
                            "\"{}\" has {syllables} syllables. Consider a simpler word",
                            word.text
                        ),
                        Severity::Warning,
                    ));
                }
            }
        }

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::Segmenter;

    fn detect(text: &str) -> Vec<Finding> {
        let lexicon = Lexicon::builtin().unwrap();
        let seg = Segmenter::from_lexicon(&lexicon);
        let sentences = seg.segment(text);
        JargonDetector::new(&lexicon, DEFAULT_JARGON_SYLLABLE_THRESHOLD).detect(&sentences)
    }

    #[test]
    fn flags_lexicon_jargon_with_alternative() {
        let text = "We should utilize the new tool.";
        let findings = detect(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].category, Category::Jargon);
        assert_eq!(findings[0].span.slice(text), "utilize");
        assert!(findings[0].message.contains("\"use\""));
    }

    #[test]
    fn flags_heavy_polysyllables() {
        // "incomprehensibility": in-com-pre-hen-si-bi-li-ty, well over four
        let text = "Such incomprehensibility hurts.";
        let findings = detect(text);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].span.slice(text), "incomprehensibility");
        assert!(findings[0].message.contains("syllables"));
    }

    #[test]
    fn common_exceptions_are_spared() {
        // "everybody" clears the syllable bar but sits on the exception list
        assert!(detect("Tell everybody the plan.").is_empty());
    }

    #[test]
    fn threshold_is_exclusive() {
        let lexicon = Lexicon::builtin().unwrap();
        let seg = Segmenter::from_lexicon(&lexicon);
        // "competition" is exactly four syllables
        let sentences = seg.segment("The competition starts today.");
        assert!(JargonDetector::new(&lexicon, 4).detect(&sentences).is_empty());
        assert_eq!(JargonDetector::new(&lexicon, 3).detect(&sentences).len(), 1);
    }

    #[test]
    fn plain_text_yields_nothing() {
        assert!(detect("The dog ran home fast.").is_empty());
    }
}
