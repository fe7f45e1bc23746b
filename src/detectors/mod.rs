// WHY: Each writing rule is an independent pure function over the shared
// segmentation, behind one trait so the coordinator can run a fixed registry
// of enabled detectors without caring which rule is which.

pub mod jargon;
pub mod long_sentence;
pub mod passive;
pub mod weak_words;

pub use jargon::JargonDetector;
pub use long_sentence::LongSentenceDetector;
pub use passive::PassiveVoiceDetector;
pub use weak_words::WeakWordDetector;

use crate::report::Finding;
use crate::segmenter::Sentence;

/// A writing-rule detector: pure, deterministic, findings in document order.
///
/// Detectors may overlap (a weak word inside a long sentence is two findings);
/// only exact same-category same-span duplicates are removed later.
pub trait Detector {
    /// Scan segmented text and return findings for this rule.
    fn detect(&self, sentences: &[Sentence<'_>]) -> Vec<Finding>;
}
