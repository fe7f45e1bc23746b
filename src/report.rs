// WHY: Shared value types for analysis output, kept serializable so the CLI can
// emit reports as JSON alongside the human-readable summary

use serde::Serialize;

/// Half-open character range into the analyzed text.
///
/// Offsets are character-based (not bytes) so the editor UI can map them onto
/// its own cursor positions without decoding UTF-8 itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    /// Create a span. Spans are always non-empty: start < end.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "TextSpan must be non-empty: {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Slice the original text by this character span.
    /// WHY: spans are char-based, so byte offsets must be recovered by walking
    /// char boundaries; single pass, proportional to span end
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        let mut byte_start = text.len();
        let mut byte_end = text.len();
        for (chars_seen, (byte_pos, _)) in text.char_indices().enumerate() {
            if chars_seen == self.start {
                byte_start = byte_pos;
            }
            if chars_seen == self.end {
                byte_end = byte_pos;
                break;
            }
        }
        &text[byte_start..byte_end]
    }
}

/// Category of a flagged writing issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Spelling,
    PassiveVoice,
    Jargon,
    LongSentence,
    WeakWord,
}

impl Category {
    /// Merge priority: lower sorts first in the report.
    pub fn priority(self) -> u8 {
        match self {
            Category::Spelling => 0,
            Category::PassiveVoice => 1,
            Category::Jargon => 2,
            Category::LongSentence => 3,
            Category::WeakWord => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Spelling => "spelling",
            Category::PassiveVoice => "passive-voice",
            Category::Jargon => "jargon",
            Category::LongSentence => "long-sentence",
            Category::WeakWord => "weak-word",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Info,
    Warning,
}

/// A single flagged issue: where it is, what kind, and what to tell the writer.
/// Immutable once produced; the editor owns display lifetime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub category: Category,
    pub span: TextSpan,
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    pub fn new(category: Category, span: TextSpan, message: String, severity: Severity) -> Self {
        Self {
            category,
            span,
            message,
            severity,
        }
    }
}

/// Readability metrics over the whole document.
///
/// All-zero when there is no analyzable text; that is a valid, uninteresting
/// input, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ReadabilityScore {
    pub flesch_kincaid_grade: f64,
    pub flesch_reading_ease: f64,
    pub gunning_fog: f64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub avg_sentence_length: f64,
}

/// Result of one analysis pass: findings in merge order plus one score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub score: ReadabilityScore,
}
