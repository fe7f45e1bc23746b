pub mod analyzer;
pub mod detectors;
pub mod error;
pub mod lexicon;
pub mod readability;
pub mod report;
pub mod segmenter;
pub mod spell;

// Re-export the main entry points for convenient access
pub use analyzer::{analyze, Analyzer, AnalyzerConfig};
pub use error::AnalyzeError;
pub use lexicon::Lexicon;
pub use report::{Category, Finding, ReadabilityScore, Report, Severity, TextSpan};
pub use segmenter::{Segmenter, Sentence, Token, TokenKind};
pub use spell::SpellProvider;
