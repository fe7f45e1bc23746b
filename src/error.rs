// WHY: Typed error surface for the analysis engine; only input validity,
// configuration validity, and lexicon loading surface as errors. Everything
// else degrades to a smaller-but-valid report.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Non-text data reached the tokenizer boundary.
    #[error("input is not analyzable text: {0}")]
    InvalidInput(String),

    /// Threshold or flag values out of valid range.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Lexicon word-list file could not be read.
    #[error("failed to read lexicon file: {0}")]
    LexiconIo(#[from] std::io::Error),

    /// Lexicon word-list file could not be parsed.
    #[error("failed to parse lexicon file: {0}")]
    LexiconParse(#[from] toml::de::Error),

    /// Weak-phrase patterns from the lexicon failed to compile.
    #[error("failed to compile weak-phrase patterns: {0}")]
    LexiconPattern(String),
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
