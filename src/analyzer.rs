// WHY: One entry point for the editor: validate config, segment exactly once,
// run every enabled detector plus the scorer over that shared segmentation,
// and merge everything into a single ordered report. Detectors never
// re-tokenize, so every span in the report is consistent.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::detectors::{
    Detector, JargonDetector, LongSentenceDetector, PassiveVoiceDetector, WeakWordDetector,
};
use crate::detectors::jargon::DEFAULT_JARGON_SYLLABLE_THRESHOLD;
use crate::detectors::long_sentence::DEFAULT_LONG_SENTENCE_THRESHOLD;
use crate::error::{AnalyzeError, Result};
use crate::lexicon::{self, Lexicon};
use crate::report::{Finding, Report};
use crate::segmenter::{Segmenter, Token, TokenKind};
use crate::spell::SpellProvider;
use crate::readability;

/// Per-analysis configuration. Deserializable so the host can keep it in a
/// settings file; absent fields take their defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub enable_passive_voice: bool,
    pub enable_weak_words: bool,
    pub enable_long_sentence: bool,
    pub enable_jargon: bool,
    pub long_sentence_threshold: usize,
    pub jargon_syllable_threshold: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            enable_passive_voice: true,
            enable_weak_words: true,
            enable_long_sentence: true,
            enable_jargon: true,
            long_sentence_threshold: DEFAULT_LONG_SENTENCE_THRESHOLD,
            jargon_syllable_threshold: DEFAULT_JARGON_SYLLABLE_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    /// Reject out-of-range thresholds before any analysis runs.
    pub fn validate(&self) -> Result<()> {
        if self.long_sentence_threshold == 0 {
            return Err(AnalyzeError::Configuration(
                "long_sentence_threshold must be at least 1".to_string(),
            ));
        }
        if self.jargon_syllable_threshold == 0 {
            return Err(AnalyzeError::Configuration(
                "jargon_syllable_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Analysis coordinator. Stateless between calls; holds only the validated
/// config, the lexicon reference, and an optional spell provider.
pub struct Analyzer<'l> {
    config: AnalyzerConfig,
    lexicon: &'l Lexicon,
    segmenter: Segmenter,
    spell: Option<Box<dyn SpellProvider + 'l>>,
}

impl Analyzer<'static> {
    /// Coordinator over the process-wide lexicon.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Self::with_lexicon(config, lexicon::global())
    }
}

impl<'l> Analyzer<'l> {
    /// Coordinator over an explicit lexicon instance.
    pub fn with_lexicon(config: AnalyzerConfig, lexicon: &'l Lexicon) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            lexicon,
            segmenter: Segmenter::from_lexicon(lexicon),
            spell: None,
        })
    }

    /// Attach a host-supplied spell-check capability.
    pub fn with_spell_provider(mut self, provider: Box<dyn SpellProvider + 'l>) -> Self {
        self.spell = Some(provider);
        self
    }

    /// Analyze one document. Segmentation runs exactly once; all detectors and
    /// the scorer share it. Never fails on well-formed text.
    pub fn analyze(&self, text: &str) -> Result<Report> {
        // Embedded NUL is the binary-data tell; everything downstream assumes
        // it is looking at prose
        if let Some(pos) = text.find('\0') {
            return Err(AnalyzeError::InvalidInput(format!(
                "embedded NUL byte at offset {pos}"
            )));
        }

        let sentences = self.segmenter.segment(text);
        debug!(
            sentences = sentences.len(),
            chars = text.chars().count(),
            "segmentation complete"
        );

        let mut findings: Vec<Finding> = Vec::new();

        if self.config.enable_passive_voice {
            findings.extend(PassiveVoiceDetector::new(self.lexicon).detect(&sentences));
        }
        if self.config.enable_weak_words {
            findings.extend(WeakWordDetector::new(self.lexicon).detect(&sentences));
        }
        if self.config.enable_long_sentence {
            findings.extend(
                LongSentenceDetector::new(self.config.long_sentence_threshold)
                    .detect(&sentences),
            );
        }
        if self.config.enable_jargon {
            findings.extend(
                JargonDetector::new(self.lexicon, self.config.jargon_syllable_threshold)
                    .detect(&sentences),
            );
        }

        if let Some(provider) = &self.spell {
            let words: Vec<Token<'_>> = sentences
                .iter()
                .flat_map(|s| s.tokens.iter())
                .filter(|t| t.kind == TokenKind::Word)
                .copied()
                .collect();
            match provider.check_spelling(&words) {
                Ok(spelling) => findings.extend(spelling),
                // adapter failure degrades to zero extra findings
                Err(e) => warn!("spell provider failed, continuing without it: {e}"),
            }
        }

        let score = readability::score(&sentences);
        Ok(Report {
            findings: merge_findings(findings),
            score,
        })
    }
}

/// Stable merge order: category priority (Spelling > PassiveVoice > Jargon >
/// LongSentence > WeakWord), then ascending span start. Exact same-category
/// same-span duplicates collapse to one.
fn merge_findings(mut findings: Vec<Finding>) -> Vec<Finding> {
    findings.sort_by(|a, b| {
        a.category
            .priority()
            .cmp(&b.category.priority())
            .then(a.span.start.cmp(&b.span.start))
            .then(a.span.end.cmp(&b.span.end))
    });
    findings.dedup_by(|a, b| a.category == b.category && a.span == b.span);
    findings
}

/// Convenience wrapper: analyze with the process-wide lexicon and no spell
/// provider.
pub fn analyze(text: &str, config: &AnalyzerConfig) -> Result<Report> {
    Analyzer::new(config.clone())?.analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Category, Severity, TextSpan};

    fn lexicon() -> Lexicon {
        Lexicon::builtin().unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_thresholds_are_rejected() {
        let config = AnalyzerConfig {
            long_sentence_threshold: 0,
            ..Default::default()
        };
        let lex = lexicon();
        assert!(matches!(
            Analyzer::with_lexicon(config, &lex),
            Err(AnalyzeError::Configuration(_))
        ));

        let config = AnalyzerConfig {
            jargon_syllable_threshold: 0,
            ..Default::default()
        };
        assert!(matches!(
            Analyzer::with_lexicon(config, &lex),
            Err(AnalyzeError::Configuration(_))
        ));
    }

    #[test]
    fn embedded_nul_is_invalid_input() {
        let lex = lexicon();
        let analyzer = Analyzer::with_lexicon(AnalyzerConfig::default(), &lex).unwrap();
        assert!(matches!(
            analyzer.analyze("binary\0data"),
            Err(AnalyzeError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_text_yields_empty_report() {
        let lex = lexicon();
        let analyzer = Analyzer::with_lexicon(AnalyzerConfig::default(), &lex).unwrap();
        let report = analyzer.analyze("").unwrap();
        assert!(report.findings.is_empty());
        assert_eq!(report.score.word_count, 0);
        assert_eq!(report.score.flesch_kincaid_grade, 0.0);
    }

    #[test]
    fn merge_orders_by_priority_then_start() {
        let findings = vec![
            Finding::new(
                Category::WeakWord,
                TextSpan::new(2, 5),
                "w".into(),
                Severity::Info,
            ),
            Finding::new(
                Category::PassiveVoice,
                TextSpan::new(10, 20),
                "p".into(),
                Severity::Warning,
            ),
            Finding::new(
                Category::Jargon,
                TextSpan::new(0, 4),
                "j".into(),
                Severity::Warning,
            ),
        ];
        let merged = merge_findings(findings);
        let categories: Vec<Category> = merged.iter().map(|f| f.category).collect();
        assert_eq!(
            categories,
            vec![Category::PassiveVoice, Category::Jargon, Category::WeakWord]
        );
    }

    #[test]
    fn merge_dedups_exact_duplicates_only() {
        let dup = Finding::new(
            Category::WeakWord,
            TextSpan::new(2, 5),
            "w".into(),
            Severity::Info,
        );
        let overlapping = Finding::new(
            Category::Jargon,
            TextSpan::new(2, 5),
            "j".into(),
            Severity::Warning,
        );
        let merged = merge_findings(vec![dup.clone(), overlapping, dup]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: AnalyzerConfig =
            toml::from_str("enable_jargon = false\nlong_sentence_threshold = 10").unwrap();
        assert!(!config.enable_jargon);
        assert_eq!(config.long_sentence_threshold, 10);
        assert!(config.enable_passive_voice);
        assert_eq!(
            config.jargon_syllable_threshold,
            DEFAULT_JARGON_SYLLABLE_THRESHOLD
        );
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        assert!(toml::from_str::<AnalyzerConfig>("enable_everything = true").is_err());
    }
}
