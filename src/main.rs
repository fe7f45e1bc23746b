use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

use prosecheck::readability::difficulty_band;
use prosecheck::{analyzer, lexicon, AnalyzerConfig, Lexicon, Report, Severity};

#[derive(Parser, Debug)]
#[command(name = "prosecheck")]
#[command(about = "Writing-quality analyzer: passive voice, weak words, jargon, readability")]
#[command(version)]
struct Args {
    /// Text file to analyze, or "-" for stdin
    input: PathBuf,

    /// Analyzer configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replacement word-list file (TOML) instead of the built-in lexicon
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Disable the passive-voice detector
    #[arg(long)]
    no_passive: bool,

    /// Disable the weak-word detector
    #[arg(long)]
    no_weak_words: bool,

    /// Disable the long-sentence detector
    #[arg(long)]
    no_long_sentences: bool,

    /// Disable the jargon detector
    #[arg(long)]
    no_jargon: bool,

    /// Word count above which a sentence is flagged
    #[arg(long)]
    long_sentence_threshold: Option<usize>,

    /// Syllable count above which a word is flagged as jargon
    #[arg(long)]
    jargon_syllable_threshold: Option<usize>,

    /// Emit the full report as JSON instead of the human summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // WHY: structured JSON logging on stderr keeps stdout clean for the report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let text = read_input(&args.input)?;
    let config = build_config(&args)?;

    if let Some(path) = &args.lexicon {
        let replacement = Lexicon::from_path(path)
            .with_context(|| format!("loading lexicon from {}", path.display()))?;
        if !lexicon::init(replacement) {
            anyhow::bail!("lexicon already initialized; --lexicon must be applied first");
        }
        info!("Installed replacement lexicon from {}", path.display());
    }

    let report = analyzer::analyze(&text, &config)?;
    info!(findings = report.findings.len(), "Analysis complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_human(&text, &report);
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> Result<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        // WHY: validate existence early to fail fast with a clear error
        if !path.exists() {
            anyhow::bail!("Input file does not exist: {}", path.display());
        }
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?
    };

    // UTF-8 is validated at this boundary; binary files never reach the engine
    String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("input is not valid UTF-8 text: {}", path.display()))
}

fn build_config(args: &Args) -> Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => AnalyzerConfig::default(),
    };

    if args.no_passive {
        config.enable_passive_voice = false;
    }
    if args.no_weak_words {
        config.enable_weak_words = false;
    }
    if args.no_long_sentences {
        config.enable_long_sentence = false;
    }
    if args.no_jargon {
        config.enable_jargon = false;
    }
    if let Some(t) = args.long_sentence_threshold {
        config.long_sentence_threshold = t;
    }
    if let Some(t) = args.jargon_syllable_threshold {
        config.jargon_syllable_threshold = t;
    }

    Ok(config)
}

fn print_human(text: &str, report: &Report) {
    for finding in &report.findings {
        let sev = match finding.severity {
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        println!(
            "{sev}[{}] {}..{}: \"{}\" - {}",
            finding.category.label(),
            finding.span.start,
            finding.span.end,
            finding.span.slice(text),
            finding.message
        );
    }

    let score = &report.score;
    println!();
    println!("Readability");
    println!("-----------");
    if score.word_count == 0 {
        println!("No text to analyze");
        return;
    }
    println!(
        "Difficulty: {} (grade {:.1})",
        difficulty_band(score.flesch_kincaid_grade),
        score.flesch_kincaid_grade
    );
    println!("Flesch Reading Ease: {:.1}/100", score.flesch_reading_ease);
    println!(
        "Words: {} | Sentences: {} | Syllables: {}",
        score.word_count, score.sentence_count, score.syllable_count
    );
    println!("Avg sentence length: {:.1} words", score.avg_sentence_length);
    println!(
        "Flesch-Kincaid grade: {:.1} | Gunning fog: {:.1}",
        score.flesch_kincaid_grade, score.gunning_fog
    );
}
