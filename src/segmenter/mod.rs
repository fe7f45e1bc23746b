// WHY: Single tokenization pass shared by every detector and the scorer.
// Tokens carry exact character spans so findings map straight onto editor
// highlights, and byte offsets internally so sentence text can be re-sliced
// without rescanning.

pub mod abbreviations;

pub use abbreviations::AbbreviationChecker;

use crate::lexicon::Lexicon;
use crate::report::TextSpan;

/// Part-of-speech-lite classification, sufficient for detector logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punctuation,
    Whitespace,
}

/// One token of the source text. Immutable once produced; borrows its surface
/// text from the analyzed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    /// Character span in the original text.
    pub span: TextSpan,
    pub(crate) byte_start: usize,
    pub(crate) byte_end: usize,
}

/// A sentence: its tokens (including interior whitespace and punctuation), the
/// character span from first to last non-whitespace token, and the raw slice
/// covering that span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub tokens: Vec<Token<'a>>,
    pub span: TextSpan,
    pub text: &'a str,
}

impl<'a> Sentence<'a> {
    /// Word tokens in document order.
    pub fn words(&self) -> impl Iterator<Item = &Token<'a>> {
        self.tokens.iter().filter(|t| t.kind == TokenKind::Word)
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

fn is_joiner(c: char) -> bool {
    // Apostrophes and hyphens stay inside words: "don't", "well-known"
    matches!(c, '\'' | '\u{2019}' | '-')
}

fn classify(c: char) -> TokenKind {
    if c.is_whitespace() {
        TokenKind::Whitespace
    } else if c.is_alphanumeric() {
        TokenKind::Word
    } else {
        TokenKind::Punctuation
    }
}

/// Split text into tokens covering every input character exactly once.
/// Concatenating token texts in order reconstructs the input.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (byte_start, first) = chars[i];
        let kind = classify(first);
        let mut j = i + 1;

        match kind {
            TokenKind::Whitespace => {
                while j < chars.len() && chars[j].1.is_whitespace() {
                    j += 1;
                }
            }
            TokenKind::Word => {
                while j < chars.len() {
                    let c = chars[j].1;
                    if c.is_alphanumeric() {
                        j += 1;
                    } else if is_joiner(c)
                        && j + 1 < chars.len()
                        && chars[j + 1].1.is_alphanumeric()
                    {
                        // internal hyphen/apostrophe: keep and continue the word
                        j += 1;
                    } else {
                        break;
                    }
                }
            }
            TokenKind::Punctuation => {
                while j < chars.len() && classify(chars[j].1) == TokenKind::Punctuation {
                    j += 1;
                }
            }
        }

        let byte_end = chars.get(j).map_or(text.len(), |(b, _)| *b);
        tokens.push(Token {
            text: &text[byte_start..byte_end],
            kind,
            span: TextSpan::new(i, j),
            byte_start,
            byte_end,
        });
        i = j;
    }

    tokens
}

/// Splits tokenized text into sentences at terminal punctuation, with
/// abbreviation-aware exceptions.
pub struct Segmenter {
    abbreviations: AbbreviationChecker,
}

impl Segmenter {
    pub fn new(abbreviations: AbbreviationChecker) -> Self {
        Self { abbreviations }
    }

    pub fn with_default_abbreviations() -> Self {
        Self::new(AbbreviationChecker::new())
    }

    /// Segmenter whose abbreviation set comes from the lexicon's word lists.
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        if lexicon.abbreviations().is_empty() {
            Self::with_default_abbreviations()
        } else {
            Self::new(AbbreviationChecker::from_words(lexicon.abbreviations()))
        }
    }

    /// Split text into sentences. Total: never fails, empty or word-free text
    /// yields an empty sequence. Every token of the input ends up in exactly
    /// one sentence, so concatenating all sentence tokens reconstructs the
    /// input exactly.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let tokens = tokenize(text);
        if !tokens.iter().any(|t| t.kind == TokenKind::Word) {
            return Vec::new();
        }

        let mut sentences: Vec<Sentence<'a>> = Vec::new();
        let mut buf: Vec<Token<'a>> = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let tok = tokens[i];
            buf.push(tok);

            if tok.kind == TokenKind::Punctuation && ends_terminal(tok.text) {
                let next_is_break =
                    tokens.get(i + 1).is_none_or(|t| t.kind == TokenKind::Whitespace);
                if next_is_break && !self.ends_with_abbreviation(&buf) {
                    // trailing whitespace run belongs to the closing sentence
                    while let Some(next) = tokens.get(i + 1) {
                        if next.kind != TokenKind::Whitespace {
                            break;
                        }
                        buf.push(*next);
                        i += 1;
                    }
                    if buf.iter().any(|t| t.kind == TokenKind::Word) {
                        sentences.push(build_sentence(text, std::mem::take(&mut buf)));
                    }
                    // word-free buffer (stray leading punctuation) stays and
                    // prefixes the next sentence
                }
            }
            i += 1;
        }

        if !buf.is_empty() {
            if buf.iter().any(|t| t.kind == TokenKind::Word) {
                sentences.push(build_sentence(text, buf));
            } else if let Some(last) = sentences.last_mut() {
                // trailing word-free tokens attach to the final sentence
                last.tokens.extend(buf);
                let rebuilt = build_sentence(text, std::mem::take(&mut last.tokens));
                *last = rebuilt;
            }
        }

        sentences
    }

    /// Reconstruct the final non-whitespace chunk of the buffer (the candidate
    /// abbreviation plus its punctuation) and look it up.
    fn ends_with_abbreviation(&self, buf: &[Token<'_>]) -> bool {
        let tail_start = buf
            .iter()
            .rposition(|t| t.kind == TokenKind::Whitespace)
            .map_or(0, |p| p + 1);
        let chunk: String = buf[tail_start..].iter().map(|t| t.text).collect();
        self.abbreviations.is_abbreviation(&chunk)
    }
}

fn ends_terminal(text: &str) -> bool {
    matches!(text.chars().last(), Some('.' | '!' | '?'))
}

fn build_sentence<'a>(text: &'a str, tokens: Vec<Token<'a>>) -> Sentence<'a> {
    let first = tokens
        .iter()
        .find(|t| t.kind != TokenKind::Whitespace)
        .expect("sentence must contain a non-whitespace token");
    let last = tokens
        .iter()
        .rev()
        .find(|t| t.kind != TokenKind::Whitespace)
        .expect("sentence must contain a non-whitespace token");
    let span = TextSpan::new(first.span.start, last.span.end);
    let raw = &text[first.byte_start..last.byte_end];
    Sentence {
        span,
        text: raw,
        tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(sentences: &[Sentence<'_>]) -> String {
        sentences
            .iter()
            .flat_map(|s| s.tokens.iter())
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn tokenize_covers_every_character() {
        let text = "Hello,  world! It's a well-known fact.";
        let tokens = tokenize(text);
        let rebuilt: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn contractions_and_hyphens_stay_single_tokens() {
        let tokens = tokenize("don't over-think it");
        let words: Vec<&str> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Word)
            .map(|t| t.text)
            .collect();
        assert_eq!(words, vec!["don't", "over-think", "it"]);
    }

    #[test]
    fn leading_hyphen_is_punctuation() {
        let tokens = tokenize("-dash word-");
        assert_eq!(tokens[0].kind, TokenKind::Punctuation);
        assert_eq!(tokens[0].text, "-");
        // trailing hyphen is not internal, so it splits off
        let last = tokens.last().unwrap();
        assert_eq!(last.text, "-");
        assert_eq!(last.kind, TokenKind::Punctuation);
    }

    #[test]
    fn token_spans_are_character_based() {
        let text = "café ok";
        let tokens = tokenize(text);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[0].span, TextSpan::new(0, 4));
        assert_eq!(tokens[2].text, "ok");
        assert_eq!(tokens[2].span, TextSpan::new(5, 7));
    }

    #[test]
    fn basic_sentence_split() {
        let seg = Segmenter::with_default_abbreviations();
        let sentences = seg.segment("Hello world. This is a test. How are you?");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "Hello world.");
        assert_eq!(sentences[2].text, "How are you?");
    }

    #[test]
    fn abbreviations_do_not_split() {
        let seg = Segmenter::with_default_abbreviations();
        let sentences = seg.segment("Dr. Smith arrived. He was late.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Dr. Smith arrived.");

        let sentences = seg.segment("Use commas, semicolons, etc. when needed.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn terminal_punctuation_mid_word_does_not_split() {
        let seg = Segmenter::with_default_abbreviations();
        // period not followed by whitespace is not a boundary
        let sentences = seg.segment("Version 1.2 shipped today.");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        let seg = Segmenter::with_default_abbreviations();
        let sentences = seg.segment("no terminal punctuation here");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].word_count(), 4);
    }

    #[test]
    fn empty_and_whitespace_only_yield_nothing() {
        let seg = Segmenter::with_default_abbreviations();
        assert!(seg.segment("").is_empty());
        assert!(seg.segment("   \n\t ").is_empty());
        assert!(seg.segment("... !!! ???").is_empty());
    }

    #[test]
    fn round_trip_reconstruction() {
        let seg = Segmenter::with_default_abbreviations();
        let cases = [
            "Hello world. This is a test.",
            "  leading space. Trailing space.  ",
            "Dr. Smith went to Washington, D.C. yesterday!",
            "One\nline.\nAnother line?  Yes.",
            "naïve café — em-dash résumé.",
            "Ellipsis... and then? The end...",
        ];
        for text in cases {
            let sentences = seg.segment(text);
            assert_eq!(reconstruct(&sentences), text, "round-trip failed for {text:?}");
        }
    }

    #[test]
    fn sentence_span_excludes_surrounding_whitespace() {
        let seg = Segmenter::with_default_abbreviations();
        let text = "  First one.  Second one. ";
        let sentences = seg.segment(text);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].span.slice(text), "First one.");
        assert_eq!(sentences[1].span.slice(text), "Second one.");
    }

    #[test]
    fn exclamation_and_question_split() {
        let seg = Segmenter::with_default_abbreviations();
        let sentences = seg.segment("Stop! Why? Because.");
        assert_eq!(sentences.len(), 3);
    }
}
