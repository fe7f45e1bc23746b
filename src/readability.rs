// WHY: Readability metrics over the shared segmentation. Syllable counting is
// a heuristic (vowel runs with silent-e handling) that matches what the grade
// formulas were calibrated against; it is intentionally not a dictionary.

use crate::report::ReadabilityScore;
use crate::segmenter::Sentence;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate syllables in a single word.
///
/// Counts maximal vowel runs (y counts as a vowel), subtracts one for a silent
/// trailing "e" unless the word is three letters or fewer or ends in "le"
/// preceded by a consonant, and floors at one syllable per non-empty word.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        // numbers and symbol-only tokens still read as one beat
        return usize::from(!word.is_empty());
    }

    let mut runs = 0usize;
    let mut prev_vowel = false;
    for &c in &letters {
        let v = is_vowel(c);
        if v && !prev_vowel {
            runs += 1;
        }
        prev_vowel = v;
    }

    let n = letters.len();
    if n > 3 && letters[n - 1] == 'e' {
        // "table" keeps its "-le" syllable; "there" drops the silent e
        let consonant_le = letters[n - 2] == 'l' && !is_vowel(letters[n - 3]);
        if !consonant_le {
            runs = runs.saturating_sub(1);
        }
    }

    runs.max(1)
}

/// Compute readability metrics over segmented text. Pure; zero sentences or
/// zero words produce an all-zero score rather than an error.
pub fn score(sentences: &[Sentence<'_>]) -> ReadabilityScore {
    let mut word_count = 0usize;
    let mut sentence_count = 0usize;
    let mut syllable_count = 0usize;
    let mut complex_words = 0usize;

    for sentence in sentences {
        let mut words_here = 0usize;
        for word in sentence.words() {
            words_here += 1;
            let syllables = count_syllables(word.text);
            syllable_count += syllables;
            if syllables >= 3 {
                complex_words += 1;
            }
        }
        if words_here > 0 {
            sentence_count += 1;
            word_count += words_here;
        }
    }

    if sentence_count == 0 || word_count == 0 {
        return ReadabilityScore::default();
    }

    let w = word_count as f64;
    let s = sentence_count as f64;
    let sy = syllable_count as f64;

    ReadabilityScore {
        // Flesch-Kincaid grade is deliberately unclamped: trivial text scores
        // below zero and that is meaningful to show
        flesch_kincaid_grade: 0.39 * (w / s) + 11.8 * (sy / w) - 15.59,
        flesch_reading_ease: (206.835 - 1.015 * (w / s) - 84.6 * (sy / w)).clamp(0.0, 100.0),
        gunning_fog: (0.4 * ((w / s) + 100.0 * (complex_words as f64 / w))).max(0.0),
        word_count,
        sentence_count,
        syllable_count,
        avg_sentence_length: w / s,
    }
}

/// Map a grade level to a difficulty descriptor.
pub fn difficulty_band(grade: f64) -> &'static str {
    if grade < 6.0 {
        "Elementary"
    } else if grade < 9.0 {
        "Middle School"
    } else if grade < 13.0 {
        "High School"
    } else if grade < 16.0 {
        "College"
    } else {
        "Graduate"
    }
}
