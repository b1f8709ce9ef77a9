//! Lexical language detection

use async_trait::async_trait;
use std::collections::HashSet;

use triglot_core::{DetectionResult, Language, LanguageIdentifier, Script};

use crate::lexicon::{
    has_french_accents, ARTICLE_PATTERN, ELISION_PATTERN, ENGLISH_WORDS, FRENCH_WORDS,
    WORD_PATTERN,
};

/// Lexical language detector for short trilingual chat text
///
/// Stateless and cheap to construct; lexicons and patterns live in
/// process-wide statics, so `detect` never allocates beyond the word
/// list of the sample itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalDetector;

impl LexicalDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect the primary language of `text`, with confidence scoring,
    /// code-switching detection, and a secondary-language guess
    pub fn detect(&self, text: &str) -> DetectionResult {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return DetectionResult::unknown();
        }

        let lowered = trimmed.to_lowercase();
        let char_count = trimmed.chars().count();

        let khmer_count = trimmed
            .chars()
            .filter(|c| Script::Khmer.contains_char(*c))
            .count();
        let latin_count = trimmed
            .chars()
            .filter(|c| Script::Latin.contains_char(*c))
            .count();
        let script_chars = khmer_count + latin_count;

        let mut detected_scripts = Vec::new();
        if khmer_count > 0 {
            detected_scripts.push(Script::Khmer);
        }
        if latin_count > 0 {
            detected_scripts.push(Script::Latin);
        }

        let words: Vec<&str> = WORD_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();
        let french_matches = count_matches(&words, &FRENCH_WORDS);
        let english_matches = count_matches(&words, &ENGLISH_WORDS);
        let has_accents = has_french_accents(&lowered);

        // Mixed scripts with real Latin content, or solid hits on both
        // Latin lexicons, mean the user is switching languages
        let is_code_switching = (khmer_count > 0 && latin_count > 3)
            || (french_matches > 0
                && english_matches > 0
                && french_matches.min(english_matches) >= 2);

        let khmer_score = score_khmer(khmer_count, script_chars);
        let french_score = score_french(french_matches, has_accents, &lowered);
        let english_score = score_english(english_matches, has_accents);

        let max_score = khmer_score.max(french_score).max(english_score);

        // Khmer wins ties against Latin scores; French wins ties
        // against English
        let (language, mut confidence, secondary_language) =
            if khmer_score == max_score && khmer_score > 0.0 {
                let confidence =
                    calculate_confidence(khmer_score, french_score + english_score, script_chars);
                let secondary = if is_code_switching {
                    Some(if french_score >= english_score {
                        Language::French
                    } else {
                        Language::English
                    })
                } else {
                    None
                };
                (Language::Khmer, confidence, secondary)
            } else if french_score >= english_score {
                let confidence = calculate_confidence(french_score, english_score, words.len());
                let secondary = if is_code_switching {
                    if khmer_count > 0 {
                        Some(Language::Khmer)
                    } else if english_matches > 2 {
                        Some(Language::English)
                    } else {
                        None
                    }
                } else {
                    None
                };
                (Language::French, confidence, secondary)
            } else {
                let confidence = calculate_confidence(english_score, french_score, words.len());
                let secondary = if is_code_switching {
                    if khmer_count > 0 {
                        Some(Language::Khmer)
                    } else if french_matches > 2 {
                        Some(Language::French)
                    } else {
                        None
                    }
                } else {
                    None
                };
                (Language::English, confidence, secondary)
            };

        // Very short samples cannot support strong claims
        if char_count < 10 {
            confidence *= 0.7;
        } else if char_count < 20 {
            confidence *= 0.85;
        }

        confidence = confidence.clamp(0.1, 0.99);

        tracing::debug!(
            language = %language,
            confidence,
            khmer = khmer_score,
            french = french_score,
            english = english_score,
            words = words.len(),
            code_switching = is_code_switching,
            "scored text sample"
        );

        DetectionResult {
            language,
            confidence,
            is_code_switching,
            detected_scripts,
            secondary_language,
        }
    }
}

#[async_trait]
impl LanguageIdentifier for LexicalDetector {
    async fn identify(&self, text: &str) -> DetectionResult {
        self.detect(text)
    }

    fn supported_languages(&self) -> &[Language] {
        Language::all()
    }

    fn name(&self) -> &str {
        "lexical"
    }
}

/// Detect only the primary language of `text`
pub fn detect_language(text: &str) -> Language {
    LexicalDetector::new().detect(text).language
}

fn count_matches(words: &[&str], set: &HashSet<&'static str>) -> usize {
    words.iter().filter(|w| set.contains(**w)).count()
}

fn score_khmer(khmer_count: usize, script_chars: usize) -> f32 {
    if khmer_count == 0 || script_chars == 0 {
        return 0.0;
    }
    let ratio = khmer_count as f32 / script_chars as f32;
    let mut score = ratio * 100.0;
    // Bonus for majority Khmer
    if ratio > 0.7 {
        score += 20.0;
    } else if ratio > 0.5 {
        score += 10.0;
    }
    score
}

fn score_french(matches: usize, has_accents: bool, lowered: &str) -> f32 {
    let mut score = matches as f32 * 10.0;
    if has_accents {
        score += 15.0;
    }
    // Elisions and "le <noun> de" constructions exist only in French
    if ELISION_PATTERN.is_match(lowered) {
        score += 10.0;
    }
    if ARTICLE_PATTERN.is_match(lowered) {
        score += 5.0;
    }
    score
}

fn score_english(matches: usize, has_accents: bool) -> f32 {
    let mut score = matches as f32 * 10.0;
    // French diacritics argue against English
    if has_accents && score > 0.0 {
        score -= 5.0;
    }
    score
}

/// Confidence from the score differential, discounted or boosted by
/// sample size (word count for Latin languages, script characters for
/// Khmer)
fn calculate_confidence(primary: f32, secondary: f32, sample_size: usize) -> f32 {
    if primary <= 0.0 {
        return 0.3;
    }

    let diff_ratio = (primary - secondary) / primary.max(1.0);
    let mut confidence = 0.5 + diff_ratio * 0.4;

    if sample_size < 3 {
        confidence *= 0.6;
    } else if sample_size < 5 {
        confidence *= 0.8;
    } else if sample_size >= 10 {
        confidence *= 1.1;
    }

    confidence.clamp(0.3, 0.95)
}
