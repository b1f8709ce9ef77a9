//! Language identification trait

use async_trait::async_trait;

use crate::{DetectionResult, Language};

/// Language identification interface
///
/// Implementations:
/// - `LexicalDetector` (triglot-detect) - lexicon and script heuristics
///
/// The trait is async so that identifiers backed by a model server can
/// share the seam; the lexical implementation never suspends.
///
/// # Example
///
/// ```ignore
/// let identifier: Box<dyn LanguageIdentifier> = Box::new(LexicalDetector::new());
/// let result = identifier.identify("Bonjour, comment allez-vous?").await;
/// println!("Detected: {}", result.language);
/// ```
#[async_trait]
pub trait LanguageIdentifier: Send + Sync + 'static {
    /// Identify the language of a text sample
    ///
    /// Never fails: text with no usable signal resolves to the default
    /// language at low confidence.
    async fn identify(&self, text: &str) -> DetectionResult;

    /// Get supported languages
    fn supported_languages(&self) -> &[Language];

    /// Get identifier name for logging
    fn name(&self) -> &str;

    /// Check if a specific language is supported
    fn supports_language(&self, lang: Language) -> bool {
        self.supported_languages().contains(&lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation for testing
    struct MockIdentifier {
        languages: Vec<Language>,
    }

    #[async_trait]
    impl LanguageIdentifier for MockIdentifier {
        async fn identify(&self, _text: &str) -> DetectionResult {
            DetectionResult {
                language: Language::Khmer,
                confidence: 0.9,
                is_code_switching: false,
                detected_scripts: vec![crate::Script::Khmer],
                secondary_language: None,
            }
        }

        fn supported_languages(&self) -> &[Language] {
            &self.languages
        }

        fn name(&self) -> &str {
            "mock-identifier"
        }
    }

    #[test]
    fn test_supports_language() {
        let identifier = MockIdentifier {
            languages: vec![Language::French, Language::Khmer],
        };
        assert!(identifier.supports_language(Language::Khmer));
        assert!(!identifier.supports_language(Language::English));
    }

    #[tokio::test]
    async fn test_identify() {
        let identifier = MockIdentifier {
            languages: Language::all().to_vec(),
        };
        let result = identifier.identify("សួស្តី").await;
        assert_eq!(result.language, Language::Khmer);
    }
}
