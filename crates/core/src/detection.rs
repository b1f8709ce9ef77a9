//! Language detection result types

use serde::{Deserialize, Serialize};

use crate::{Language, Script};

/// Result of lexical language detection on a text sample
///
/// Field invariants, upheld by the detector:
/// - `confidence` stays within 0.1 to 0.99
/// - `secondary_language` is only set while `is_code_switching` is true,
///   and never equals `language`
/// - `detected_scripts` lists each script at most once, Khmer first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    /// Primary language of the text
    pub language: Language,
    /// Confidence in the primary language call
    pub confidence: f32,
    /// Whether the text mixes languages
    pub is_code_switching: bool,
    /// Scripts observed in the text
    pub detected_scripts: Vec<Script>,
    /// Best guess at the other language when code-switching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_language: Option<Language>,
}

impl DetectionResult {
    /// Result for text that carries no usable signal (empty, digits,
    /// unknown script): the institutional default at low confidence
    pub fn unknown() -> Self {
        Self {
            language: Language::default(),
            confidence: 0.3,
            is_code_switching: false,
            detected_scripts: Vec::new(),
            secondary_language: None,
        }
    }

    /// Check whether a script was observed
    pub fn has_script(&self, script: Script) -> bool {
        self.detected_scripts.contains(&script)
    }
}
