//! Language and script definitions for the trilingual chatbot
//!
//! The chatbot serves French language courses in Cambodia, so every
//! text sample is assumed to be French, Khmer, English, or a mix.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Supported languages (French, Khmer, English)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// French, the institutional default
    #[default]
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "km")]
    Khmer,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::Khmer => "km",
            Self::English => "en",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::French => "French",
            Self::Khmer => "Khmer",
            Self::English => "English",
        }
    }

    /// Get name in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::French => "Français",
            Self::Khmer => "ភាសាខ្មែរ",
            Self::English => "English",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::French | Self::English => Script::Latin,
            Self::Khmer => Script::Khmer,
        }
    }

    /// Parse from string (case-insensitive)
    ///
    /// Accepts ISO codes, English names, native names, and the
    /// spellings speech engines report for these languages.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "fr" | "fra" | "fre" | "french" | "français" | "francais" => Some(Self::French),
            "km" | "khm" | "khmer" | "cambodian" | "ភាសាខ្មែរ" => Some(Self::Khmer),
            "en" | "eng" | "english" => Some(Self::English),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::French, Self::Khmer, Self::English]
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Strict parse of an ISO code, for validating client-supplied values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Self::French),
            "km" => Ok(Self::Khmer),
            "en" => Ok(Self::English),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Writing scripts observed in chat text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Khmer,
    Latin,
}

impl Script {
    /// Check if a character belongs to this script
    ///
    /// Latin counts ASCII letters only; accented French letters are
    /// handled at the lexical layer, not the script layer.
    pub fn contains_char(&self, c: char) -> bool {
        match self {
            // Khmer block U+1780..U+17FF (letters, vowel signs, coeng)
            Self::Khmer => matches!(c, '\u{1780}'..='\u{17FF}'),
            Self::Latin => c.is_ascii_alphabetic(),
        }
    }

    /// Classify a character, if it belongs to a known script
    pub fn of_char(c: char) -> Option<Self> {
        if Self::Khmer.contains_char(c) {
            Some(Self::Khmer)
        } else if Self::Latin.contains_char(c) {
            Some(Self::Latin)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Khmer => write!(f, "khmer"),
            Self::Latin => write!(f, "latin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::French.code(), "fr");
        assert_eq!(Language::Khmer.code(), "km");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::French.script(), Script::Latin);
        assert_eq!(Language::Khmer.script(), Script::Khmer);
        assert_eq!(Language::English.script(), Script::Latin);
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::French.native_name(), "Français");
        assert_eq!(Language::Khmer.native_name(), "ភាសាខ្មែរ");
    }

    #[test]
    fn test_from_str_loose() {
        assert_eq!(Language::from_str_loose("fr"), Some(Language::French));
        assert_eq!(Language::from_str_loose("French"), Some(Language::French));
        assert_eq!(Language::from_str_loose("KHMER"), Some(Language::Khmer));
        assert_eq!(Language::from_str_loose("cambodian"), Some(Language::Khmer));
        assert_eq!(Language::from_str_loose(" english "), Some(Language::English));
        assert_eq!(Language::from_str_loose("thai"), None);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("km".parse::<Language>().unwrap(), Language::Khmer);
        assert!("French".parse::<Language>().is_err());
        assert!("xx".parse::<Language>().is_err());
    }

    #[test]
    fn test_default_is_french() {
        assert_eq!(Language::default(), Language::French);
    }

    #[test]
    fn test_script_contains_char() {
        assert!(Script::Khmer.contains_char('ស'));
        assert!(Script::Khmer.contains_char('\u{17D2}'));
        assert!(!Script::Khmer.contains_char('a'));
        assert!(Script::Latin.contains_char('z'));
        assert!(!Script::Latin.contains_char('é'));
        assert!(!Script::Latin.contains_char('1'));
    }

    #[test]
    fn test_script_of_char() {
        assert_eq!(Script::of_char('ក'), Some(Script::Khmer));
        assert_eq!(Script::of_char('B'), Some(Script::Latin));
        assert_eq!(Script::of_char('?'), None);
    }

    #[test]
    fn test_all_languages() {
        assert_eq!(Language::all().len(), 3);
    }
}
