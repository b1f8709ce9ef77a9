//! Chat language resolution
//!
//! Decides which language the assistant should reply in, reconciling an
//! explicit user preference, lexical detection, and conversation history.

use tracing::debug;

use triglot_core::{ChatMessage, DetectionResult, Error, Language, MessageRole, Result};

/// Detection must reach this confidence to override an explicit user
/// preference.
pub const PREFERENCE_OVERRIDE_THRESHOLD: f32 = 0.8;

/// At or above this confidence detection stands on its own.
///
/// Deliberately below [`PREFERENCE_OVERRIDE_THRESHOLD`]: inside the
/// band, detection wins only when the user expressed no preference.
pub const DETECTION_TRUST_THRESHOLD: f32 = 0.7;

/// Resolve the language for a chat reply
///
/// Cascade, first match wins:
/// 1. Explicit preference, unless detection is confident enough to
///    override it
/// 2. Confident detection
/// 3. Language of the last assistant turn, then preference, then
///    detection (only when history exists)
/// 4. Preference, then detection
pub fn resolve_chat_language(
    user_pref: Option<Language>,
    detection: &DetectionResult,
    history: &[ChatMessage],
) -> Language {
    if let Some(pref) = user_pref {
        if detection.confidence < PREFERENCE_OVERRIDE_THRESHOLD {
            debug!(
                language = %pref,
                detected = %detection.language,
                confidence = detection.confidence,
                "using explicit language preference"
            );
            return pref;
        }
    }

    if detection.confidence >= DETECTION_TRUST_THRESHOLD {
        debug!(
            language = %detection.language,
            confidence = detection.confidence,
            "using detected language"
        );
        return detection.language;
    }

    if !history.is_empty() {
        let continuity = history
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
            .and_then(|m| m.language);
        let language = continuity.or(user_pref).unwrap_or(detection.language);
        debug!(language = %language, "using conversation continuity");
        return language;
    }

    let language = user_pref.unwrap_or(detection.language);
    debug!(language = %language, "using preference or detection fallback");
    language
}

/// Validate an inbound chat message before detection
pub fn validate_message(text: &str, max_length: usize) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::EmptyMessage);
    }
    let length = text.chars().count();
    if length > max_length {
        return Err(Error::MessageTooLong {
            length,
            max: max_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(language: Language, confidence: f32) -> DetectionResult {
        DetectionResult {
            language,
            confidence,
            is_code_switching: false,
            detected_scripts: vec![language.script()],
            secondary_language: None,
        }
    }

    #[test]
    fn test_preference_wins_below_override_threshold() {
        let detected = detection(Language::French, 0.75);
        let language = resolve_chat_language(Some(Language::Khmer), &detected, &[]);
        assert_eq!(language, Language::Khmer);
    }

    #[test]
    fn test_confident_detection_overrides_preference() {
        let detected = detection(Language::French, 0.9);
        let language = resolve_chat_language(Some(Language::Khmer), &detected, &[]);
        assert_eq!(language, Language::French);
    }

    #[test]
    fn test_override_threshold_boundary() {
        // at exactly 0.8 the preference no longer holds
        let detected = detection(Language::English, PREFERENCE_OVERRIDE_THRESHOLD);
        let language = resolve_chat_language(Some(Language::French), &detected, &[]);
        assert_eq!(language, Language::English);
    }

    #[test]
    fn test_detection_stands_alone_in_band() {
        // no preference: 0.75 is enough for detection on its own
        let detected = detection(Language::English, 0.75);
        let language = resolve_chat_language(None, &detected, &[]);
        assert_eq!(language, Language::English);
    }

    #[test]
    fn test_history_continuity_on_weak_detection() {
        let detected = detection(Language::French, 0.4);
        let history = vec![
            ChatMessage::user("សួស្តី"),
            ChatMessage::assistant("សួស្តី! តើខ្ញុំអាចជួយអ្វីបាន?").with_language(Language::Khmer),
        ];
        let language = resolve_chat_language(None, &detected, &history);
        assert_eq!(language, Language::Khmer);
    }

    #[test]
    fn test_continuity_uses_last_assistant_turn() {
        let detected = detection(Language::French, 0.4);
        let history = vec![
            ChatMessage::assistant("Bonjour!").with_language(Language::French),
            ChatMessage::user("ok"),
            ChatMessage::assistant("Hello!").with_language(Language::English),
        ];
        let language = resolve_chat_language(None, &detected, &history);
        assert_eq!(language, Language::English);
    }

    #[test]
    fn test_untagged_last_assistant_turn_falls_through() {
        // the last assistant turn decides; an untagged one does not
        // defer to earlier tagged turns
        let detected = detection(Language::French, 0.4);
        let history = vec![
            ChatMessage::assistant("សួស្តី!").with_language(Language::Khmer),
            ChatMessage::assistant("..."),
        ];
        let language = resolve_chat_language(Some(Language::English), &detected, &history);
        assert_eq!(language, Language::English);

        let language = resolve_chat_language(None, &detected, &history);
        assert_eq!(language, Language::French);
    }

    #[test]
    fn test_history_without_assistant_turns() {
        let detected = detection(Language::Khmer, 0.5);
        let history = vec![ChatMessage::user("hello"), ChatMessage::user("anyone?")];
        let language = resolve_chat_language(None, &detected, &history);
        assert_eq!(language, Language::Khmer);
    }

    #[test]
    fn test_fallback_to_detection() {
        let detected = detection(Language::French, 0.3);
        let language = resolve_chat_language(None, &detected, &[]);
        assert_eq!(language, Language::French);
    }

    #[test]
    fn test_validate_message() {
        assert!(validate_message("Bonjour", 2000).is_ok());
        assert!(matches!(
            validate_message("", 2000),
            Err(Error::EmptyMessage)
        ));
        assert!(matches!(
            validate_message("   \n", 2000),
            Err(Error::EmptyMessage)
        ));
        let long = "a".repeat(2001);
        assert!(matches!(
            validate_message(&long, 2000),
            Err(Error::MessageTooLong { length: 2001, max: 2000 })
        ));
        // counted in characters, not bytes
        let khmer = "ក".repeat(2000);
        assert!(validate_message(&khmer, 2000).is_ok());
    }
}
