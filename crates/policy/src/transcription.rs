//! Transcription language resolution
//!
//! Reconciles the language reported by the speech engine with lexical
//! detection over the transcript text. The engine hears audio the
//! detector never sees, so on a clean conflict the engine wins with
//! reduced confidence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use triglot_core::{DetectionResult, Language};

/// Below this text confidence the engine verdict stands unchallenged.
const TEXT_TRUST_THRESHOLD: f32 = 0.7;

/// Without an engine verdict, detection below this falls back to the
/// caller's hint.
const HINT_FALLBACK_THRESHOLD: f32 = 0.5;

/// Resolved language for a transcribed utterance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionLanguage {
    pub language: Language,
    pub confidence: f32,
}

/// Resolve the language of a transcription
///
/// `speech_lang` is the speech engine's verdict, when it produced one.
/// `detection` is lexical detection over the transcript text. `hint`
/// is the language the caller asked to transcribe in.
pub fn resolve_transcription_language(
    speech_lang: Option<Language>,
    detection: &DetectionResult,
    hint: Option<Language>,
) -> TranscriptionLanguage {
    if let Some(engine) = speech_lang {
        if engine == detection.language {
            let confidence = detection.confidence.max(0.95);
            debug!(language = %engine, confidence, "engine and text detection agree");
            return TranscriptionLanguage {
                language: engine,
                confidence,
            };
        }
        if detection.confidence < TEXT_TRUST_THRESHOLD {
            debug!(
                language = %engine,
                detected = %detection.language,
                confidence = detection.confidence,
                "text detection too weak to challenge engine"
            );
            return TranscriptionLanguage {
                language: engine,
                confidence: 0.85,
            };
        }
        if detection.is_code_switching {
            let confidence = detection.confidence * 0.9;
            debug!(
                language = %detection.language,
                engine = %engine,
                confidence,
                "code-switched transcript, trusting text detection"
            );
            return TranscriptionLanguage {
                language: detection.language,
                confidence,
            };
        }
        debug!(
            language = %engine,
            detected = %detection.language,
            "conflict resolved in favor of engine"
        );
        return TranscriptionLanguage {
            language: engine,
            confidence: 0.8,
        };
    }

    if detection.confidence < HINT_FALLBACK_THRESHOLD {
        if let Some(hint) = hint {
            debug!(language = %hint, "weak detection, falling back to caller hint");
            return TranscriptionLanguage {
                language: hint,
                confidence: 0.5,
            };
        }
    }

    debug!(
        language = %detection.language,
        confidence = detection.confidence,
        "no engine verdict, using text detection"
    );
    TranscriptionLanguage {
        language: detection.language,
        confidence: detection.confidence,
    }
}
