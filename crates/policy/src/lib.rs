//! Language resolution policies
//!
//! - Chat: preference vs. detection vs. conversation continuity
//! - Transcription: speech engine verdict vs. text detection
//! - Message validation ahead of detection

pub mod chat;
pub mod transcription;

pub use chat::{
    resolve_chat_language, validate_message, DETECTION_TRUST_THRESHOLD,
    PREFERENCE_OVERRIDE_THRESHOLD,
};
pub use transcription::{resolve_transcription_language, TranscriptionLanguage};
