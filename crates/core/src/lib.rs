//! Core types for the trilingual chat language engine
//!
//! This crate provides foundational types used across all other crates:
//! - Language and script definitions (French, Khmer, English)
//! - Detection result types
//! - Chat message types
//! - The language identification trait
//! - Error types

pub mod detection;
pub mod error;
pub mod identify;
pub mod language;
pub mod message;

pub use detection::DetectionResult;
pub use error::{Error, Result};
pub use identify::LanguageIdentifier;
pub use language::{Language, Script};
pub use message::{ChatMessage, MessageKind, MessageRole};
