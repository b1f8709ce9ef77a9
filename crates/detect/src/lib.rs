//! Lexical language detection for French, Khmer, and English
//!
//! Identifies the language of short, noisy chat messages without any
//! model inference:
//! - Khmer from script presence and ratio (U+1780..U+17FF)
//! - French and English from function-word lexicons
//! - French diacritic, elision, and article heuristics as tie-breakers
//! - Code-switching detection with a secondary-language guess
//!
//! Detection is total: any input, including empty or unrecognizable
//! text, resolves to a result (the institutional default, French, at
//! low confidence when nothing matches).

pub mod detector;
mod lexicon;

pub use detector::{detect_language, LexicalDetector};
