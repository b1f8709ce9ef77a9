//! Error types shared across the workspace

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("Message text is required")]
    EmptyMessage,

    #[error("Message too long: {length} characters (maximum {max})")]
    MessageTooLong { length: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MessageTooLong { length: 2048, max: 2000 };
        assert_eq!(
            err.to_string(),
            "Message too long: 2048 characters (maximum 2000)"
        );
        assert_eq!(
            Error::UnsupportedLanguage("xx".into()).to_string(),
            "Unsupported language code: xx"
        );
    }
}
