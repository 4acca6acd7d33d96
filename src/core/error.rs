//! Error type shared by the library.
//!
//! Only user input can really go wrong in this game, so most variants
//! describe a bad card code. `InputClosed` and `Io` cover the terminal
//! going away underneath the prompter.

use thiserror::Error;

use super::code::CardCode;

#[derive(Error, Debug)]
pub enum TrumpError {
    #[error("'{input}' is not a card code (expected a letter and two digits, e.g. A01)")]
    InvalidCode { input: String },

    #[error("card {0} not found")]
    UnknownCode(CardCode),

    #[error("pick two different cards (both sides were {0})")]
    SameCard(CardCode),

    #[error("card {0} is already registered")]
    DuplicateCode(CardCode),

    #[error("input closed while waiting for {expected}")]
    InputClosed { expected: String },

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrumpError {
    /// Whether the comparison loop should re-prompt instead of aborting.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TrumpError::InvalidCode { .. } | TrumpError::UnknownCode(_) | TrumpError::SameCard(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TrumpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        let code = CardCode::new('A', 1);
        assert!(TrumpError::UnknownCode(code).is_retryable());
        assert!(TrumpError::SameCard(code).is_retryable());
        assert!(TrumpError::InvalidCode { input: "zz".into() }.is_retryable());

        assert!(!TrumpError::DuplicateCode(code).is_retryable());
        assert!(!TrumpError::InputClosed { expected: "a code".into() }.is_retryable());
    }

    #[test]
    fn test_messages() {
        let err = TrumpError::UnknownCode(CardCode::new('C', 7));
        assert_eq!(err.to_string(), "card C07 not found");

        let err = TrumpError::SameCard(CardCode::new('B', 2));
        assert_eq!(err.to_string(), "pick two different cards (both sides were B02)");
    }
}
