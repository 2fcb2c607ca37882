//! Word validation for plays
//!
//! Checks a candidate word against:
//! - Minimum length
//! - Dictionary presence

use super::dictionary::Dictionary;
use super::error::RoundError;

/// Minimum word length for a play
pub const MIN_WORD_LENGTH: usize = 3;

/// Result of word validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Word is valid
    Valid,
    /// Word is shorter than the minimum
    TooShort { length: usize },
    /// Word not found in dictionary
    NotInDictionary,
}

impl ValidationResult {
    /// Convert a failed validation into the round error for `word`.
    pub fn into_error(self, word: &str, minimum: usize) -> Option<RoundError> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::TooShort { length } => {
                Some(RoundError::WordTooShort { length, minimum })
            }
            ValidationResult::NotInDictionary => Some(RoundError::InvalidWord {
                word: word.to_string(),
            }),
        }
    }
}

/// Validate an uppercase candidate word
///
/// Checks in order:
/// 1. Length >= `minimum`
/// 2. Word exists in dictionary
pub fn validate_word<D: Dictionary + ?Sized>(
    word: &str,
    dictionary: &D,
    minimum: usize,
) -> ValidationResult {
    let length = word.chars().count();
    if length < minimum {
        return ValidationResult::TooShort { length };
    }

    if !dictionary.contains(word) {
        return ValidationResult::NotInDictionary;
    }

    ValidationResult::Valid
}
