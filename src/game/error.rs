//! Rejections reported by round commands
//!
//! None of these are fatal: the round stays as it was and the error text
//! becomes the status message.

use std::fmt;

/// Why a round command was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// Play attempted with no plays remaining
    NoPlaysLeft,
    /// Discard attempted with no discards remaining
    NoDiscardsLeft,
    /// Candidate word below the minimum length
    WordTooShort { length: usize, minimum: usize },
    /// Candidate word not in the dictionary
    InvalidWord { word: String },
    /// Discard attempted with nothing selected
    EmptySelection,
    /// Hand position outside the hand
    SlotOutOfRange { index: usize, len: usize },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::NoPlaysLeft => write!(f, "No plays left this round!"),
            RoundError::NoDiscardsLeft => write!(f, "No discards left this round!"),
            RoundError::WordTooShort { minimum, .. } => {
                write!(f, "Word must be at least {} letters long!", minimum)
            }
            RoundError::InvalidWord { word } => write!(f, "Not a valid word: {}!", word),
            RoundError::EmptySelection => write!(f, "Select tiles to discard!"),
            RoundError::SlotOutOfRange { index, len } => {
                write!(f, "No tile at position {} (hand has {})", index + 1, len)
            }
        }
    }
}

impl std::error::Error for RoundError {}
