//! Game logic: tiles, deck, hand, word validation and the round engine

pub mod deck;
pub mod dictionary;
pub mod error;
pub mod hand;
pub mod round;
pub mod tiles;
pub mod validation;

pub use dictionary::{SharedDictionary, WordList};
pub use error::RoundError;
pub use round::{Outcome, Round, RoundRules, RoundSnapshot, RoundSummary};
