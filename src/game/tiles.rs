//! Letter tiles: deck composition and point values
//!
//! Standard Scrabble distribution, 98 tiles without blanks.

use std::fmt;

/// Tiles per letter in a freshly generated deck.
const LETTER_COUNTS: [(char, u32); 26] = [
    ('A', 9),
    ('B', 2),
    ('C', 2),
    ('D', 4),
    ('E', 12),
    ('F', 2),
    ('G', 3),
    ('H', 2),
    ('I', 9),
    ('J', 1),
    ('K', 1),
    ('L', 4),
    ('M', 2),
    ('N', 6),
    ('O', 8),
    ('P', 2),
    ('Q', 1),
    ('R', 6),
    ('S', 4),
    ('T', 6),
    ('U', 4),
    ('V', 2),
    ('W', 2),
    ('X', 1),
    ('Y', 2),
    ('Z', 1),
];

/// Points awarded per letter occurrence in a played word.
const LETTER_SCORES: [(char, u32); 26] = [
    ('A', 1),
    ('B', 3),
    ('C', 3),
    ('D', 2),
    ('E', 1),
    ('F', 4),
    ('G', 2),
    ('H', 4),
    ('I', 1),
    ('J', 8),
    ('K', 5),
    ('L', 1),
    ('M', 3),
    ('N', 1),
    ('O', 1),
    ('P', 3),
    ('Q', 10),
    ('R', 1),
    ('S', 1),
    ('T', 1),
    ('U', 1),
    ('V', 4),
    ('W', 4),
    ('X', 8),
    ('Y', 4),
    ('Z', 10),
];

/// Total tiles in a standard deck
pub const DECK_SIZE: usize = 98;

fn lookup(table: &[(char, u32); 26], letter: char) -> u32 {
    let upper = letter.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return 0;
    }
    table[(upper as u8 - b'A') as usize].1
}

/// Point value of a letter (case-insensitive). Non-letters score 0.
pub fn score_of(letter: char) -> u32 {
    lookup(&LETTER_SCORES, letter)
}

/// Number of copies of a letter in a fresh deck. Non-letters count 0.
pub fn count_of(letter: char) -> u32 {
    lookup(&LETTER_COUNTS, letter)
}

/// Sum of letter scores, one per occurrence.
pub fn word_score(word: &str) -> u32 {
    word.chars().map(score_of).sum()
}

/// A single letter tile, always uppercase A-Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(char);

impl Tile {
    /// Create a tile from a letter. Lowercase input is uppercased;
    /// anything outside A-Z is rejected.
    pub fn new(letter: char) -> Option<Self> {
        let upper = letter.to_ascii_uppercase();
        upper.is_ascii_uppercase().then_some(Tile(upper))
    }

    /// The tile's letter.
    pub fn letter(self) -> char {
        self.0
    }

    /// The tile's point value.
    pub fn score(self) -> u32 {
        score_of(self.0)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
