//! Round state machine: plays, discards, scoring and game over
//!
//! A round starts with a shuffled deck and a full hand. Each successful play
//! or discard spends one of its counters; the round is over once both
//! counters reach zero. Failed commands leave everything except the status
//! message untouched.

use super::deck::Deck;
use super::dictionary::Dictionary;
use super::error::RoundError;
use super::hand::Hand;
use super::tiles::{word_score, Tile};
use super::validation::{validate_word, MIN_WORD_LENGTH};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Tiles in a hand
pub const DEFAULT_HAND_SIZE: usize = 7;
/// Plays per round
pub const DEFAULT_PLAYS: u32 = 3;
/// Discards per round
pub const DEFAULT_DISCARDS: u32 = 4;

/// Per-round budget and limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRules {
    pub hand_size: usize,
    pub plays: u32,
    pub discards: u32,
    pub min_word_length: usize,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            plays: DEFAULT_PLAYS,
            discards: DEFAULT_DISCARDS,
            min_word_length: MIN_WORD_LENGTH,
        }
    }
}

/// A word accepted this round with its point value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedWord {
    pub word: String,
    pub points: u32,
}

/// What the last play or discard did. Its display text is the status message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing has happened yet this round
    #[default]
    Idle,
    Played(PlayedWord),
    /// Number of tiles swapped out
    Discarded(usize),
    Rejected(RoundError),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Idle => Ok(()),
            Outcome::Played(played) => {
                write!(f, "Played \"{}\" for {} points!", played.word, played.points)
            }
            Outcome::Discarded(count) => write!(f, "Discarded {} tiles.", count),
            Outcome::Rejected(err) => write!(f, "{}", err),
        }
    }
}

/// Read-only view of the round for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    /// Letters in hand order
    pub hand: Vec<char>,
    /// Point value of each hand tile
    pub tile_scores: Vec<u32>,
    /// Selected hand positions, ascending
    pub selected: Vec<usize>,
    pub total_score: u32,
    pub round_score: u32,
    pub plays_left: u32,
    pub discards_left: u32,
    pub message: String,
    /// The command result behind `message`
    pub outcome: Outcome,
    pub game_over: bool,
    /// Undrawn tiles left in the deck
    pub deck_remaining: usize,
}

/// End-of-round summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundSummary {
    pub total_score: u32,
    pub words: Vec<PlayedWord>,
}

impl RoundSummary {
    /// Highest-scoring word (earliest wins ties)
    pub fn best_word(&self) -> Option<&PlayedWord> {
        self.words
            .iter()
            .rev()
            .max_by_key(|w| w.points)
    }

    /// Longest word by letter count (earliest wins ties)
    pub fn longest_word(&self) -> Option<&PlayedWord> {
        self.words
            .iter()
            .rev()
            .max_by_key(|w| w.word.chars().count())
    }
}

/// One round of play: deck, hand, counters and score.
pub struct Round<D> {
    dictionary: D,
    rules: RoundRules,
    rng: StdRng,
    deck: Deck,
    hand: Hand,
    /// Tiles that left the hand by play or discard
    spent: Vec<Tile>,
    total_score: u32,
    round_score: u32,
    plays_left: u32,
    discards_left: u32,
    outcome: Outcome,
    game_over: bool,
    played: Vec<PlayedWord>,
}

impl<D: Dictionary> Round<D> {
    /// Start a round seeded from the operating system.
    pub fn new(dictionary: D, rules: RoundRules) -> Self {
        Self::with_rng(dictionary, rules, StdRng::from_os_rng())
    }

    /// Start a reproducible round.
    pub fn with_seed(dictionary: D, rules: RoundRules, seed: u64) -> Self {
        Self::with_rng(dictionary, rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dictionary: D, rules: RoundRules, rng: StdRng) -> Self {
        let mut round = Self::blank(dictionary, rules, rng);
        round.new_round();
        round
    }

    fn blank(dictionary: D, rules: RoundRules, rng: StdRng) -> Self {
        Self {
            dictionary,
            rules,
            rng,
            deck: Deck::default(),
            hand: Hand::default(),
            spent: Vec::new(),
            total_score: 0,
            round_score: 0,
            plays_left: 0,
            discards_left: 0,
            outcome: Outcome::Idle,
            game_over: false,
            played: Vec::new(),
        }
    }

    /// Reset everything: fresh shuffled deck, new hand, full counters, zero score.
    pub fn new_round(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.start(deck);
    }

    fn start(&mut self, mut deck: Deck) {
        self.hand = Hand::deal(deck.draw(self.rules.hand_size));
        self.deck = deck;
        self.spent.clear();
        self.total_score = 0;
        self.round_score = 0;
        self.plays_left = self.rules.plays;
        self.discards_left = self.rules.discards;
        self.outcome = Outcome::Idle;
        self.game_over = false;
        self.played.clear();
    }

    fn reject<T>(&mut self, err: RoundError) -> Result<T, RoundError> {
        self.outcome = Outcome::Rejected(err.clone());
        Err(err)
    }

    /// Flip selection of the tile at `index`. Returns whether it is now selected.
    pub fn toggle_select(&mut self, index: usize) -> Result<bool, RoundError> {
        match self.hand.toggle(index) {
            Ok(selected) => Ok(selected),
            Err(err) => self.reject(err),
        }
    }

    /// Move the tile at `from` to `to`; selection stays with the tiles.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), RoundError> {
        match self.hand.reorder(from, to) {
            Ok(()) => Ok(()),
            Err(err) => self.reject(err),
        }
    }

    /// Score the selected tiles as a word.
    pub fn play(&mut self) -> Result<PlayedWord, RoundError> {
        if self.plays_left == 0 {
            return self.reject(RoundError::NoPlaysLeft);
        }

        let word = self.hand.selected_word().to_uppercase();
        let minimum = self.rules.min_word_length;
        if let Some(err) = validate_word(&word, &self.dictionary, minimum).into_error(&word, minimum) {
            return self.reject(err);
        }

        let points = word_score(&word);
        self.total_score += points;
        self.round_score += points;
        self.plays_left -= 1;
        self.refill_selected();

        let played = PlayedWord { word, points };
        self.outcome = Outcome::Played(played.clone());
        self.played.push(played.clone());
        self.check_game_over();
        Ok(played)
    }

    /// Swap the selected tiles for new ones. Returns how many were discarded.
    pub fn discard(&mut self) -> Result<usize, RoundError> {
        if self.discards_left == 0 {
            return self.reject(RoundError::NoDiscardsLeft);
        }
        let count = self.hand.selected_count();
        if count == 0 {
            return self.reject(RoundError::EmptySelection);
        }

        self.refill_selected();
        self.discards_left -= 1;
        self.outcome = Outcome::Discarded(count);
        self.check_game_over();
        Ok(count)
    }

    /// Replace each selected tile in position order. An empty deck is
    /// restocked from the spent pile, which already holds the outgoing tile,
    /// so a replacement always exists.
    fn refill_selected(&mut self) {
        let Self {
            hand,
            deck,
            spent,
            rng,
            ..
        } = self;
        hand.replace_selected(|outgoing| {
            spent.push(outgoing);
            if deck.is_empty() {
                deck.restock(spent.drain(..), &mut *rng);
            }
            deck.draw_one().unwrap_or(outgoing)
        });
    }

    fn check_game_over(&mut self) {
        if !self.game_over && self.plays_left == 0 && self.discards_left == 0 {
            self.game_over = true;
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Everything the UI needs to draw the round
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            hand: self.hand.letters(),
            tile_scores: self.hand.tiles().map(Tile::score).collect(),
            selected: self.hand.selected_indices(),
            total_score: self.total_score,
            round_score: self.round_score,
            plays_left: self.plays_left,
            discards_left: self.discards_left,
            message: self.outcome.to_string(),
            outcome: self.outcome.clone(),
            game_over: self.game_over,
            deck_remaining: self.deck.len(),
        }
    }

    /// Score and words so far
    pub fn summary(&self) -> RoundSummary {
        RoundSummary {
            total_score: self.total_score,
            words: self.played.clone(),
        }
    }
}

#[cfg(test)]
impl<D: Dictionary> Round<D> {
    /// Start a round dealt from a stacked deck, front first. Later rounds
    /// use freshly shuffled decks from `seed`.
    pub fn with_deck(dictionary: D, rules: RoundRules, deck: Deck, seed: u64) -> Self {
        let mut round = Self::blank(dictionary, rules, StdRng::seed_from_u64(seed));
        round.start(deck);
        round
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Tiles played or discarded and not yet recycled
    pub fn spent(&self) -> &[Tile] {
        &self.spent
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn plays_left(&self) -> u32 {
        self.plays_left
    }

    pub fn discards_left(&self) -> u32 {
        self.discards_left
    }

    pub fn message(&self) -> String {
        self.outcome.to_string()
    }
}
