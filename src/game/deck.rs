//! The undrawn tile supply for a round

use super::tiles::{count_of, Tile, DECK_SIZE};
use rand::Rng;
use std::collections::VecDeque;

/// Ordered pool of undrawn tiles. Draws come off the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    tiles: VecDeque<Tile>,
}

impl Deck {
    /// Build an unshuffled deck holding `count_of(L)` copies of every letter,
    /// in alphabetical order.
    pub fn generate() -> Self {
        let mut tiles = VecDeque::with_capacity(DECK_SIZE);
        for tile in ('A'..='Z').filter_map(Tile::new) {
            let copies = count_of(tile.letter()) as usize;
            tiles.extend(std::iter::repeat(tile).take(copies));
        }
        Self { tiles }
    }

    /// Generate and shuffle in one step.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::generate();
        deck.shuffle(rng);
        deck
    }

    /// Fisher-Yates: walk from the last index down to 1, swapping each
    /// position with a uniformly chosen position at or before it.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.tiles.len()).rev() {
            let j = rng.random_range(0..=i);
            self.tiles.swap(i, j);
        }
    }

    /// Remove and return up to `count` tiles from the front.
    /// Returns fewer than `count` only when the deck runs out.
    pub fn draw(&mut self, count: usize) -> Vec<Tile> {
        let n = count.min(self.tiles.len());
        self.tiles.drain(..n).collect()
    }

    /// Remove and return the front tile, if any.
    pub fn draw_one(&mut self) -> Option<Tile> {
        self.tiles.pop_front()
    }

    /// Put tiles back into the supply and reshuffle the whole deck.
    pub fn restock<R, I>(&mut self, tiles: I, rng: &mut R)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = Tile>,
    {
        self.tiles.extend(tiles);
        self.shuffle(rng);
    }

    /// Number of undrawn tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the deck is exhausted.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// How many tiles of a given letter remain undrawn.
    #[cfg(test)]
    pub fn count_of(&self, letter: char) -> usize {
        let upper = letter.to_ascii_uppercase();
        self.tiles.iter().filter(|t| t.letter() == upper).count()
    }

    /// The undrawn tiles, front first.
    #[cfg(test)]
    pub fn tiles(&self) -> &VecDeque<Tile> {
        &self.tiles
    }
}

impl FromIterator<Tile> for Deck {
    /// Stack a deck in the given order, front first.
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
