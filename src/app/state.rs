//! Application state: key handlers on top of the round engine

use super::loader::{DictionaryLoader, DictionaryStatus};
use crate::game::{Round, RoundSnapshot, RoundSummary, SharedDictionary};

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Hand position under the cursor
    pub cursor: usize,
    round: Round<SharedDictionary>,
    dictionary: DictionaryStatus,
    loader: Option<DictionaryLoader>,
}

impl App {
    /// Wrap a round. Pass the loader filling the round's dictionary, if any.
    pub fn new(round: Round<SharedDictionary>, loader: Option<DictionaryLoader>) -> Self {
        let dictionary = if round.dictionary().is_loaded() {
            DictionaryStatus::Loaded {
                words: round.dictionary().word_count(),
            }
        } else {
            DictionaryStatus::Loading
        };
        Self {
            should_quit: false,
            cursor: 0,
            round,
            dictionary,
            loader,
        }
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Pick up a finished dictionary load
    pub fn tick(&mut self) {
        let Some(loader) = &self.loader else {
            return;
        };
        if let Some(outcome) = loader.poll() {
            self.dictionary = match outcome {
                Ok(words) => DictionaryStatus::Loaded { words },
                Err(err) => DictionaryStatus::Failed {
                    reason: err.to_string(),
                },
            };
            self.loader = None;
        }
    }

    pub fn dictionary_status(&self) -> &DictionaryStatus {
        &self.dictionary
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.round.snapshot()
    }

    pub fn summary(&self) -> RoundSummary {
        self.round.summary()
    }

    pub fn is_game_over(&self) -> bool {
        self.round.is_game_over()
    }

    fn last_slot(&self) -> usize {
        self.round.hand().len().saturating_sub(1)
    }

    /// Move the cursor one slot left (locked when round is over)
    pub fn on_left(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one slot right (locked when round is over)
    pub fn on_right(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.cursor = (self.cursor + 1).min(self.last_slot());
    }

    /// Toggle the tile under the cursor
    pub fn on_toggle(&mut self) {
        self.on_toggle_slot(self.cursor);
    }

    /// Toggle a tile by position and move the cursor there
    pub fn on_toggle_slot(&mut self, index: usize) {
        if self.is_game_over() {
            return;
        }
        if self.round.toggle_select(index).is_ok() {
            self.cursor = index;
        }
    }

    /// Carry the tile under the cursor one slot left
    pub fn on_move_left(&mut self) {
        if self.is_game_over() || self.cursor == 0 {
            return;
        }
        let to = self.cursor - 1;
        if self.round.reorder(self.cursor, to).is_ok() {
            self.cursor = to;
        }
    }

    /// Carry the tile under the cursor one slot right
    pub fn on_move_right(&mut self) {
        if self.is_game_over() || self.cursor >= self.last_slot() {
            return;
        }
        let to = self.cursor + 1;
        if self.round.reorder(self.cursor, to).is_ok() {
            self.cursor = to;
        }
    }

    /// Play the selected tiles (Enter)
    pub fn on_play(&mut self) {
        if self.is_game_over() {
            return;
        }
        let _ = self.round.play();
    }

    /// Discard the selected tiles
    pub fn on_discard(&mut self) {
        if self.is_game_over() {
            return;
        }
        let _ = self.round.discard();
    }

    /// Start over; only offered once the round is over
    pub fn on_new_round(&mut self) {
        if !self.is_game_over() {
            return;
        }
        self.round.new_round();
        self.cursor = 0;
    }
}
