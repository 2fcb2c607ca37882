//! The player's hand and tile selection
//!
//! Selection is keyed by slot handles rather than positions. Each tile gets a
//! fresh [`SlotId`] when it enters the hand, so moving tiles around never
//! touches the selection set; positions are computed only when asked for.

use super::error::RoundError;
use super::tiles::Tile;
use std::collections::HashSet;

/// Opaque handle for one physical tile while it sits in the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    id: SlotId,
    tile: Tile,
}

/// Fixed-size ordered row of tiles plus the set of selected tiles.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    slots: Vec<Slot>,
    selected: HashSet<SlotId>,
    next_id: u64,
}

impl Hand {
    /// Create a hand holding the given tiles, nothing selected.
    pub fn deal(tiles: Vec<Tile>) -> Self {
        let mut hand = Self::default();
        let slots = tiles
            .into_iter()
            .map(|tile| Slot {
                id: hand.allocate_id(),
                tile,
            })
            .collect();
        hand.slots = slots;
        hand
    }

    fn allocate_id(&mut self) -> SlotId {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_index(&self, index: usize) -> Result<(), RoundError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(RoundError::SlotOutOfRange {
                index,
                len: self.slots.len(),
            })
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Tiles in hand order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.slots.iter().map(|s| s.tile)
    }

    /// Letters in hand order.
    pub fn letters(&self) -> Vec<char> {
        self.tiles().map(Tile::letter).collect()
    }

    /// Flip the selection of the tile at `index`. Returns whether it is now selected.
    pub fn toggle(&mut self, index: usize) -> Result<bool, RoundError> {
        self.check_index(index)?;
        let id = self.slots[index].id;
        if self.selected.remove(&id) {
            Ok(false)
        } else {
            self.selected.insert(id);
            Ok(true)
        }
    }

    /// Whether the tile at `index` is selected.
    #[cfg(test)]
    pub fn is_selected(&self, index: usize) -> bool {
        self.slots
            .get(index)
            .is_some_and(|s| self.selected.contains(&s.id))
    }

    /// Selected positions, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| self.selected.contains(&s.id))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of selected tiles.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Letters at the selected positions in ascending position order.
    pub fn selected_word(&self) -> String {
        self.slots
            .iter()
            .filter(|s| self.selected.contains(&s.id))
            .map(|s| s.tile.letter())
            .collect()
    }

    /// Move the tile at `from` to `to`, shifting the tiles in between by one.
    /// Selected tiles stay selected wherever they end up.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), RoundError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
        Ok(())
    }

    /// Swap every selected tile for a new one, in position order.
    ///
    /// `exchange` receives the outgoing tile and returns its replacement.
    /// Replacements get fresh handles and the selection is cleared.
    pub fn replace_selected<F>(&mut self, mut exchange: F)
    where
        F: FnMut(Tile) -> Tile,
    {
        for index in self.selected_indices() {
            let outgoing = self.slots[index].tile;
            let tile = exchange(outgoing);
            let id = self.allocate_id();
            self.slots[index] = Slot { id, tile };
        }
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hand_of(letters: &str) -> Hand {
        Hand::deal(letters.chars().filter_map(Tile::new).collect())
    }

    /// Where a selected index lands after a list-style move.
    fn remapped(index: usize, from: usize, to: usize) -> usize {
        if index == from {
            to
        } else if from < to && index > from && index <= to {
            index - 1
        } else if from > to && index < from && index >= to {
            index + 1
        } else {
            index
        }
    }

    #[test]
    fn test_deal() {
        let hand = hand_of("CRATEST");
        assert_eq!(hand.len(), 7);
        assert_eq!(hand.letters(), vec!['C', 'R', 'A', 'T', 'E', 'S', 'T']);
        assert_eq!(hand.selected_count(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut hand = hand_of("CRATEST");
        assert_eq!(hand.toggle(2), Ok(true));
        assert!(hand.is_selected(2));
        assert_eq!(hand.toggle(2), Ok(false));
        assert!(!hand.is_selected(2));
        assert_eq!(hand.letters(), vec!['C', 'R', 'A', 'T', 'E', 'S', 'T']);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut hand = hand_of("CRATEST");
        assert_eq!(
            hand.toggle(7),
            Err(RoundError::SlotOutOfRange { index: 7, len: 7 })
        );
        assert_eq!(hand.selected_count(), 0);
    }

    #[test]
    fn test_selected_word_uses_position_order() {
        let mut hand = hand_of("CXAXTXX");
        hand.toggle(4).unwrap();
        hand.toggle(0).unwrap();
        hand.toggle(2).unwrap();
        assert_eq!(hand.selected_indices(), vec![0, 2, 4]);
        assert_eq!(hand.selected_word(), "CAT");
    }

    #[test]
    fn test_reorder_moves_and_shifts() {
        let mut hand = hand_of("ABCDEFG");
        hand.reorder(1, 4).unwrap();
        assert_eq!(hand.letters(), vec!['A', 'C', 'D', 'E', 'B', 'F', 'G']);
        hand.reorder(5, 0).unwrap();
        assert_eq!(hand.letters(), vec!['F', 'A', 'C', 'D', 'E', 'B', 'G']);
    }

    #[test]
    fn test_reorder_selection_follows_tiles() {
        let mut hand = hand_of("ABCDEFG");
        hand.toggle(1).unwrap(); // B
        hand.toggle(3).unwrap(); // D
        hand.toggle(6).unwrap(); // G
        hand.reorder(1, 4).unwrap();
        // A C D E B F G
        assert_eq!(hand.selected_indices(), vec![2, 4, 6]);
        assert_eq!(hand.selected_word(), "DBG");
    }

    #[test]
    fn test_reorder_same_position() {
        let mut hand = hand_of("ABCDEFG");
        hand.toggle(3).unwrap();
        hand.reorder(3, 3).unwrap();
        assert_eq!(hand.letters(), vec!['A', 'B', 'C', 'D', 'E', 'F', 'G']);
        assert_eq!(hand.selected_indices(), vec![3]);
    }

    #[test]
    fn test_reorder_out_of_range_leaves_hand() {
        let mut hand = hand_of("ABCDEFG");
        hand.toggle(0).unwrap();
        assert!(hand.reorder(0, 9).is_err());
        assert!(hand.reorder(9, 0).is_err());
        assert_eq!(hand.letters(), vec!['A', 'B', 'C', 'D', 'E', 'F', 'G']);
        assert_eq!(hand.selected_indices(), vec![0]);
    }

    #[test]
    fn test_replace_selected() {
        let mut hand = hand_of("ABCDEFG");
        hand.toggle(5).unwrap();
        hand.toggle(1).unwrap();
        let mut outgoing = Vec::new();
        let mut supply = "XY".chars().filter_map(Tile::new);
        hand.replace_selected(|old| {
            outgoing.push(old.letter());
            supply.next().unwrap()
        });
        assert_eq!(outgoing, vec!['B', 'F']);
        assert_eq!(hand.letters(), vec!['A', 'X', 'C', 'D', 'E', 'Y', 'G']);
        assert_eq!(hand.selected_count(), 0);
        assert_eq!(hand.len(), 7);
    }

    #[test]
    fn test_replacement_is_not_selected() {
        let mut hand = hand_of("ABCDEFG");
        hand.toggle(0).unwrap();
        hand.replace_selected(|_| Tile::new('Z').unwrap());
        assert!(!hand.is_selected(0));
        assert_eq!(hand.toggle(0), Ok(true));
    }

    proptest! {
        #[test]
        fn prop_reorder_keeps_selected_tiles(
            mask in proptest::collection::vec(any::<bool>(), 7),
            from in 0usize..7,
            to in 0usize..7,
        ) {
            let mut hand = hand_of("ABCDEFG");
            for (i, on) in mask.iter().enumerate() {
                if *on {
                    hand.toggle(i).unwrap();
                }
            }
            let before_indices = hand.selected_indices();
            let mut before_letters: Vec<char> =
                before_indices.iter().map(|&i| hand.letters()[i]).collect();

            hand.reorder(from, to).unwrap();

            let mut after_letters: Vec<char> = hand
                .selected_indices()
                .iter()
                .map(|&i| hand.letters()[i])
                .collect();
            before_letters.sort_unstable();
            after_letters.sort_unstable();
            prop_assert_eq!(before_letters, after_letters);

            let mut expected: Vec<usize> = before_indices
                .iter()
                .map(|&i| remapped(i, from, to))
                .collect();
            expected.sort_unstable();
            prop_assert_eq!(hand.selected_indices(), expected);
        }

        #[test]
        fn prop_reorder_sequence_preserves_multiset(
            moves in proptest::collection::vec((0usize..7, 0usize..7), 0..20),
        ) {
            let mut hand = hand_of("QUIZBAG");
            hand.toggle(0).unwrap();
            for (from, to) in moves {
                hand.reorder(from, to).unwrap();
            }
            let mut letters = hand.letters();
            letters.sort_unstable();
            prop_assert_eq!(letters, vec!['A', 'B', 'G', 'I', 'Q', 'U', 'Z']);
            prop_assert_eq!(hand.selected_word(), "Q");
        }
    }
}
