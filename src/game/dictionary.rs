//! Dictionary lookup for word validation
//!
//! The round only needs to ask whether an uppercase word exists. Two sources
//! answer that: an in-memory [`WordList`], and a [`SharedDictionary`] handle
//! that starts empty and is filled once when a background load finishes.

use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::sync::Arc;

/// Answers whether an exact uppercase word is valid.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Hash set of uppercase words with O(1) lookup.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Build from a newline-delimited word list.
    /// Lines are trimmed, blank lines skipped, words stored uppercase.
    pub fn from_text(text: &str) -> Self {
        text.lines().collect()
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Cloneable handle to a word list that may not have arrived yet.
/// Every lookup fails until [`SharedDictionary::fill`] succeeds.
#[derive(Debug, Clone, Default)]
pub struct SharedDictionary {
    cell: Arc<OnceCell<WordList>>,
}

impl SharedDictionary {
    /// Create an empty handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the word list. Only the first call takes effect; a rejected
    /// list is handed back.
    pub fn fill(&self, words: WordList) -> Result<(), WordList> {
        self.cell.set(words)
    }

    /// Whether the word list has been installed.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Number of words available right now.
    pub fn word_count(&self) -> usize {
        self.cell.get().map_or(0, WordList::len)
    }
}

impl Dictionary for SharedDictionary {
    fn contains(&self, word: &str) -> bool {
        self.cell.get().is_some_and(|words| words.contains(word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text() {
        let words = WordList::from_text("cat\nDOG\n\n  bird \r\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("CAT"));
        assert!(words.contains("DOG"));
        assert!(words.contains("BIRD"));
    }

    #[test]
    fn test_lookup_is_exact_uppercase() {
        let words = WordList::from_text("cat");
        assert!(words.contains("CAT"));
        assert!(!words.contains("cat"));
        assert!(!words.contains("CATS"));
        assert!(!words.contains(""));
    }

    #[test]
    fn test_empty_list() {
        let words = WordList::default();
        assert!(words.is_empty());
        assert!(!words.contains("CAT"));
    }

    #[test]
    fn test_shared_rejects_until_filled() {
        let shared = SharedDictionary::new();
        let handle = shared.clone();
        assert!(!handle.is_loaded());
        assert!(!handle.contains("CAT"));
        assert_eq!(handle.word_count(), 0);

        shared.fill(WordList::from_text("cat\ndog")).unwrap();

        assert!(handle.is_loaded());
        assert!(handle.contains("CAT"));
        assert_eq!(handle.word_count(), 2);
    }

    #[test]
    fn test_shared_fills_once() {
        let shared = SharedDictionary::new();
        shared.fill(WordList::from_text("cat")).unwrap();
        let rejected = shared.fill(WordList::from_text("dog"));
        assert!(rejected.is_err());
        assert!(shared.contains("CAT"));
        assert!(!shared.contains("DOG"));
    }

    #[test]
    fn test_reference_is_dictionary() {
        fn lookup(d: impl Dictionary) -> bool {
            d.contains("CAT")
        }
        let words = WordList::from_text("cat");
        assert!(lookup(&words));
    }
}
