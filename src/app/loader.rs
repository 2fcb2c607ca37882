//! Background word list loading
//!
//! The round can start before the word list is read. A loader thread reads
//! the file, fills the shared dictionary, and reports the outcome over a
//! channel that the UI polls once per tick.

use crate::game::{SharedDictionary, WordList};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Errors that can occur while loading the word list.
#[derive(Debug)]
pub enum DictionaryError {
    /// The file could not be read
    Io { path: PathBuf, source: io::Error },
    /// The file held no words
    Empty { path: PathBuf },
    /// The loader thread went away without reporting
    Disconnected,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryError::Io { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            DictionaryError::Empty { path } => write!(f, "{} has no words", path.display()),
            DictionaryError::Disconnected => write!(f, "dictionary loader stopped unexpectedly"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DictionaryError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Read a newline-delimited word list from disk.
pub fn load_word_list(path: &Path) -> Result<WordList, DictionaryError> {
    let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = WordList::from_text(&text);
    if words.is_empty() {
        return Err(DictionaryError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}

/// Where the word list stands, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryStatus {
    Loading,
    Loaded { words: usize },
    Failed { reason: String },
}

impl DictionaryStatus {
    /// Short label for the header
    pub fn label(&self) -> String {
        match self {
            DictionaryStatus::Loading => "Loading dictionary...".to_string(),
            DictionaryStatus::Loaded { words } => format!("{} words", words),
            DictionaryStatus::Failed { reason } => format!("No dictionary: {}", reason),
        }
    }
}

/// Handle to a running load
pub struct DictionaryLoader {
    rx: Receiver<Result<usize, DictionaryError>>,
}

impl DictionaryLoader {
    /// Start reading `path` on a background thread. On success the words are
    /// installed into `target`.
    pub fn spawn(path: PathBuf, target: SharedDictionary) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let outcome = load_word_list(&path).map(|words| {
                let count = words.len();
                // A second fill is ignored; the first list stays in place.
                let _ = target.fill(words);
                count
            });
            let _ = tx.send(outcome);
        });
        Self { rx }
    }

    /// Check for a finished load without blocking.
    pub fn poll(&self) -> Option<Result<usize, DictionaryError>> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(DictionaryError::Disconnected)),
        }
    }

    /// Block until the load finishes.
    #[cfg(test)]
    pub fn wait(self) -> Result<usize, DictionaryError> {
        self.rx.recv().unwrap_or(Err(DictionaryError::Disconnected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dictionary::Dictionary;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "scrabblatro-{}-{}.txt",
            name,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_word_list() {
        let path = temp_file("load", "cat\ndog\n");
        let words = load_word_list(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("CAT"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file() {
        let path = PathBuf::from("/nonexistent/scrabblatro/words.txt");
        let err = load_word_list(&path).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().starts_with("could not read /nonexistent/scrabblatro/words.txt"));
    }

    #[test]
    fn test_empty_file() {
        let path = temp_file("empty", "\n\n");
        let err = load_word_list(&path).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty { .. }));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_spawn_fills_shared_dictionary() {
        let path = temp_file("spawn", "cat\ndog\nquiz\n");
        let shared = SharedDictionary::new();
        let loader = DictionaryLoader::spawn(path.clone(), shared.clone());
        assert_eq!(loader.wait().unwrap(), 3);
        assert!(shared.is_loaded());
        assert!(shared.contains("QUIZ"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_spawn_reports_failure() {
        let shared = SharedDictionary::new();
        let loader = DictionaryLoader::spawn(PathBuf::from("/nonexistent/words.txt"), shared.clone());
        assert!(loader.wait().is_err());
        assert!(!shared.is_loaded());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(DictionaryStatus::Loading.label(), "Loading dictionary...");
        assert_eq!(DictionaryStatus::Loaded { words: 12 }.label(), "12 words");
        assert_eq!(
            DictionaryStatus::Failed {
                reason: "gone".to_string()
            }
            .label(),
            "No dictionary: gone"
        );
    }
}
