//! High-score persistence.
//!
//! A small JSON file in the data directory, keyed by quiz kind. Storage
//! failures are logged and swallowed; losing a high score must never take
//! the app down.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::quiz::QuizKind;

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    scores: HashMap<String, u32>,
}

impl ScoreStore {
    /// Load the store, falling back to empty on a missing or corrupt file
    pub fn load(path: &Path) -> Self {
        let scores = match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(scores) => scores,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt score file, starting fresh");
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read score file");
                HashMap::new()
            }
        };

        Self {
            path: path.to_path_buf(),
            scores,
        }
    }

    /// Current high score for a quiz, 0 when none recorded
    pub fn get(&self, kind: QuizKind) -> u32 {
        self.scores.get(kind.key()).copied().unwrap_or(0)
    }

    /// Record a score; returns true when it beat the stored high score.
    ///
    /// Persists immediately. A write failure keeps the new value in memory
    /// and logs a warning.
    pub fn record(&mut self, kind: QuizKind, score: u32) -> bool {
        if score <= self.get(kind) {
            return false;
        }
        self.scores.insert(kind.key().to_string(), score);
        self.persist();
        true
    }

    /// Clear all stored scores
    pub fn reset(&mut self) {
        self.scores.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), error = %e, "failed to create score dir");
                return;
            }
        }
        let content = match serde_json::to_string_pretty(&self.scores) {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "failed to serialize scores");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, content) {
            warn!(path = %self.path.display(), error = %e, "failed to write score file");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kalike-scores-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let store = ScoreStore::load(Path::new("/nonexistent/kalike/scores.json"));
        assert_eq!(store.get(QuizKind::Letters), 0);
    }

    #[test]
    fn test_record_and_reload() {
        let path = temp_path("roundtrip");
        let mut store = ScoreStore::load(&path);
        assert!(store.record(QuizKind::Words, 12));

        let reloaded = ScoreStore::load(&path);
        assert_eq!(reloaded.get(QuizKind::Words), 12);
        assert_eq!(reloaded.get(QuizKind::Letters), 0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_record_only_improvements() {
        let path = temp_path("improve");
        let mut store = ScoreStore::load(&path);
        assert!(store.record(QuizKind::Letters, 5));
        assert!(!store.record(QuizKind::Letters, 5));
        assert!(!store.record(QuizKind::Letters, 3));
        assert!(store.record(QuizKind::Letters, 8));
        assert_eq!(store.get(QuizKind::Letters), 8);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{ not json").unwrap();
        let store = ScoreStore::load(&path);
        assert_eq!(store.get(QuizKind::Sentences), 0);

        let _ = std::fs::remove_file(&path);
    }
}
