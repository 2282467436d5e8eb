use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::models::{Letter, Leveled, Sentence, Word};
use crate::{Error, Result};

/// Bundled dataset, compiled into the binary
const DEFAULT_DATASET: &str = include_str!("data/kannada.json");

/// Immutable content table, loaded once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentLibrary {
    pub vowels: Vec<Letter>,
    pub consonants: Vec<Letter>,
    #[serde(default)]
    pub words: Leveled<Word>,
    #[serde(default)]
    pub sentences: Leveled<Sentence>,
}

impl ContentLibrary {
    /// Load the embedded dataset
    pub fn load_default() -> Result<Self> {
        Self::from_json(DEFAULT_DATASET)
    }

    /// Load a dataset from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let library = Self::from_json(&content)?;
        info!(path = %path.display(), "loaded content dataset");
        Ok(library)
    }

    /// Parse and validate a dataset from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let library: ContentLibrary = serde_json::from_str(json)?;
        library.validate()?;
        Ok(library)
    }

    /// Every letter quiz draws from vowels and consonants combined
    pub fn all_letters(&self) -> Vec<&Letter> {
        self.vowels.iter().chain(self.consonants.iter()).collect()
    }

    fn validate(&self) -> Result<()> {
        if self.vowels.is_empty() {
            return Err(Error::Content("dataset has no vowels".into()));
        }
        if self.consonants.is_empty() {
            return Err(Error::Content("dataset has no consonants".into()));
        }
        if self.words.is_empty() {
            return Err(Error::Content("dataset has no words".into()));
        }
        if self.sentences.is_empty() {
            return Err(Error::Content("dataset has no sentences".into()));
        }

        for letter in self.vowels.iter().chain(self.consonants.iter()) {
            if letter.script.is_empty() || letter.transliteration.is_empty() {
                return Err(Error::Content(format!(
                    "letter entry missing script or transliteration: {:?}",
                    letter
                )));
            }
        }
        for word in self.words.all() {
            if word.script.is_empty() || word.transliteration.is_empty() {
                return Err(Error::Content(format!(
                    "word entry missing script or transliteration: {:?}",
                    word
                )));
            }
        }
        for sentence in self.sentences.all() {
            if sentence.script.is_empty() || sentence.transliteration.is_empty() {
                return Err(Error::Content(format!(
                    "sentence entry missing script or transliteration: {:?}",
                    sentence
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_loads() {
        let library = ContentLibrary::load_default().unwrap();
        assert!(library.vowels.len() >= 13);
        assert!(library.consonants.len() >= 25);
        assert!(!library.words.level1.is_empty());
        assert!(!library.words.level2.is_empty());
        assert!(!library.words.level3.is_empty());
        assert!(!library.sentences.level1.is_empty());
    }

    #[test]
    fn test_all_letters_combines_both_sets() {
        let library = ContentLibrary::load_default().unwrap();
        assert_eq!(
            library.all_letters().len(),
            library.vowels.len() + library.consonants.len()
        );
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(ContentLibrary::from_json("not json").is_err());
    }

    #[test]
    fn test_empty_category_is_rejected() {
        let err = ContentLibrary::from_json(
            r#"{"vowels": [], "consonants": [{"script": "ಕ", "transliteration": "ka"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn test_entry_missing_transliteration_is_rejected() {
        let json = r#"{
            "vowels": [{"script": "ಅ", "transliteration": ""}],
            "consonants": [{"script": "ಕ", "transliteration": "ka"}],
            "words": {"level1": [{"script": "ಅಮ್ಮ", "transliteration": "amma", "translation": "mother"}]},
            "sentences": {"level1": [{"script": "ನಮಸ್ಕಾರ", "transliteration": "namaskāra", "translation": "hello"}]}
        }"#;
        assert!(ContentLibrary::from_json(json).is_err());
    }
}
