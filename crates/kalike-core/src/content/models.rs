use serde::{Deserialize, Serialize};

/// Content category shown as a top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Vowels,
    Consonants,
    Words,
    Sentences,
}

impl Category {
    pub fn title(&self) -> &'static str {
        match self {
            Category::Vowels => "Vowels",
            Category::Consonants => "Consonants",
            Category::Words => "Words",
            Category::Sentences => "Sentences",
        }
    }
}

/// Difficulty level for words and sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    pub fn label(&self) -> &'static str {
        match self {
            Level::One => "Lvl 1",
            Level::Two => "Lvl 2",
            Level::Three => "Lvl 3",
        }
    }
}

/// A single alphabet character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letter {
    /// The character in Kannada script
    pub script: String,
    /// Form handed to the speech engine (may differ from the glyph)
    #[serde(default)]
    pub spoken: Option<String>,
    /// Romanized transliteration
    pub transliteration: String,
}

impl Letter {
    /// Text to send to the speech engine
    pub fn spoken_form(&self) -> &str {
        self.spoken.as_deref().unwrap_or(&self.script)
    }
}

/// A vocabulary word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    pub script: String,
    pub transliteration: String,
    pub translation: String,
    /// Per-syllable breakdown of the script form
    #[serde(default)]
    pub breakdown: Vec<String>,
}

/// A phrase or sentence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentence {
    pub script: String,
    pub transliteration: String,
    pub translation: String,
}

/// Entries grouped by difficulty level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leveled<T> {
    #[serde(default = "Vec::new")]
    pub level1: Vec<T>,
    #[serde(default = "Vec::new")]
    pub level2: Vec<T>,
    #[serde(default = "Vec::new")]
    pub level3: Vec<T>,
}

// Manual impl: a derived Default would demand `T: Default`, and entry types
// have no meaningful default value.
impl<T> Default for Leveled<T> {
    fn default() -> Self {
        Self {
            level1: Vec::new(),
            level2: Vec::new(),
            level3: Vec::new(),
        }
    }
}

impl<T> Leveled<T> {
    pub fn level(&self, level: Level) -> &[T] {
        match level {
            Level::One => &self.level1,
            Level::Two => &self.level2,
            Level::Three => &self.level3,
        }
    }

    /// All entries across levels, level 1 first
    pub fn all(&self) -> impl Iterator<Item = &T> {
        self.level1
            .iter()
            .chain(self.level2.iter())
            .chain(self.level3.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.level1.is_empty() && self.level2.is_empty() && self.level3.is_empty()
    }
}

/// Common view over any browsable content entry
pub trait CardEntry {
    fn script(&self) -> &str;
    fn transliteration(&self) -> &str;
    fn translation(&self) -> Option<&str>;
    /// Text handed to the speech engine
    fn spoken(&self) -> &str {
        self.script()
    }

    /// Per-syllable breakdown, where the entry has one
    fn breakdown(&self) -> &[String] {
        &[]
    }

    /// Case-insensitive substring match over all textual fields
    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.script().contains(query.as_str())
            || self.transliteration().to_lowercase().contains(&query)
            || self
                .translation()
                .is_some_and(|t| t.to_lowercase().contains(&query))
    }
}

impl CardEntry for Letter {
    fn script(&self) -> &str {
        &self.script
    }
    fn transliteration(&self) -> &str {
        &self.transliteration
    }
    fn translation(&self) -> Option<&str> {
        None
    }
    fn spoken(&self) -> &str {
        self.spoken_form()
    }
}

impl CardEntry for Word {
    fn script(&self) -> &str {
        &self.script
    }
    fn transliteration(&self) -> &str {
        &self.transliteration
    }
    fn translation(&self) -> Option<&str> {
        Some(&self.translation)
    }
    fn breakdown(&self) -> &[String] {
        &self.breakdown
    }
}

impl CardEntry for Sentence {
    fn script(&self) -> &str {
        &self.script
    }
    fn transliteration(&self) -> &str {
        &self.transliteration
    }
    fn translation(&self) -> Option<&str> {
        Some(&self.translation)
    }
}
