pub mod config;
pub mod content;
pub mod error;
pub mod quiz;
pub mod scores;
pub mod speech;

pub use config::{AppConfig, EasingType, SpeechConfig, SwitchConfig};
pub use content::{Category, ContentLibrary, Level};
pub use error::{Error, Result};
pub use quiz::{AnswerOutcome, QuizKind, QuizSession, MAX_WRONG};
pub use scores::ScoreStore;
pub use speech::{AudioSession, Synthesizer};
