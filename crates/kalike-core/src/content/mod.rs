pub mod loader;
pub mod models;

pub use loader::ContentLibrary;
pub use models::{CardEntry, Category, Letter, Level, Leveled, Sentence, Word};
