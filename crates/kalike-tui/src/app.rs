use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use kalike_core::content::CardEntry;
use kalike_core::{
    AnswerOutcome, AppConfig, AudioSession, ContentLibrary, Level, QuizKind, QuizSession,
    ScoreStore,
};

use crate::switch::SegmentedSwitch;

/// Time an answered question stays on screen before the next one
const REVEAL_DELAY: Duration = Duration::from_millis(900);

/// Top-level content screen, driven by the tab switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Letters,
    Words,
    Sentences,
}

impl Screen {
    pub fn quiz_kind(&self) -> QuizKind {
        match self {
            Screen::Letters => QuizKind::Letters,
            Screen::Words => QuizKind::Words,
            Screen::Sentences => QuizKind::Sentences,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Screen::Letters => "ಕನ್ನಡ | kannada",
            Screen::Words => "ಪದ | word",
            Screen::Sentences => "ವಾಕ್ಯ | sentence",
        }
    }
}

/// Application mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the card grid
    Normal,
    /// Typing a search query
    Search,
    /// Card detail overlay for the selected entry
    Detail,
    /// Quiz for the current screen
    Quiz,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub library: Arc<ContentLibrary>,
    /// Screen tabs: Letters | Words | Sentences
    pub tabs: SegmentedSwitch,
    /// Vowels | Consonants
    pub letters_switch: SegmentedSwitch,
    /// Lvl 1 | Lvl 2 | Lvl 3 (words)
    pub words_switch: SegmentedSwitch,
    /// Lvl 1 | Lvl 2 | Lvl 3 (sentences)
    pub sentences_switch: SegmentedSwitch,
    pub mode: Mode,
    pub search_query: String,
    /// Cursor into the filtered card list
    pub cursor: usize,
    pub show_transliteration: bool,
    pub quiz: Option<QuizSession>,
    /// High score for the running quiz, loaded when it starts
    pub quiz_high: u32,
    /// When to advance past an answered question
    advance_at: Option<Instant>,
    pub scores: ScoreStore,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Playback in flight; replacing it stops the previous sound
    pub current_audio: Option<AudioSession>,
    rng: StdRng,
}

impl App {
    pub fn new(config: Arc<AppConfig>, library: Arc<ContentLibrary>, scores: ScoreStore) -> Self {
        let switch = &config.switch;
        let tabs = SegmentedSwitch::new(
            vec!["Letters".into(), "Words".into(), "Sentences".into()],
            0,
            switch,
        );
        let letters_switch =
            SegmentedSwitch::new(vec!["Vowels".into(), "Consonants".into()], 0, switch);
        let level_labels: Vec<String> = Level::ALL.iter().map(|l| l.label().to_string()).collect();
        let words_switch = SegmentedSwitch::new(level_labels.clone(), 0, switch);
        let sentences_switch = SegmentedSwitch::new(level_labels, 0, switch);

        Self {
            show_transliteration: config.ui.show_transliteration,
            config,
            library,
            tabs,
            letters_switch,
            words_switch,
            sentences_switch,
            mode: Mode::Normal,
            search_query: String::new(),
            cursor: 0,
            quiz: None,
            quiz_high: 0,
            advance_at: None,
            scores,
            status_message: None,
            should_quit: false,
            current_audio: None,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn screen(&self) -> Screen {
        match self.tabs.active_index() {
            0 => Screen::Letters,
            1 => Screen::Words,
            _ => Screen::Sentences,
        }
    }

    /// The category switch shown on the current screen
    pub fn category_switch(&self) -> &SegmentedSwitch {
        match self.screen() {
            Screen::Letters => &self.letters_switch,
            Screen::Words => &self.words_switch,
            Screen::Sentences => &self.sentences_switch,
        }
    }

    pub fn category_switch_mut(&mut self) -> &mut SegmentedSwitch {
        match self.screen() {
            Screen::Letters => &mut self.letters_switch,
            Screen::Words => &mut self.words_switch,
            Screen::Sentences => &mut self.sentences_switch,
        }
    }

    /// Difficulty level selected on the words/sentences screens
    pub fn active_level(&self) -> Level {
        let index = match self.screen() {
            Screen::Letters => 0,
            Screen::Words => self.words_switch.active_index(),
            Screen::Sentences => self.sentences_switch.active_index(),
        };
        Level::ALL[index.min(Level::ALL.len() - 1)]
    }

    /// Cards for the current screen, category and search query
    pub fn visible_entries(&self) -> Vec<&dyn CardEntry> {
        let entries: Vec<&dyn CardEntry> = match self.screen() {
            Screen::Letters => {
                let letters = if self.letters_switch.active_index() == 0 {
                    &self.library.vowels
                } else {
                    &self.library.consonants
                };
                letters.iter().map(|l| l as &dyn CardEntry).collect()
            }
            Screen::Words => self
                .library
                .words
                .level(self.active_level())
                .iter()
                .map(|w| w as &dyn CardEntry)
                .collect(),
            Screen::Sentences => self
                .library
                .sentences
                .level(self.active_level())
                .iter()
                .map(|s| s as &dyn CardEntry)
                .collect(),
        };

        entries
            .into_iter()
            .filter(|e| e.matches(&self.search_query))
            .collect()
    }

    pub fn selected_entry(&self) -> Option<&dyn CardEntry> {
        self.visible_entries().into_iter().nth(self.cursor)
    }

    /// Move the grid cursor by a row/column delta, clamped to the list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_entries().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, len as isize - 1) as usize;
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_entries().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Switch the top-level screen
    pub fn select_tab(&mut self, index: usize) {
        if let Some(event) = self.tabs.select(index) {
            self.cursor = 0;
            self.search_query.clear();
            self.set_status(format!("Showing {}", event.label));
        }
    }

    /// Switch the category within the current screen
    pub fn select_category(&mut self, index: usize) {
        if let Some(event) = self.category_switch_mut().select(index) {
            self.cursor = 0;
            self.set_status(format!("Showing {}", event.label));
        }
    }

    pub fn next_category(&mut self) {
        if self.category_switch_mut().next().is_some() {
            self.cursor = 0;
        }
    }

    pub fn prev_category(&mut self) {
        if self.category_switch_mut().prev().is_some() {
            self.cursor = 0;
        }
    }

    pub fn toggle_transliteration(&mut self) {
        self.show_transliteration = !self.show_transliteration;
        let state = if self.show_transliteration { "on" } else { "off" };
        self.set_status(format!("Transliteration {}", state));
    }

    /// Start the quiz for the current screen and level
    pub fn start_quiz(&mut self) {
        let kind = self.screen().quiz_kind();
        let session = match self.screen() {
            Screen::Letters => QuizSession::letters(&self.library, &mut self.rng),
            Screen::Words => QuizSession::words(&self.library, self.active_level(), &mut self.rng),
            Screen::Sentences => {
                QuizSession::sentences(&self.library, self.active_level(), &mut self.rng)
            }
        };
        self.quiz_high = self.scores.get(kind);
        self.quiz = Some(session);
        self.advance_at = None;
        self.mode = Mode::Quiz;
    }

    /// Answer the current quiz question by option index
    pub fn answer_quiz(&mut self, index: usize) {
        let Some(session) = self.quiz.as_mut() else {
            return;
        };
        match session.answer(index) {
            AnswerOutcome::Correct => {
                self.advance_at = Some(Instant::now() + REVEAL_DELAY);
            }
            AnswerOutcome::Wrong { .. } => {
                self.advance_at = Some(Instant::now() + REVEAL_DELAY);
            }
            AnswerOutcome::GameOver { final_score } => {
                self.advance_at = None;
                let kind = session.kind();
                tracing::debug!(?kind, final_score, "quiz over");
                if self.scores.record(kind, final_score) {
                    self.quiz_high = final_score;
                    self.set_status(format!("New high score: {}", final_score));
                }
            }
            AnswerOutcome::Ignored => {}
        }
    }

    pub fn restart_quiz(&mut self) {
        if let Some(session) = self.quiz.as_mut() {
            session.restart(&mut self.rng);
            self.advance_at = None;
        }
    }

    pub fn exit_quiz(&mut self) {
        self.quiz = None;
        self.advance_at = None;
        self.mode = Mode::Normal;
    }

    /// Per-tick housekeeping: retire finished pill transitions and advance
    /// answered quiz questions once their reveal delay has passed
    pub fn tick(&mut self) {
        self.tabs.tick();
        self.letters_switch.tick();
        self.words_switch.tick();
        self.sentences_switch.tick();

        if let Some(at) = self.advance_at {
            if Instant::now() >= at {
                self.advance_at = None;
                if let Some(session) = self.quiz.as_mut() {
                    session.advance(&mut self.rng);
                }
            }
        }
    }

    /// True while any pill is mid-transition; the event loop switches to
    /// the animation frame rate
    pub fn needs_fast_tick(&self) -> bool {
        self.tabs.is_animating()
            || self.letters_switch.is_animating()
            || self.words_switch.is_animating()
            || self.sentences_switch.is_animating()
    }

    /// Text the speech engine should say for the current selection
    pub fn speak_target(&self) -> Option<String> {
        match self.mode {
            Mode::Quiz => self
                .quiz
                .as_ref()
                .and_then(|s| s.question())
                .map(|q| q.spoken.clone()),
            _ => self.selected_entry().map(|e| e.spoken().to_string()),
        }
    }

    pub fn is_input_mode(&self) -> bool {
        self.mode == Mode::Search
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = Arc::new(AppConfig::default());
        let library = Arc::new(ContentLibrary::load_default().unwrap());
        let scores = ScoreStore::load(std::path::Path::new("/nonexistent/scores.json"));
        App::new(config, library, scores)
    }

    #[test]
    fn test_initial_screen_is_letters() {
        let app = app();
        assert_eq!(app.screen(), Screen::Letters);
        assert_eq!(app.mode, Mode::Normal);
        assert!(!app.visible_entries().is_empty());
    }

    #[test]
    fn test_tab_switch_resets_cursor_and_query() {
        let mut app = app();
        app.cursor = 3;
        app.search_query = "ka".into();
        app.select_tab(1);
        assert_eq!(app.screen(), Screen::Words);
        assert_eq!(app.cursor, 0);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_category_switch_changes_visible_letters() {
        let mut app = app();
        let vowel_count = app.visible_entries().len();
        app.select_category(1);
        let consonant_count = app.visible_entries().len();
        assert_eq!(vowel_count, app.library.vowels.len());
        assert_eq!(consonant_count, app.library.consonants.len());
    }

    #[test]
    fn test_search_filters_entries() {
        let mut app = app();
        app.search_query = "ai".into();
        let matches = app.visible_entries();
        assert!(!matches.is_empty());
        assert!(matches.iter().all(|e| e.matches("ai")));
    }

    #[test]
    fn test_cursor_clamps_to_list() {
        let mut app = app();
        let len = app.visible_entries().len();
        app.move_cursor(1000);
        assert_eq!(app.cursor, len - 1);
        app.move_cursor(-1000);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_start_quiz_enters_quiz_mode() {
        let mut app = app();
        app.start_quiz();
        assert_eq!(app.mode, Mode::Quiz);
        let session = app.quiz.as_ref().unwrap();
        assert_eq!(session.kind(), QuizKind::Letters);
        assert!(session.question().is_some());
    }

    #[test]
    fn test_quiz_answer_schedules_advance() {
        let mut app = app();
        app.start_quiz();
        let correct = app.quiz.as_ref().unwrap().correct_index().unwrap();
        app.answer_quiz(correct);
        assert_eq!(app.quiz.as_ref().unwrap().score(), 1);
        assert!(app.advance_at.is_some());
    }

    #[test]
    fn test_exit_quiz_returns_to_normal() {
        let mut app = app();
        app.start_quiz();
        app.exit_quiz();
        assert_eq!(app.mode, Mode::Normal);
        assert!(app.quiz.is_none());
    }

    #[test]
    fn test_speak_target_follows_selection() {
        let app = app();
        let spoken = app.speak_target().unwrap();
        assert_eq!(spoken, app.library.vowels[0].spoken_form());
    }

    #[test]
    fn test_word_screen_levels() {
        let mut app = app();
        app.select_tab(1);
        assert_eq!(app.active_level(), Level::One);
        app.select_category(2);
        assert_eq!(app.active_level(), Level::Three);
        assert_eq!(
            app.visible_entries().len(),
            app.library.words.level3.len()
        );
    }
}
