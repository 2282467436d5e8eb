//! Key handling: terminal key events become [`Action`]s based on the
//! current mode, so the event loop stays a plain match.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Grid cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// What a key press asks the app to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectTab(usize),
    NextTab,
    PrevTab,
    NextCategory,
    PrevCategory,
    Move(Direction),
    OpenDetail,
    CloseOverlay,
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    ToggleTransliteration,
    StartQuiz,
    AnswerQuiz(usize),
    RestartQuiz,
    Speak,
}

/// Map a key event to an action for the app's current mode
pub fn handle_key_event(key: KeyEvent, app: &App) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app.mode {
        Mode::Search => handle_search_key(key),
        Mode::Detail => handle_detail_key(key),
        Mode::Quiz => handle_quiz_key(key),
        Mode::Normal => handle_normal_key(key),
    }
}

fn handle_normal_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Char(c @ '1'..='3') => {
            Some(Action::SelectTab(c as usize - '1' as usize))
        }
        KeyCode::Char(']') => Some(Action::NextCategory),
        KeyCode::Char('[') => Some(Action::PrevCategory),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Enter => Some(Action::OpenDetail),
        KeyCode::Char('/') => Some(Action::StartSearch),
        KeyCode::Char('t') => Some(Action::ToggleTransliteration),
        KeyCode::Char('g') => Some(Action::StartQuiz),
        KeyCode::Char('p') => Some(Action::Speak),
        KeyCode::Esc => Some(Action::CloseOverlay),
        _ => None,
    }
}

fn handle_search_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CloseOverlay),
        KeyCode::Enter => Some(Action::SubmitSearch),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

fn handle_detail_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::CloseOverlay),
        KeyCode::Char('p') => Some(Action::Speak),
        KeyCode::Char('t') => Some(Action::ToggleTransliteration),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        _ => None,
    }
}

fn handle_quiz_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseOverlay),
        KeyCode::Char(c @ '1'..='4') => {
            Some(Action::AnswerQuiz(c as usize - '1' as usize))
        }
        KeyCode::Char('r') => Some(Action::RestartQuiz),
        KeyCode::Char('p') => Some(Action::Speak),
        _ => None,
    }
}
