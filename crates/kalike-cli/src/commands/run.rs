use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use kalike_core::{AppConfig, ContentLibrary, ScoreStore, Synthesizer};
use kalike_tui::{
    app::{App, Mode, Screen},
    event::{AppEvent, EventHandler, SpeechResult},
    input::{handle_key_event, Action, Direction as MoveDirection},
    widgets::{
        CardGridWidget, DetailWidget, QuizWidget, SearchBarWidget, StatusBarWidget,
        SwitchBarWidget,
    },
};

pub async fn run(config: Arc<AppConfig>, content_path: Option<PathBuf>) -> Result<()> {
    let library = Arc::new(load_library(&config, content_path)?);
    let scores = ScoreStore::load(&config.scores_path());
    tracing::debug!(
        letters = library.all_letters().len(),
        "content library ready"
    );

    let synthesizer = Arc::new(Synthesizer::new(
        config.speech.clone(),
        config.speech_api_key(),
        config.data_dir().join("audio"),
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Kalike"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone(), library, scores);

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.switch.animation_fps);

    // Channel for async speech results
    let (speech_tx, mut speech_rx) = mpsc::unbounded_channel::<SpeechResult>();

    loop {
        // Process finished speech requests (non-blocking)
        while let Ok(result) = speech_rx.try_recv() {
            match result {
                SpeechResult::Started { session } => {
                    // Replacing the previous session stops its playback.
                    app.current_audio = Some(session);
                }
                SpeechResult::Failure { error } => {
                    app.set_status(format!("Speech failed: {}", error));
                }
            }
        }

        app.tick();

        terminal.draw(|frame| {
            let size = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // screen tabs
                    Constraint::Length(1), // category switch
                    Constraint::Length(1), // search bar
                    Constraint::Min(4),    // content
                    Constraint::Length(1), // status bar
                ])
                .split(size);

            SwitchBarWidget::render(frame, rows[0], &mut app.tabs);
            let category_switch = match app.screen() {
                Screen::Letters => &mut app.letters_switch,
                Screen::Words => &mut app.words_switch,
                Screen::Sentences => &mut app.sentences_switch,
            };
            SwitchBarWidget::render_with_hints(frame, rows[1], category_switch, "g quiz", "t abc");
            SearchBarWidget::render(frame, rows[2], &app);

            if app.mode == Mode::Quiz {
                QuizWidget::render(frame, rows[3], &app);
            } else {
                CardGridWidget::render(frame, rows[3], &app);
            }

            StatusBarWidget::render(frame, rows[4], &app);

            if app.mode == Mode::Detail {
                DetailWidget::render(frame, &app);
            }
        })?;

        // Faster tick rate while a pill transition is running
        let event = if app.needs_fast_tick() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    if let Some(action) = handle_key_event(key, &app) {
                        handle_action(&mut app, action, &synthesizer, &speech_tx);
                    }
                }
                AppEvent::Resize(_, _) => {
                    // Segment boxes are stale at the new width.
                    app.tabs.invalidate_layout();
                    app.letters_switch.invalidate_layout();
                    app.words_switch.invalidate_layout();
                    app.sentences_switch.invalidate_layout();
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

pub fn load_library(config: &AppConfig, content_path: Option<PathBuf>) -> Result<ContentLibrary> {
    let library = match content_path.or_else(|| config.general.content_path.clone()) {
        Some(path) => ContentLibrary::from_path(&path)?,
        None => ContentLibrary::load_default()?,
    };
    Ok(library)
}

fn handle_action(
    app: &mut App,
    action: Action,
    synthesizer: &Arc<Synthesizer>,
    speech_tx: &mpsc::UnboundedSender<SpeechResult>,
) {
    app.clear_status();

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::SelectTab(index) => {
            app.select_tab(index);
        }
        Action::NextTab => {
            let next = (app.tabs.active_index() + 1) % app.tabs.segment_count();
            app.select_tab(next);
        }
        Action::PrevTab => {
            let count = app.tabs.segment_count();
            let prev = (app.tabs.active_index() + count - 1) % count;
            app.select_tab(prev);
        }
        Action::NextCategory => {
            app.next_category();
        }
        Action::PrevCategory => {
            app.prev_category();
        }
        Action::Move(direction) => {
            let columns = app.config.ui.grid_columns.max(1) as isize;
            let delta = match direction {
                MoveDirection::Left => -1,
                MoveDirection::Right => 1,
                MoveDirection::Up => -columns,
                MoveDirection::Down => columns,
            };
            app.move_cursor(delta);
        }
        Action::OpenDetail => {
            if app.selected_entry().is_some() {
                app.mode = Mode::Detail;
            }
        }
        Action::CloseOverlay => match app.mode {
            Mode::Search => {
                app.search_query.clear();
                app.mode = Mode::Normal;
                app.clamp_cursor();
            }
            Mode::Detail => {
                app.mode = Mode::Normal;
            }
            Mode::Quiz => {
                app.exit_quiz();
            }
            Mode::Normal => {
                app.search_query.clear();
                app.clamp_cursor();
            }
        },
        Action::StartSearch => {
            app.mode = Mode::Search;
        }
        Action::SearchInput(c) => {
            app.search_query.push(c);
            app.cursor = 0;
        }
        Action::SearchBackspace => {
            app.search_query.pop();
            app.cursor = 0;
        }
        Action::SubmitSearch => {
            app.mode = Mode::Normal;
            app.clamp_cursor();
        }
        Action::ToggleTransliteration => {
            app.toggle_transliteration();
        }
        Action::StartQuiz => {
            app.start_quiz();
        }
        Action::AnswerQuiz(index) => {
            app.answer_quiz(index);
        }
        Action::RestartQuiz => {
            app.restart_quiz();
        }
        Action::Speak => {
            speak(app, synthesizer, speech_tx);
        }
    }
}

/// Kick off synthesis for the current selection as a background task
fn speak(app: &mut App, synthesizer: &Arc<Synthesizer>, tx: &mpsc::UnboundedSender<SpeechResult>) {
    if !synthesizer.is_enabled() {
        app.set_status("Speech not configured (set speech.api_key or KALIKE_SPEECH_KEY)");
        return;
    }
    let Some(text) = app.speak_target() else {
        app.set_status("Nothing to speak");
        return;
    };

    let synthesizer = synthesizer.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        match synthesizer.speak(&text, None).await {
            Ok(session) => {
                let _ = tx.send(SpeechResult::Started { session });
            }
            Err(e) => {
                let _ = tx.send(SpeechResult::Failure {
                    error: e.to_string(),
                });
            }
        }
    });
}
