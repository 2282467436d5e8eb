use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use kalike_core::{QuizSession, MAX_WRONG};

use crate::app::App;
use crate::theme::AmberNight;

pub struct QuizWidget;

impl QuizWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(session) = app.quiz.as_ref() else {
            return;
        };

        let block = Block::default()
            .title(format!(" {} ", session.kind().title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(AmberNight::ACCENT))
            .style(Style::default().bg(AmberNight::BG0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if session.is_game_over() {
            Self::render_game_over(frame, inner, app, session);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // score line
                Constraint::Length(3), // prompt
                Constraint::Min(4),    // options
            ])
            .split(inner);

        Self::render_score_line(frame, rows[0], app, session);

        let prompt = session
            .question()
            .map(|q| q.prompt.as_str())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                prompt.to_string(),
                Style::default()
                    .fg(AmberNight::FG0)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            rows[1],
        );

        Self::render_options(frame, rows[2], session);
    }

    fn render_score_line(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
        let strikes: String = (0..MAX_WRONG)
            .map(|i| if i < session.wrong_count() { '✗' } else { '·' })
            .collect();
        let line = Line::from(vec![
            Span::styled(
                format!(" Score {}", session.score()),
                Style::default().fg(AmberNight::FG1),
            ),
            Span::styled(
                format!("  Best {}", app.quiz_high),
                Style::default().fg(AmberNight::ACCENT),
            ),
            Span::styled(
                format!("  {}", strikes),
                Style::default().fg(AmberNight::WRONG),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_options(frame: &mut Frame, area: Rect, session: &QuizSession) {
        let correct = session.correct_index();
        let answered = session.answered();

        let lines: Vec<Line> = session
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                // After an answer: the correct option goes green, a wrong
                // pick goes red, everything else dims.
                let style = match answered {
                    Some(_) if Some(i) == correct => Style::default()
                        .fg(AmberNight::CORRECT)
                        .add_modifier(Modifier::BOLD),
                    Some(picked) if picked == i => Style::default().fg(AmberNight::WRONG),
                    Some(_) => Style::default().fg(AmberNight::GREY0),
                    None => Style::default().fg(AmberNight::FG1),
                };
                Line::from(Span::styled(format!("  {}. {}", i + 1, option), style))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_game_over(frame: &mut Frame, area: Rect, app: &App, session: &QuizSession) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Game over",
                Style::default()
                    .fg(AmberNight::WRONG)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Final score: {}", session.score()),
                Style::default().fg(AmberNight::FG0),
            )),
            Line::from(Span::styled(
                format!("Best: {}", app.quiz_high),
                Style::default().fg(AmberNight::ACCENT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "r:play again  esc:back",
                Style::default().fg(AmberNight::GREY0),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }
}
