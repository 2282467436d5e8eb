use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::AmberNight;

pub struct DetailWidget;

impl DetailWidget {
    /// Centered overlay with the selected card's full record
    pub fn render(frame: &mut Frame, app: &App) {
        let Some(entry) = app.selected_entry() else {
            return;
        };

        let area = centered_rect(50, 60, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Card ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(AmberNight::ACCENT))
            .style(Style::default().bg(AmberNight::BG2));

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                entry.script().to_string(),
                Style::default()
                    .fg(AmberNight::FG0)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                entry.transliteration().to_string(),
                Style::default().fg(AmberNight::ACCENT),
            )),
        ];

        if let Some(translation) = entry.translation() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                translation.to_string(),
                Style::default().fg(AmberNight::FG1),
            )));
        }

        for part in entry.breakdown() {
            lines.push(Line::from(Span::styled(
                format!("  {}", part),
                Style::default().fg(AmberNight::GREY1),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "p:speak  t:transliteration  esc:close",
            Style::default().fg(AmberNight::GREY0),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// A rect centered in `area`, sized as a percentage of it
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
