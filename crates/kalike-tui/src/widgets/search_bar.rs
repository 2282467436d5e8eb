use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};
use crate::theme::AmberNight;

pub struct SearchBarWidget;

impl SearchBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let editing = app.mode == Mode::Search;
        let query_style = if editing {
            Style::default().fg(AmberNight::FG0).bg(AmberNight::BG1)
        } else {
            Style::default().fg(AmberNight::GREY1).bg(AmberNight::BG1)
        };

        let cursor = if editing { "▏" } else { "" };
        let line = Line::from(vec![
            Span::styled(" / ", Style::default().fg(AmberNight::ACCENT).bg(AmberNight::BG1)),
            Span::styled(format!("{}{}", app.search_query, cursor), query_style),
        ]);

        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(AmberNight::BG1)),
            area,
        );
    }
}
