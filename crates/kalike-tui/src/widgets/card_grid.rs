use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::AmberNight;

/// Rows a single card occupies, border included
const CARD_HEIGHT: u16 = 4;

pub struct CardGridWidget;

impl CardGridWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let entries = app.visible_entries();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(AmberNight::GREY0))
            .style(Style::default().bg(AmberNight::BG0));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if entries.is_empty() {
            let empty = Paragraph::new("no matches")
                .alignment(Alignment::Center)
                .style(Style::default().fg(AmberNight::GREY0));
            frame.render_widget(empty, inner);
            return;
        }

        let columns = app.config.ui.grid_columns.max(1);
        let card_width = inner.width / columns;
        if card_width == 0 || inner.height < CARD_HEIGHT {
            return;
        }
        let visible_rows = inner.height / CARD_HEIGHT;

        // Keep the cursor's row on screen.
        let cursor_row = (app.cursor as u16) / columns;
        let first_row = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

        for (i, entry) in entries.iter().enumerate() {
            let row = (i as u16) / columns;
            let col = (i as u16) % columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }

            let rect = Rect::new(
                inner.x + col * card_width,
                inner.y + (row - first_row) * CARD_HEIGHT,
                card_width,
                CARD_HEIGHT,
            );

            let selected = i == app.cursor;
            let (border, bg) = if selected {
                (AmberNight::ACCENT, AmberNight::SELECTION)
            } else {
                (AmberNight::GREY0, AmberNight::CARD)
            };

            let mut lines = vec![Line::from(Span::styled(
                entry.script().to_string(),
                Style::default().fg(AmberNight::FG0),
            ))];
            if app.show_transliteration {
                lines.push(Line::from(Span::styled(
                    entry.transliteration().to_string(),
                    Style::default().fg(AmberNight::GREY1),
                )));
            }

            let card = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(border))
                        .style(Style::default().bg(bg)),
                );
            frame.render_widget(card, rect);
        }
    }
}
