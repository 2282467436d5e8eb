use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::theme::AmberNight;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Search => "SEARCH",
            Mode::Detail => "DETAIL",
            Mode::Quiz => "QUIZ",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | {} cards",
                mode_str,
                app.screen().header(),
                app.visible_entries().len()
            )
        };

        let help_hint = match app.mode {
            Mode::Quiz => " 1-4:answer p:speak r:restart esc:back ",
            Mode::Search => " type to filter  enter:done esc:cancel ",
            Mode::Detail => " p:speak t:translit esc:close ",
            Mode::Normal => " q:quit tab:screen [ ]:category /:search g:quiz p:speak ",
        };

        let padding_len = padding(area.width, &status_text, help_hint);

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(AmberNight::FG0).bg(AmberNight::BG2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(AmberNight::BG2)),
            Span::styled(
                help_hint,
                Style::default().fg(AmberNight::GREY0).bg(AmberNight::BG2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Columns of filler between the status text and the right-aligned hint.
///
/// Display width, not byte length: the screen headers carry Kannada glyphs
/// where the two differ badly.
fn padding(total: u16, status: &str, hint: &str) -> usize {
    (total as usize).saturating_sub(status.width() + hint.width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_uses_display_width() {
        // "ಕನ್ನಡ" is 15 bytes but far fewer columns wide.
        let status = " NORMAL | ಕನ್ನಡ | kannada";
        let hint = " q:quit ";
        let pad = padding(80, status, hint);
        assert_eq!(pad, 80 - status.width() - hint.width());
        assert!(pad > 80usize.saturating_sub(status.len() + hint.len()));
    }

    #[test]
    fn test_padding_saturates_when_too_narrow() {
        assert_eq!(padding(4, "a long status", "hint"), 0);
    }
}
