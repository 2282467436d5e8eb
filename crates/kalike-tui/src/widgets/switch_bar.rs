//! Segmented switch bar: equal-width segments over a track, with the
//! animated pill painted behind the labels.

use ratatui::{buffer::Buffer, layout::Rect, Frame};
use unicode_width::UnicodeWidthStr;

use crate::switch::SegmentedSwitch;
use crate::theme::AmberNight;

pub struct SwitchBarWidget;

impl SwitchBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, switch: &mut SegmentedSwitch) {
        Self::draw(frame.buffer_mut(), area, switch);
    }

    /// Like [`render`](Self::render), but with bracketed action hints
    /// flanking the segments, one slot per side.
    pub fn render_with_hints(
        frame: &mut Frame,
        area: Rect,
        switch: &mut SegmentedSwitch,
        left: &str,
        right: &str,
    ) {
        Self::draw_with_hints(frame.buffer_mut(), area, switch, left, right);
    }

    pub fn draw_with_hints(
        buf: &mut Buffer,
        area: Rect,
        switch: &mut SegmentedSwitch,
        left: &str,
        right: &str,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let left_slot = format!("[{}] ", left);
        let right_slot = format!(" [{}]", right);
        let lw = left_slot.width() as u16;
        let rw = right_slot.width() as u16;

        // Too narrow for the slots: the segments win.
        if area.width <= lw + rw + 4 {
            Self::draw(buf, area, switch);
            return;
        }

        Self::draw_text(buf, area.x, area.y, &left_slot);
        Self::draw_text(buf, area.x + area.width - rw, area.y, &right_slot);

        let track = Rect::new(area.x + lw, area.y, area.width - lw - rw, area.height);
        Self::draw(buf, track, switch);
    }

    fn draw_text(buf: &mut Buffer, x: u16, y: u16, text: &str) {
        let mut col = x;
        for ch in text.chars() {
            let cell = &mut buf[(col, y)];
            cell.set_char(ch);
            cell.set_fg(AmberNight::GREY1);
            cell.set_bg(AmberNight::BG0);
            col += 1;
        }
    }

    /// Paint one row: track, pill, then labels.
    ///
    /// Each segment's box is reported back to the switch every frame, so
    /// the pill geometry always reflects the live terminal width.
    pub fn draw(buf: &mut Buffer, area: Rect, switch: &mut SegmentedSwitch) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = area.width as f64;
        let count = switch.segment_count();

        // Equal division with remainders spread over the early segments,
        // mirroring how the layout fallback divides the container.
        let mut edges = Vec::with_capacity(count + 1);
        for i in 0..=count {
            edges.push((i as f64 * width / count as f64).floor());
        }
        for i in 0..count {
            switch.record_layout(i, edges[i], edges[i + 1] - edges[i]);
        }

        let pill = switch.pill(width);
        let pill_start = pill.x.round() as i32;
        let pill_end = (pill.x + pill.width).round() as i32;
        let pill_visible = pill.opacity > 0.0 && pill_end > pill_start;

        let y = area.y;
        for col in 0..area.width {
            let cell = &mut buf[(area.x + col, y)];
            cell.set_char(' ');
            let over_pill =
                pill_visible && (col as i32) >= pill_start && (col as i32) < pill_end;
            if over_pill {
                cell.set_bg(AmberNight::PILL);
            } else {
                cell.set_bg(AmberNight::BG1);
            }
        }

        // Labels centered per segment; glyphs over the pill flip to the
        // pill's text color so the label stays readable mid-transition.
        for (i, label) in switch.labels().to_vec().iter().enumerate() {
            let seg_x = edges[i] as u16;
            let seg_w = (edges[i + 1] - edges[i]) as u16;
            let label_w = label.width() as u16;
            if seg_w == 0 {
                continue;
            }
            let start = seg_x + seg_w.saturating_sub(label_w) / 2;

            let mut col = start;
            for ch in label.chars() {
                if col >= area.width {
                    break;
                }
                let cell = &mut buf[(area.x + col, y)];
                cell.set_char(ch);
                let over_pill =
                    pill_visible && (col as i32) >= pill_start && (col as i32) < pill_end;
                if over_pill {
                    cell.set_fg(AmberNight::PILL_TEXT);
                } else {
                    cell.set_fg(AmberNight::GREY1);
                }
                col += 1;
            }
        }
    }
}
