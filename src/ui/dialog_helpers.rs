//! Dialog rendering helper utilities.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::Theme;

/// Pre-computed styles for dialog rendering.
pub struct DialogStyles {
    pub border: Style,
    pub title: Style,
    pub text: Style,
    pub button_focused: Style,
    pub help: Style,
    pub bg: Style,
}

impl DialogStyles {
    pub fn new(theme: &Theme) -> Self {
        let bg = theme.dialog_bg;
        Self {
            border: Style::default().fg(theme.dialog_border).bg(bg),
            title: Style::default().bg(bg).fg(theme.dialog_title).add_modifier(Modifier::BOLD),
            text: Style::default().bg(bg).fg(theme.dialog_text),
            button_focused: Style::default()
                .fg(theme.dialog_button_focused_fg)
                .bg(theme.dialog_button_focused_bg)
                .add_modifier(Modifier::BOLD),
            help: Style::default().bg(bg).fg(theme.dialog_help),
            bg: Style::default().bg(bg),
        }
    }
}

/// Helper functions for dialog rendering.
pub struct DialogRenderer;

impl DialogRenderer {
    /// Centered dialog area, or None if `area` cannot hold it.
    pub fn center_dialog(area: Rect, width: u16, height: u16, min_width: u16) -> Option<Rect> {
        if area.width < min_width || area.height < height {
            return None;
        }

        let dialog_width = width.min(area.width.saturating_sub(4)).max(min_width.min(area.width));
        let x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;

        Some(Rect::new(x, y, dialog_width, height))
    }

    pub fn fill_background(area: Rect, buf: &mut Buffer, style: Style) {
        for row in area.top()..area.bottom() {
            for col in area.left()..area.right() {
                buf[(col, row)].set_char(' ').set_style(style);
            }
        }
    }

    /// Rounded box-drawing border around `area`.
    pub fn draw_border(area: Rect, buf: &mut Buffer, style: Style) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let (left, right) = (area.left(), area.right() - 1);
        let (top, bottom) = (area.top(), area.bottom() - 1);

        buf[(left, top)].set_char('╭').set_style(style);
        buf[(right, top)].set_char('╮').set_style(style);
        buf[(left, bottom)].set_char('╰').set_style(style);
        buf[(right, bottom)].set_char('╯').set_style(style);
        for col in left + 1..right {
            buf[(col, top)].set_char('─').set_style(style);
            buf[(col, bottom)].set_char('─').set_style(style);
        }
        for row in top + 1..bottom {
            buf[(left, row)].set_char('│').set_style(style);
            buf[(right, row)].set_char('│').set_style(style);
        }
    }

    /// Draw centered title on the top border.
    pub fn draw_title(area: Rect, buf: &mut Buffer, title: &str, style: Style) {
        let title_x = area.x + (area.width.saturating_sub(title.chars().count() as u16)) / 2;
        buf.set_string(title_x, area.y, title, style);
    }

    /// Draw a single centered button on row `y_offset` of the dialog.
    pub fn draw_button(area: Rect, buf: &mut Buffer, y_offset: u16, text: &str, style: Style) {
        let x = area.x + (area.width.saturating_sub(text.chars().count() as u16)) / 2;
        buf.set_string(x, area.y + y_offset, text, style);
    }

    /// Draw help text centered on the last row inside the border.
    pub fn draw_help(area: Rect, buf: &mut Buffer, text: &str, style: Style) {
        let help_x = area.x + (area.width.saturating_sub(text.chars().count() as u16)) / 2;
        buf.set_string(help_x, area.y + area.height - 2, text, style);
    }
}
