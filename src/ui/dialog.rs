//! Error dialog widget

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::dialog_helpers::{DialogRenderer, DialogStyles};
use super::Theme;

const MIN_WIDTH: u16 = 24;
const MAX_WIDTH: u16 = 64;
const BUTTON: &str = "[ Okay ]";
const HELP: &str = "Enter/Esc: close";

/// Modal message box for a failed browse operation
pub struct ErrorDialog<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for ErrorDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let styles = DialogStyles::new(self.theme);

        let msg_len = self.message.chars().count() as u16;
        let width = (msg_len + 4).clamp(MIN_WIDTH, MAX_WIDTH).min(area.width);
        let text_width = usize::from(width.saturating_sub(4)).max(1);
        let lines = wrap(self.message, text_width);

        // border, blank, message, blank, button, help, border
        let max_lines = usize::from(area.height.saturating_sub(6)).max(1);
        let shown = lines.len().min(max_lines);
        let height = shown as u16 + 6;

        let Some(dialog_area) = DialogRenderer::center_dialog(area, width, height, width.min(MIN_WIDTH)) else {
            return;
        };

        DialogRenderer::fill_background(dialog_area, buf, styles.bg);
        DialogRenderer::draw_border(dialog_area, buf, styles.border);
        DialogRenderer::draw_title(dialog_area, buf, " Error ", styles.title);

        for (i, line) in lines.iter().take(shown).enumerate() {
            buf.set_stringn(
                dialog_area.x + 2,
                dialog_area.y + 2 + i as u16,
                line,
                text_width,
                styles.text,
            );
        }

        DialogRenderer::draw_button(dialog_area, buf, shown as u16 + 3, BUTTON, styles.button_focused);
        DialogRenderer::draw_help(dialog_area, buf, HELP, styles.help);
    }
}

/// Split `text` into lines of at most `width` characters, breaking at
/// spaces where possible
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let mut word: Vec<char> = word.chars().collect();
        let current_len = current.chars().count();
        let sep = usize::from(current_len > 0);

        if current_len + sep + word.len() <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.extend(word);
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
        }
        while word.len() > width {
            lines.push(word.drain(..width).collect());
        }
        current.extend(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
