//! Help Overlay
//!
//! Centered popup listing every key binding.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

use super::layout::{centered_rect_fixed, create_popup_block};

const BINDINGS: &[(&str, &str)] = &[
    ("i", "Edit the password under analysis"),
    ("Esc / Enter", "Leave editing"),
    ("s / Ctrl+s", "Toggle password visibility"),
    ("o / Tab", "Open the generation options"),
    ("Space", "Toggle the highlighted class"),
    ("h / l", "Adjust the length"),
    ("g / Enter", "Generate a password"),
    ("u", "Analyze the generated password"),
    ("y", "Copy the generated password"),
    ("c", "Clear the analyzer"),
    ("?", "This help"),
    ("q / Ctrl+c", "Quit"),
];

pub struct HelpScreen;

impl Widget for HelpScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = BINDINGS.len() as u16 + 2;
        let popup = centered_rect_fixed(46, height, area);

        Clear.render(popup, buf);
        let block = create_popup_block(" Keys ", Color::Yellow);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::Gray);

        for (row, (key, desc)) in BINDINGS.iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.y + inner.height {
                break;
            }
            buf.set_string(inner.x + 1, y, key, key_style);
            buf.set_string(inner.x + 14, y, *desc, desc_style);
        }
    }
}
