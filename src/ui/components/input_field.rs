//! Password input widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

pub struct PasswordField<'a> {
    label: &'a str,
    value: &'a str,
    cursor: usize,
    masked: bool,
    editing: bool,
}

impl<'a> PasswordField<'a> {
    pub fn new(label: &'a str, value: &'a str, cursor: usize) -> Self {
        Self {
            label,
            value,
            cursor,
            masked: true,
            editing: false,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.masked = !visible;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for PasswordField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.editing {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        buf.set_string(area.x, area.y, self.label, label_style);

        let input_y = area.y + 1;
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, input_y)) {
                cell.set_bg(Color::DarkGray);
            }
        }

        let char_count = self.value.chars().count();
        let display: String = if self.masked {
            "•".repeat(char_count)
        } else {
            self.value.to_string()
        };

        // Keep the cursor in view when the value overflows the field.
        let width = area.width as usize;
        let scroll = if self.editing && self.cursor + 1 > width {
            self.cursor + 1 - width
        } else {
            0
        };
        let visible: String = display.chars().skip(scroll).take(width).collect();
        buf.set_string(area.x, input_y, &visible, Style::default().fg(Color::White));

        if self.editing {
            let cursor_x = area.x + (self.cursor - scroll) as u16;
            if cursor_x < area.x + area.width {
                if let Some(cell) = buf.cell_mut((cursor_x, input_y)) {
                    cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                }
            }
        }
    }
}
