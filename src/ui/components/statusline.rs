//! Status Line Component
//!
//! Mode indicator, transient messages, and the contextual key-hint bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

pub struct StatusLine<'a> {
    mode: InputMode,
    message: Option<(&'a str, MessageType)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self { mode, message: None }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }
}

fn mode_style(mode: InputMode) -> Style {
    let base = Style::default().fg(Color::Black);
    match mode {
        InputMode::Normal => base.bg(Color::Magenta),
        InputMode::Insert => base.bg(Color::Blue),
        InputMode::Options => base.bg(Color::Green),
        InputMode::Help => base.bg(Color::Yellow),
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(
            area.x,
            area.y,
            &mode_text,
            mode_style(self.mode).add_modifier(Modifier::BOLD),
        );

        if let Some((msg, msg_type)) = self.message {
            let x = area.x + mode_text.len() as u16 + 1;
            buf.set_string(
                x,
                area.y,
                msg,
                Style::default().bg(Color::DarkGray).fg(msg_type.color()),
            );
        }
    }
}

pub struct HelpBar {
    hints: Vec<(&'static str, &'static str)>,
}

impl HelpBar {
    pub fn for_mode(mode: InputMode) -> Self {
        Self { hints: hints_for_mode(mode) }
    }
}

fn hints_for_mode(mode: InputMode) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Normal => vec![
            ("i", "edit"),
            ("s", "show/hide"),
            ("o", "options"),
            ("g", "generate"),
            ("u", "use generated"),
            ("y", "copy"),
            ("?", "help"),
            ("q", "quit"),
        ],
        InputMode::Insert => vec![
            ("esc/enter", "done"),
            ("ctrl+s", "show/hide"),
            ("ctrl+u", "clear"),
        ],
        InputMode::Options => vec![
            ("tab/j/k", "field"),
            ("space", "toggle"),
            ("h/l", "length"),
            ("enter", "generate"),
            ("esc", "back"),
        ],
        InputMode::Help => vec![("esc/q/?", "close")],
    }
}

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(" {desc}"), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
