//! Screen Renderer
//!
//! Lays the single analyzer screen out of the component widgets and draws
//! the help overlay on top when requested.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    Frame,
};

use crate::input::InputMode;

use super::components::{
    EntropyMeter, GeneratorForm, HelpBar, HelpScreen, MessageType, OptionsPanel, PasswordField,
    ReportPanel, StatusLine, StrengthReport,
};

/// Everything the renderer needs for one frame, borrowed from the app.
pub struct UiState<'a> {
    pub mode: InputMode,
    pub password: &'a str,
    pub cursor: usize,
    pub password_visible: bool,
    pub report: Option<&'a StrengthReport>,
    pub low_entropy_hint_bits: f64,
    pub form: &'a GeneratorForm,
    pub generated: Option<&'a str>,
    pub message: Option<(&'a str, MessageType)>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1),
                Constraint::Length(2), // password field
                Constraint::Length(1),
                Constraint::Length(1), // entropy meter
                Constraint::Length(1),
                Constraint::Length(5), // report
                Constraint::Length(1),
                Constraint::Length(6), // generation options
                Constraint::Length(1), // generated password
                Constraint::Min(0),
                Constraint::Length(1), // statusline
                Constraint::Length(1), // help bar
            ])
            .split(area);

        render_title(frame, rows[0]);

        frame.render_widget(
            PasswordField::new("Password:", state.password, state.cursor)
                .visible(state.password_visible)
                .editing(state.mode == InputMode::Insert),
            inset(rows[2], 2),
        );

        let meter = match state.report {
            Some(report) => EntropyMeter::new(report.bits, report.tier),
            None => EntropyMeter::empty(),
        };
        frame.render_widget(meter, inset(rows[4], 2));

        frame.render_widget(
            ReportPanel::new(state.report, state.low_entropy_hint_bits),
            inset(rows[6], 2),
        );

        frame.render_widget(
            OptionsPanel::new(state.form, state.mode == InputMode::Options),
            inset(rows[8], 2),
        );

        render_generated(frame, inset(rows[9], 2), state.generated);

        let mut statusline = StatusLine::new(state.mode);
        if let Some((msg, msg_type)) = state.message {
            statusline = statusline.message(msg, msg_type);
        }
        frame.render_widget(statusline, rows[11]);
        frame.render_widget(HelpBar::for_mode(state.mode), rows[12]);

        if state.mode == InputMode::Help {
            frame.render_widget(HelpScreen, area);
        }
    }
}

fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y,
        width: area.width.saturating_sub(margin * 2),
        height: area.height,
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = " Password Entropy Analyzer ";
    let x = area.x + (area.width.saturating_sub(title.len() as u16)) / 2;
    frame.buffer_mut().set_string(
        x,
        area.y,
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    );
}

fn render_generated(frame: &mut Frame, area: Rect, generated: Option<&str>) {
    let Some(password) = generated else { return };
    let label = "Generated: ";
    let buf = frame.buffer_mut();
    buf.set_string(area.x, area.y, label, Style::default().fg(Color::Cyan));
    buf.set_string(
        area.x + label.len() as u16,
        area.y,
        password,
        Style::default().fg(Color::Green),
    );
}
