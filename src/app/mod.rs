//! Application State
//!
//! Ties the strength engine, modal input, and UI together. All analysis
//! goes through [`build_report`]; the engine itself never touches any state
//! held here.

mod clipboard;
mod config;
mod input;

use std::time::Instant;

use ratatui::Frame;
use zeroize::Zeroizing;

use crate::input::{ModeState, SecureInput};
use crate::strength::{
    classify_strength, estimate_crack_time, estimate_entropy, format_duration, generate_password,
    StrengthConfig,
};
use crate::ui::components::{GeneratorForm, MessageType, StrengthReport};
use crate::ui::{Renderer, UiState};

pub use clipboard::ClipboardHandle;
pub use config::AppConfig;

pub struct App {
    pub config: AppConfig,
    pub mode_state: ModeState,
    pub password: SecureInput,
    pub password_visible: bool,
    pub report: Option<StrengthReport>,
    pub form: GeneratorForm,
    pub generated: Option<Zeroizing<String>>,
    pub clipboard: ClipboardHandle,
    pub message: Option<(String, MessageType, Instant)>,
    pub should_quit: bool,
}

/// One full analysis pass: entropy, tier, crack time, formatted duration.
pub fn build_report(password: &str, config: &StrengthConfig) -> StrengthReport {
    let estimate = estimate_entropy(password, config);
    let tier = classify_strength(estimate.bits, config);
    let crack_time = estimate_crack_time(estimate.bits, config);

    StrengthReport {
        bits: estimate.bits,
        pool_size: estimate.pool_size,
        tier,
        crack_display: format_duration(crack_time),
    }
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let form = GeneratorForm::new(config.default_generate_length);

        Self {
            config,
            mode_state: ModeState::new(),
            password: SecureInput::new(),
            password_visible: false,
            report: None,
            form,
            generated: None,
            clipboard: ClipboardHandle::new(),
            message: None,
            should_quit: false,
        }
    }

    /// Re-run the engine over the current buffer. An empty buffer clears
    /// the report instead of analyzing nothing.
    pub fn analyze(&mut self) {
        if self.password.is_empty() {
            self.report = None;
            return;
        }
        self.report = Some(build_report(self.password.content(), &self.config.strength));
    }

    /// Generate from the form, reflect any fallback back into it, and feed
    /// the result through the analyzer like typed input.
    pub fn generate(&mut self) {
        let mut spec = self.form.spec();
        spec.length = spec
            .length
            .clamp(self.config.min_generate_length, self.config.max_generate_length);

        let generated = generate_password(&spec, &self.config.strength);
        if generated.fallback_applied {
            self.form.lower = true;
            self.set_message(
                "No class selected; lowercase was enabled",
                MessageType::Warning,
            );
        }

        self.password.set_content(&generated.password);
        self.analyze();
        self.generated = Some(generated.password);
    }

    pub fn use_generated(&mut self) {
        let Some(generated) = self.generated.clone() else {
            self.set_message("Nothing generated yet", MessageType::Info);
            return;
        };
        self.password.set_content(&generated);
        self.analyze();
    }

    pub fn copy_generated(&mut self) {
        let Some(generated) = self.generated.clone() else {
            self.set_message("Nothing generated yet", MessageType::Info);
            return;
        };
        match self.clipboard.copy(&generated) {
            Ok(()) => self.set_message("Generated password copied", MessageType::Success),
            Err(e) => self.set_message(&format!("Clipboard error: {e}"), MessageType::Error),
        }
    }

    pub fn clear_password(&mut self) {
        self.password.clear();
        self.report = None;
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }

    fn check_message_expiry(&mut self) {
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, at)| at.elapsed() > self.config.message_timeout);

        if expired {
            self.message = None;
        }
    }

    /// Periodic housekeeping between input events.
    pub fn tick(&mut self) {
        self.check_message_expiry();
        self.clipboard.tick(self.config.clipboard_timeout);
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let state = UiState {
            mode: self.mode_state.mode,
            password: self.password.content(),
            cursor: self.password.cursor(),
            password_visible: self.password_visible,
            report: self.report.as_ref(),
            low_entropy_hint_bits: self.config.low_entropy_hint_bits,
            form: &self.form,
            generated: self.generated.as_deref().map(String::as_str),
            message: self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t)),
        };

        Renderer::render(frame, &state);
    }
}
