//! Input Modes
//!
//! Modal state machine for the vim-style interface.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Browsing: single-key commands.
    Normal,
    /// Editing the password under analysis.
    Insert,
    /// Driving the generation form.
    Options,
    /// Key-binding overlay.
    Help,
}

impl InputMode {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Options => "OPTIONS",
            Self::Help => "HELP",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ModeState {
    pub mode: InputMode,
}

impl Default for InputMode {
    fn default() -> Self {
        Self::Normal
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_normal(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn to_insert(&mut self) {
        self.mode = InputMode::Insert;
    }

    pub fn to_options(&mut self) {
        self.mode = InputMode::Options;
    }

    pub fn to_help(&mut self) {
        self.mode = InputMode::Help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_transitions() {
        let mut state = ModeState::new();
        assert_eq!(state.mode, InputMode::Normal);

        state.to_insert();
        assert_eq!(state.mode, InputMode::Insert);

        state.to_options();
        assert_eq!(state.mode, InputMode::Options);

        state.to_normal();
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_indicators() {
        assert_eq!(InputMode::Normal.indicator(), "NORMAL");
        assert_eq!(InputMode::Insert.indicator(), "INSERT");
        assert_eq!(InputMode::Options.indicator(), "OPTIONS");
        assert_eq!(InputMode::Help.indicator(), "HELP");
    }
}
