//! UI Components
//!
//! Reusable TUI widgets for the analyzer.

pub mod help;
pub mod input_field;
pub mod layout;
pub mod meter;
pub mod options;
pub mod report;
pub mod statusline;

// Re-exports
pub use help::HelpScreen;
pub use input_field::PasswordField;
pub use meter::EntropyMeter;
pub use options::{GeneratorForm, OptionsPanel};
pub use report::{ReportPanel, StrengthReport};
pub use statusline::{HelpBar, MessageType, StatusLine};
