use std::time::Duration;

use crate::strength::StrengthConfig;

pub struct AppConfig {
    pub strength: StrengthConfig,
    /// Generation length bounds enforced by the form, not the engine.
    pub min_generate_length: usize,
    pub max_generate_length: usize,
    pub default_generate_length: usize,
    /// Below this many bits the report shows a "generate a stronger one"
    /// hint.
    pub low_entropy_hint_bits: f64,
    pub message_timeout: Duration,
    pub clipboard_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strength: StrengthConfig::default(),
            min_generate_length: 8,
            max_generate_length: 32,
            default_generate_length: 16,
            low_entropy_hint_bits: 75.0,
            message_timeout: Duration::from_secs(5),
            clipboard_timeout: Duration::from_secs(15),
        }
    }
}
