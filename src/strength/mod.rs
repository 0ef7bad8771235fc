//! Password Strength Engine
//!
//! Pure, stateless estimation and generation routines. Nothing in this
//! module tree knows about rendering or terminal state; callers hand in a
//! string (or a generation spec) and a [`StrengthConfig`] and get plain
//! values back.

mod crack;
mod entropy;
mod generate;

pub use crack::{estimate_crack_time, format_duration, CrackTime};
pub use entropy::{
    classify, classify_strength, estimate_entropy, pool_size, CharClasses, EntropyEstimate,
    StrengthTier,
};
pub use generate::{generate_password, GeneratedPassword, GenerationSpec};

/// Tuning constants for estimation and generation.
///
/// Every threshold the engine consults lives here so tests and callers can
/// override them without touching engine internals. The defaults model an
/// offline attacker at one billion guesses per second.
#[derive(Debug, Clone)]
pub struct StrengthConfig {
    /// Assumed attacker guess rate for crack-time estimation.
    pub guesses_per_second: f64,
    /// Entropy above this is reported as [`CrackTime::Astronomical`] instead
    /// of being raised to a power of two.
    pub entropy_ceiling_bits: f64,
    /// Tier thresholds, lower bound inclusive.
    pub weak_bits: f64,
    pub moderate_bits: f64,
    pub strong_bits: f64,
    pub very_strong_bits: f64,
    /// Per-class pool contributions for entropy estimation.
    pub lowercase_pool: u32,
    pub uppercase_pool: u32,
    pub digit_pool: u32,
    /// Fixed approximation for the special-character alphabet; not derived
    /// from the characters actually present.
    pub special_pool: u32,
    /// Alphabet used when generation has the special class enabled.
    pub special_chars: String,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            guesses_per_second: 1_000_000_000.0,
            entropy_ceiling_bits: 256.0,
            weak_bits: 40.0,
            moderate_bits: 60.0,
            strong_bits: 80.0,
            very_strong_bits: 100.0,
            lowercase_pool: 26,
            uppercase_pool: 26,
            digit_pool: 10,
            special_pool: 33,
            special_chars: generate::SPECIAL.to_string(),
        }
    }
}
