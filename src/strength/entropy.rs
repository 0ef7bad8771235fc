//! Entropy Estimation
//!
//! Classifies which ASCII character classes a password draws from, derives
//! an effective alphabet size, and reports Shannon-style entropy as
//! `length * log2(pool)`.

use super::StrengthConfig;

/// Which character classes are present in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    /// Anything outside `[A-Za-z0-9]`: punctuation, whitespace, and
    /// non-ASCII alike.
    pub special: bool,
}

/// Detect class presence with a single scan.
pub fn classify(password: &str) -> CharClasses {
    let mut classes = CharClasses::default();
    for c in password.chars() {
        if c.is_ascii_lowercase() {
            classes.lower = true;
        } else if c.is_ascii_uppercase() {
            classes.upper = true;
        } else if c.is_ascii_digit() {
            classes.digit = true;
        } else {
            classes.special = true;
        }
    }
    classes
}

/// Effective alphabet size for the detected classes.
///
/// A profile with no detected class falls back to the lowercase pool; the
/// empty password never reaches this (see [`estimate_entropy`]).
pub fn pool_size(classes: CharClasses, config: &StrengthConfig) -> u32 {
    let mut pool = 0;
    if classes.lower {
        pool += config.lowercase_pool;
    }
    if classes.upper {
        pool += config.uppercase_pool;
    }
    if classes.digit {
        pool += config.digit_pool;
    }
    if classes.special {
        pool += config.special_pool;
    }

    if pool == 0 {
        return config.lowercase_pool;
    }
    pool
}

/// Entropy estimate for a password.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyEstimate {
    /// `length * log2(pool_size)`, in bits.
    pub bits: f64,
    pub pool_size: u32,
}

/// Estimate password entropy from length and apparent character pool.
///
/// The empty password reports zero bits over a zero pool; letting it fall
/// through classification would default the pool to lowercase and falsely
/// imply positive entropy at length zero.
pub fn estimate_entropy(password: &str, config: &StrengthConfig) -> EntropyEstimate {
    let length = password.chars().count();
    if length == 0 {
        return EntropyEstimate { bits: 0.0, pool_size: 0 };
    }

    let pool = pool_size(classify(password), config);
    EntropyEstimate {
        bits: length as f64 * f64::from(pool).log2(),
        pool_size: pool,
    }
}

/// Qualitative strength label for an entropy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Hex color token for display; front ends map this to whatever color
    /// type they render with.
    pub fn color_token(&self) -> &'static str {
        match self {
            Self::VeryWeak => "#FF0000",
            Self::Weak => "#FF7F00",
            Self::Moderate => "#FFFF00",
            Self::Strong => "#7FFF00",
            Self::VeryStrong => "#00FF00",
        }
    }
}

/// Map entropy to a tier. Intervals are half-open with the lower bound
/// inclusive, so exactly 40 bits is already `Weak`.
pub fn classify_strength(bits: f64, config: &StrengthConfig) -> StrengthTier {
    if bits < config.weak_bits {
        StrengthTier::VeryWeak
    } else if bits < config.moderate_bits {
        StrengthTier::Weak
    } else if bits < config.strong_bits {
        StrengthTier::Moderate
    } else if bits < config.very_strong_bits {
        StrengthTier::Strong
    } else {
        StrengthTier::VeryStrong
    }
}
