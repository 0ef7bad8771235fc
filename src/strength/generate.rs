//! Password Generation
//!
//! Uniform random passwords over the union of the enabled character
//! classes, drawn from OS-level entropy.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use zeroize::Zeroizing;

use super::StrengthConfig;

pub(super) const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub(super) const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub(super) const DIGITS: &str = "0123456789";
pub(super) const SPECIAL: &str = "!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// Which character classes to draw from, and how many characters to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSpec {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
}

impl Default for GenerationSpec {
    fn default() -> Self {
        Self {
            length: 16,
            upper: true,
            lower: true,
            digits: true,
            special: true,
        }
    }
}

/// A generated password, with a flag telling the caller whether the
/// lowercase fallback was substituted for an empty class selection.
#[derive(Debug)]
pub struct GeneratedPassword {
    pub password: Zeroizing<String>,
    pub fallback_applied: bool,
}

/// Generate a password by drawing `spec.length` characters independently
/// and uniformly (with replacement) from the union alphabet.
///
/// An empty class selection falls back to the lowercase alphabet and sets
/// `fallback_applied` so the caller can reflect the substitution. Per-class
/// sampling is not guaranteed: a password generated with a class enabled
/// may still omit that class entirely.
pub fn generate_password(spec: &GenerationSpec, config: &StrengthConfig) -> GeneratedPassword {
    let mut alphabet = String::new();
    if spec.upper {
        alphabet.push_str(UPPERCASE);
    }
    if spec.lower {
        alphabet.push_str(LOWERCASE);
    }
    if spec.digits {
        alphabet.push_str(DIGITS);
    }
    if spec.special {
        alphabet.push_str(&config.special_chars);
    }

    let fallback_applied = alphabet.is_empty();
    if fallback_applied {
        alphabet.push_str(LOWERCASE);
    }

    let chars: Vec<char> = alphabet.chars().collect();
    let mut rng = OsRng;
    let mut password = Zeroizing::new(String::with_capacity(spec.length));
    for _ in 0..spec.length {
        if let Some(&c) = chars.choose(&mut rng) {
            password.push(c);
        }
    }

    GeneratedPassword {
        password,
        fallback_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_full_union() {
        let spec = GenerationSpec {
            length: 16,
            ..GenerationSpec::default()
        };
        let config = StrengthConfig::default();
        let generated = generate_password(&spec, &config);

        assert_eq!(generated.password.chars().count(), 16);
        assert!(!generated.fallback_applied);

        let union: String = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL].concat();
        assert!(
            generated.password.chars().all(|c| union.contains(c)),
            "characters must come from the enabled union"
        );
    }

    #[test]
    fn test_empty_selection_falls_back_to_lowercase() {
        let spec = GenerationSpec {
            length: 10,
            upper: false,
            lower: false,
            digits: false,
            special: false,
        };
        let generated = generate_password(&spec, &StrengthConfig::default());

        assert_eq!(generated.password.chars().count(), 10);
        assert!(generated.fallback_applied);
        assert!(generated.password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_digits_only() {
        let spec = GenerationSpec {
            length: 8,
            upper: false,
            lower: false,
            digits: true,
            special: false,
        };
        let generated = generate_password(&spec, &StrengthConfig::default());

        assert!(!generated.fallback_applied);
        assert!(generated.password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_custom_special_alphabet() {
        let config = StrengthConfig {
            special_chars: "#".to_string(),
            ..StrengthConfig::default()
        };
        let spec = GenerationSpec {
            length: 12,
            upper: false,
            lower: false,
            digits: false,
            special: true,
        };
        let generated = generate_password(&spec, &config);

        assert!(!generated.fallback_applied);
        assert!(generated.password.chars().all(|c| c == '#'));
    }

    #[test]
    fn test_zero_length() {
        let spec = GenerationSpec {
            length: 0,
            ..GenerationSpec::default()
        };
        let generated = generate_password(&spec, &StrengthConfig::default());
        assert!(generated.password.is_empty());
    }

    #[test]
    fn test_successive_passwords_differ() {
        let spec = GenerationSpec {
            length: 20,
            ..GenerationSpec::default()
        };
        let config = StrengthConfig::default();
        let first = generate_password(&spec, &config);
        let second = generate_password(&spec, &config);
        assert_ne!(*first.password, *second.password);
    }
}
