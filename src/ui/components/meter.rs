//! Entropy Meter
//!
//! Color-coded bar visualizing entropy against a 100-bit display scale.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Gauge, Widget},
};

use crate::strength::StrengthTier;

/// Display cap: entropy at or above 100 bits fills the bar. Purely a
/// presentation concern; the engine reports uncapped values.
pub fn entropy_percent(bits: f64) -> f64 {
    bits.clamp(0.0, 100.0)
}

/// Terminal color for a tier, decoded from the tier's `#RRGGBB` token.
pub fn tier_color(tier: StrengthTier) -> Color {
    let hex = tier.color_token();
    let channel = |i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(255);
    Color::Rgb(channel(1), channel(3), channel(5))
}

pub struct EntropyMeter {
    percent: f64,
    color: Color,
}

impl EntropyMeter {
    pub fn new(bits: f64, tier: StrengthTier) -> Self {
        Self {
            percent: entropy_percent(bits),
            color: tier_color(tier),
        }
    }

    /// An empty bar for the no-input state.
    pub fn empty() -> Self {
        Self {
            percent: 0.0,
            color: Color::DarkGray,
        }
    }
}

impl Widget for EntropyMeter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Gauge::default()
            .gauge_style(Style::default().fg(self.color).bg(Color::Black))
            .ratio(self.percent / 100.0)
            .label(format!("{:.1}%", self.percent))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_caps_at_100() {
        assert_eq!(entropy_percent(250.0), 100.0);
        assert_eq!(entropy_percent(100.0), 100.0);
    }

    #[test]
    fn test_percent_passes_through_in_range() {
        assert!((entropy_percent(37.6) - 37.6).abs() < f64::EPSILON);
        assert_eq!(entropy_percent(0.0), 0.0);
    }

    #[test]
    fn test_tier_color_decodes_token() {
        assert_eq!(tier_color(StrengthTier::VeryWeak), Color::Rgb(255, 0, 0));
        assert_eq!(tier_color(StrengthTier::Weak), Color::Rgb(255, 127, 0));
        assert_eq!(tier_color(StrengthTier::VeryStrong), Color::Rgb(0, 255, 0));
    }
}
