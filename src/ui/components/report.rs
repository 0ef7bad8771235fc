//! Analysis Report Panel
//!
//! Entropy, pool size, tier, and crack time for the password under
//! analysis.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::strength::StrengthTier;

use super::meter::tier_color;

/// Display-side bundle of one analysis pass. Filled by the app from the
/// engine's outputs; the engine never sees it.
#[derive(Debug, Clone)]
pub struct StrengthReport {
    pub bits: f64,
    pub pool_size: u32,
    pub tier: StrengthTier,
    pub crack_display: String,
}

pub struct ReportPanel<'a> {
    report: Option<&'a StrengthReport>,
    hint_below_bits: f64,
}

impl<'a> ReportPanel<'a> {
    pub fn new(report: Option<&'a StrengthReport>, hint_below_bits: f64) -> Self {
        Self { report, hint_below_bits }
    }
}

impl Widget for ReportPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(report) = self.report else {
            buf.set_string(
                area.x,
                area.y,
                "Enter a password to analyze.",
                Style::default().fg(Color::DarkGray),
            );
            return;
        };

        let label_style = Style::default().fg(Color::Gray);
        let value_style = Style::default().fg(Color::White);

        let rows = [
            ("Entropy: ", format!("{:.2} bits", report.bits)),
            ("Character pool size: ", report.pool_size.to_string()),
            ("Estimated crack time: ", report.crack_display.clone()),
        ];

        let mut y = area.y;
        for (label, value) in &rows[..2] {
            buf.set_string(area.x, y, label, label_style);
            buf.set_string(area.x + label.len() as u16, y, value, value_style);
            y += 1;
        }

        buf.set_string(area.x, y, "Strength: ", label_style);
        buf.set_string(
            area.x + "Strength: ".len() as u16,
            y,
            report.tier.label(),
            Style::default()
                .fg(tier_color(report.tier))
                .add_modifier(Modifier::BOLD),
        );
        y += 1;

        let (label, value) = &rows[2];
        buf.set_string(area.x, y, label, label_style);
        buf.set_string(area.x + label.len() as u16, y, value, value_style);
        y += 1;

        if report.bits < self.hint_below_bits && y < area.y + area.height {
            buf.set_string(
                area.x,
                y,
                "Low entropy. Consider generating a stronger password.",
                Style::default().fg(Color::Red),
            );
        }
    }
}
