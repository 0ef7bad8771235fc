//! Generation Options Form
//!
//! Length spinner plus one checkbox per character class.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::strength::GenerationSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Length,
    Upper,
    Lower,
    Digits,
    Special,
}

impl OptionField {
    const ORDER: [Self; 5] = [
        Self::Length,
        Self::Upper,
        Self::Lower,
        Self::Digits,
        Self::Special,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Upper => "Uppercase",
            Self::Lower => "Lowercase",
            Self::Digits => "Digits",
            Self::Special => "Special",
        }
    }
}

/// Form state for the password generator.
#[derive(Debug, Clone)]
pub struct GeneratorForm {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
    pub active: OptionField,
}

impl GeneratorForm {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            upper: true,
            lower: true,
            digits: true,
            special: true,
            active: OptionField::Length,
        }
    }

    pub fn next_field(&mut self) {
        let idx = Self::field_index(self.active);
        self.active = OptionField::ORDER[(idx + 1) % OptionField::ORDER.len()];
    }

    pub fn prev_field(&mut self) {
        let idx = Self::field_index(self.active);
        self.active = OptionField::ORDER[(idx + OptionField::ORDER.len() - 1) % OptionField::ORDER.len()];
    }

    fn field_index(field: OptionField) -> usize {
        OptionField::ORDER
            .iter()
            .position(|f| *f == field)
            .unwrap_or(0)
    }

    /// Toggle the active checkbox; no-op on the length field.
    pub fn toggle_active(&mut self) {
        match self.active {
            OptionField::Length => {}
            OptionField::Upper => self.upper = !self.upper,
            OptionField::Lower => self.lower = !self.lower,
            OptionField::Digits => self.digits = !self.digits,
            OptionField::Special => self.special = !self.special,
        }
    }

    /// Adjust the length while it is the active field, clamped to bounds.
    pub fn adjust_length(&mut self, delta: isize, min: usize, max: usize) {
        if self.active != OptionField::Length {
            return;
        }
        let length = self.length.saturating_add_signed(delta);
        self.length = length.clamp(min, max);
    }

    pub fn checked(&self, field: OptionField) -> bool {
        match field {
            OptionField::Length => false,
            OptionField::Upper => self.upper,
            OptionField::Lower => self.lower,
            OptionField::Digits => self.digits,
            OptionField::Special => self.special,
        }
    }

    pub fn spec(&self) -> GenerationSpec {
        GenerationSpec {
            length: self.length,
            upper: self.upper,
            lower: self.lower,
            digits: self.digits,
            special: self.special,
        }
    }
}

pub struct OptionsPanel<'a> {
    form: &'a GeneratorForm,
    focused: bool,
}

impl<'a> OptionsPanel<'a> {
    pub fn new(form: &'a GeneratorForm, focused: bool) -> Self {
        Self { form, focused }
    }
}

fn row_style(is_active: bool, focused: bool) -> Style {
    if is_active && focused {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

impl Widget for OptionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_style = if self.focused {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        buf.set_string(area.x, area.y, "Generate", title_style);

        for (row, field) in OptionField::ORDER.iter().enumerate() {
            let y = area.y + 1 + row as u16;
            if y >= area.y + area.height {
                break;
            }
            let is_active = self.form.active == *field;
            let marker = if is_active && self.focused { "> " } else { "  " };

            let text = if *field == OptionField::Length {
                format!("{}{}: < {:2} >", marker, field.label(), self.form.length)
            } else {
                let check = if self.form.checked(*field) { "[x]" } else { "[ ]" };
                format!("{}{} {}", marker, check, field.label())
            };
            buf.set_string(area.x, y, &text, row_style(is_active, self.focused));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycling_wraps() {
        let mut form = GeneratorForm::new(16);
        assert_eq!(form.active, OptionField::Length);

        form.prev_field();
        assert_eq!(form.active, OptionField::Special);

        form.next_field();
        assert_eq!(form.active, OptionField::Length);
    }

    #[test]
    fn test_toggle_checkboxes() {
        let mut form = GeneratorForm::new(16);
        form.next_field();
        assert_eq!(form.active, OptionField::Upper);

        form.toggle_active();
        assert!(!form.upper);
        form.toggle_active();
        assert!(form.upper);
    }

    #[test]
    fn test_length_clamped_to_bounds() {
        let mut form = GeneratorForm::new(16);
        form.adjust_length(100, 8, 32);
        assert_eq!(form.length, 32);

        form.adjust_length(-100, 8, 32);
        assert_eq!(form.length, 8);
    }

    #[test]
    fn test_adjust_ignored_off_length_field() {
        let mut form = GeneratorForm::new(16);
        form.next_field();
        form.adjust_length(1, 8, 32);
        assert_eq!(form.length, 16);
    }

    #[test]
    fn test_spec_reflects_form() {
        let mut form = GeneratorForm::new(12);
        form.special = false;
        let spec = form.spec();
        assert_eq!(spec.length, 12);
        assert!(spec.upper && spec.lower && spec.digits);
        assert!(!spec.special);
    }
}
