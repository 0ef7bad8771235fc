//! Key routing, dispatched by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::InputMode;

use super::App;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+c quits from anywhere.
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        match self.mode_state.mode {
            InputMode::Normal => self.handle_normal_key(key.code, key.modifiers),
            InputMode::Insert => self.handle_insert_key(key.code, key.modifiers),
            InputMode::Options => self.handle_options_key(key.code, key.modifiers),
            InputMode::Help => self.handle_help_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, mods: KeyModifiers) {
        match (code, mods) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => self.should_quit = true,
            (KeyCode::Char('i'), KeyModifiers::NONE) => self.mode_state.to_insert(),
            (KeyCode::Char('s'), KeyModifiers::NONE) => {
                self.password_visible = !self.password_visible;
            }
            (KeyCode::Char('o'), KeyModifiers::NONE) | (KeyCode::Tab, _) => {
                self.mode_state.to_options();
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => self.generate(),
            (KeyCode::Char('u'), KeyModifiers::NONE) => self.use_generated(),
            (KeyCode::Char('y'), KeyModifiers::NONE) => self.copy_generated(),
            (KeyCode::Char('c'), KeyModifiers::NONE) => self.clear_password(),
            (KeyCode::Char('?'), _) => self.mode_state.to_help(),
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, code: KeyCode, mods: KeyModifiers) {
        match (code, mods) {
            (KeyCode::Esc, _) | (KeyCode::Enter, KeyModifiers::NONE) => {
                self.mode_state.to_normal();
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                self.password_visible = !self.password_visible;
            }
            _ => {
                if self.password.handle_key(code, mods) {
                    self.analyze();
                }
            }
        }
    }

    fn handle_options_key(&mut self, code: KeyCode, mods: KeyModifiers) {
        match (code, mods) {
            (KeyCode::Esc, _) => self.mode_state.to_normal(),
            (KeyCode::Tab, KeyModifiers::NONE)
            | (KeyCode::Char('j'), KeyModifiers::NONE)
            | (KeyCode::Down, _) => self.form.next_field(),
            (KeyCode::BackTab, _)
            | (KeyCode::Char('k'), KeyModifiers::NONE)
            | (KeyCode::Up, _) => self.form.prev_field(),
            (KeyCode::Char(' '), KeyModifiers::NONE) => self.form.toggle_active(),
            (KeyCode::Char('h'), KeyModifiers::NONE)
            | (KeyCode::Left, _)
            | (KeyCode::Char('-'), _) => self.adjust_length(-1),
            (KeyCode::Char('l'), KeyModifiers::NONE)
            | (KeyCode::Right, _)
            | (KeyCode::Char('+'), _) => self.adjust_length(1),
            (KeyCode::Enter, KeyModifiers::NONE) => {
                self.generate();
                self.mode_state.to_normal();
            }
            _ => {}
        }
    }

    fn adjust_length(&mut self, delta: isize) {
        self.form.adjust_length(
            delta,
            self.config.min_generate_length,
            self.config.max_generate_length,
        );
    }

    fn handle_help_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            self.mode_state.to_normal();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppConfig;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_mode_keys() {
        let mut app = App::new(AppConfig::default());

        app.handle_key_event(press(KeyCode::Char('i')));
        assert_eq!(app.mode_state.mode, InputMode::Insert);

        app.handle_key_event(press(KeyCode::Esc));
        assert_eq!(app.mode_state.mode, InputMode::Normal);

        app.handle_key_event(press(KeyCode::Char('o')));
        assert_eq!(app.mode_state.mode, InputMode::Options);
    }

    #[test]
    fn test_typing_reanalyzes() {
        let mut app = App::new(AppConfig::default());
        app.handle_key_event(press(KeyCode::Char('i')));

        for c in "abc".chars() {
            app.handle_key_event(press(KeyCode::Char(c)));
        }

        assert_eq!(app.password.content(), "abc");
        let report = app.report.as_ref().expect("live analysis");
        assert_eq!(report.pool_size, 26);

        app.handle_key_event(press(KeyCode::Backspace));
        assert_eq!(app.password.content(), "ab");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(AppConfig::default());
        app.handle_key_event(press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let mut app = App::new(AppConfig::default());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_options_length_keys() {
        let mut app = App::new(AppConfig::default());
        app.handle_key_event(press(KeyCode::Char('o')));

        app.handle_key_event(press(KeyCode::Char('l')));
        assert_eq!(app.form.length, 17);
        app.handle_key_event(press(KeyCode::Char('h')));
        assert_eq!(app.form.length, 16);
    }

    #[test]
    fn test_visibility_toggle() {
        let mut app = App::new(AppConfig::default());
        assert!(!app.password_visible);
        app.handle_key_event(press(KeyCode::Char('s')));
        assert!(app.password_visible);
    }
}
