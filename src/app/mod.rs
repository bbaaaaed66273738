//! Application module
//!
//! Contains the main application struct, the event loop, and key handling.
//! Everything is synchronous: one thread polls the terminal, mutates the
//! state, and redraws.

mod state;

pub use state::{AppMode, AppState};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::commands::validate_and_generate;
use crate::config_file::TesterConfig;
use crate::error::Result;
use crate::form::FormState;
use crate::ui::UiRenderer;

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// When set, field values are written here on every successful generate
    save_config_path: Option<PathBuf>,
}

impl App {
    /// Create a new application instance
    pub fn new(save_config_path: Option<PathBuf>) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            save_config_path,
        }
    }

    /// Create an application with a prefilled form
    pub fn with_form(form: FormState, save_config_path: Option<PathBuf>) -> Self {
        Self {
            state: AppState::with_form(form),
            ui_renderer: UiRenderer::new(),
            save_config_path,
        }
    }

    /// Read-only view of the application state (used by tests)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            if crossterm::event::poll(Duration::from_millis(50))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        // Ignore key release events (Windows terminals send both)
                        if key_event.kind == KeyEventKind::Press
                            && self.handle_key_event(key_event)
                        {
                            break; // Exit requested
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;
        }

        Ok(())
    }

    /// Handle a key press. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        match self.state.mode {
            AppMode::Form => self.handle_form_key(key_event),
            AppMode::Results => self.handle_results_key(key_event),
        }
    }

    fn handle_form_key(&mut self, key_event: KeyEvent) -> bool {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Esc => return true,
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char('e') if ctrl => {
                self.state.form.load_example();
                self.state.errors.clear();
                self.state.status_message = "Example data loaded".to_string();
                debug!("Example data loaded into form");
            }
            KeyCode::Char('l') if ctrl => {
                self.state.form.clear();
                self.state.errors.clear();
                self.state.commands = None;
                self.state.status_message = "All fields cleared".to_string();
                debug!("Form cleared");
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.previous_field(),
            KeyCode::Enter => self.generate(),
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Char(c) if !ctrl => self.state.form.insert_char(c),
            _ => {}
        }
        false
    }

    fn handle_results_key(&mut self, key_event: KeyEvent) -> bool {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                self.state.mode = AppMode::Form;
                self.state.status_message =
                    "Fill in the fields and press Enter to generate".to_string();
            }
            _ => {}
        }
        false
    }

    /// Validate the form and, on success, switch to the results screen.
    fn generate(&mut self) {
        match validate_and_generate(&self.state.form.fields) {
            Ok(pair) => {
                info!("Commands generated successfully");
                self.state.errors.clear();
                self.state.commands = Some(pair);
                self.state.mode = AppMode::Results;
                self.state.status_message = "Commands generated successfully".to_string();
                self.save_config_if_requested();
            }
            Err(errors) => {
                info!("Validation failed with {} error(s)", errors.len());
                self.state.commands = None;
                self.state.status_message =
                    format!("Validation failed ({} error(s))", errors.len());
                self.state.errors = errors;
            }
        }
    }

    fn save_config_if_requested(&mut self) {
        let Some(ref path) = self.save_config_path else {
            return;
        };
        let config = TesterConfig::from_fields(&self.state.form.fields);
        match config.save_to_file(path) {
            Ok(()) => {
                info!("Configuration saved to {}", path.display());
                self.state.status_message = format!("Configuration saved to {}", path.display());
            }
            Err(e) => {
                warn!("Failed to save configuration: {:#}", e);
                self.state.status_message = format!("Failed to save configuration: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut app = App::new(None);
        for c in "snmp4ise".chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
        assert_eq!(app.state().form.fields.username, "snmp4ise");
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = App::new(None);
        app.handle_key_event(key(KeyCode::Tab));
        assert_eq!(app.state().form.current(), FormField::AuthPassword);
        app.handle_key_event(key(KeyCode::BackTab));
        assert_eq!(app.state().form.current(), FormField::Username);
    }

    #[test]
    fn test_enter_on_empty_form_collects_all_errors() {
        let mut app = App::new(None);
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.state().mode, AppMode::Form);
        assert_eq!(app.state().errors.len(), 5);
        assert!(app.state().commands.is_none());
    }

    #[test]
    fn test_example_then_enter_shows_results() {
        let mut app = App::new(None);
        app.handle_key_event(ctrl('e'));
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.state().mode, AppMode::Results);
        let pair = app.state().commands.as_ref().expect("commands generated");
        assert_eq!(
            pair.config_command,
            "snmp-server user snmp4ise v3 sha1 plain Auth-PW Priv-PW"
        );
    }

    #[test]
    fn test_results_back_returns_to_form() {
        let mut app = App::new(None);
        app.handle_key_event(ctrl('e'));
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.state().mode, AppMode::Results);
        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.state().mode, AppMode::Form);
        // Values survive the round trip
        assert_eq!(app.state().form.fields.zone, "XXX");
    }

    #[test]
    fn test_clear_resets_fields_and_errors() {
        let mut app = App::new(None);
        app.handle_key_event(key(KeyCode::Enter)); // produce errors
        assert!(!app.state().errors.is_empty());
        app.handle_key_event(ctrl('l'));
        assert!(app.state().errors.is_empty());
        assert!(app.state().form.fields.username.is_empty());
    }

    #[test]
    fn test_esc_exits_form_mode() {
        let mut app = App::new(None);
        assert!(app.handle_key_event(key(KeyCode::Esc)));
    }

    #[test]
    fn test_q_types_in_form_but_quits_in_results() {
        let mut app = App::new(None);
        assert!(!app.handle_key_event(key(KeyCode::Char('q'))));
        assert_eq!(app.state().form.fields.username, "q");

        let mut app = App::new(None);
        app.handle_key_event(ctrl('e'));
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.handle_key_event(key(KeyCode::Char('q'))));
    }
}
