//! Application state definitions
//!
//! All state lives in one plain value owned by [`crate::app::App`]. The
//! form values themselves are an explicit [`FormState`] passed to the
//! renderer each frame; there is no global store behind the fields.

use crate::commands::CommandPair;
use crate::form::FormState;
use crate::validation::FieldError;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Editing the five input fields
    Form,
    /// Showing the two generated commands
    Results,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The tester form being edited
    pub form: FormState,
    /// Validation errors from the last generate attempt
    pub errors: Vec<FieldError>,
    /// Commands from the last successful generate
    pub commands: Option<CommandPair>,
    /// Status message for user feedback
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Form,
            form: FormState::new(),
            errors: Vec::new(),
            commands: None,
            status_message: "Fill in the fields and press Enter to generate".to_string(),
        }
    }
}

impl AppState {
    /// Create state with a prefilled form.
    pub fn with_form(form: FormState) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.mode, AppMode::Form);
        assert!(state.errors.is_empty());
        assert!(state.commands.is_none());
    }

    #[test]
    fn test_with_form_keeps_values() {
        let mut form = FormState::new();
        form.load_example();
        let state = AppState::with_form(form);
        assert_eq!(state.form.fields.username, "snmp4ise");
        assert_eq!(state.mode, AppMode::Form);
    }
}
