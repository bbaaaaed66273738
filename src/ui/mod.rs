//! User interface rendering module
//!
//! Organized into submodules:
//! - `header` - ASCII header, title, status line, navigation bar
//! - `form` - the five-field input screen with the error list
//! - `results` - the generated command screen

mod form;
mod header;
mod results;

use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

// Re-export for external use
pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// Main entry point for rendering; delegates to the screen submodules
/// based on the current mode.
pub struct UiRenderer {
    /// Header renderer instance
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        // Main layout with nav bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        let content_area = main_chunks[0];
        let nav_bar_area = main_chunks[1];

        match state.mode {
            AppMode::Form => {
                form::render_form_in_area(f, state, content_area, &self.header);
            }
            AppMode::Results => {
                results::render_results_in_area(f, state, content_area, &self.header);
            }
        }

        header::render_nav_bar(f, state.mode, nav_bar_area);
    }
}
