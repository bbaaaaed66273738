//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the form and
//! results screens. Components should pull from here rather than hardcode
//! `Color` values.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background - used for most panels
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success states and generated output
    pub const SUCCESS: Color = Color::Green;

    /// Validation and terminal errors
    pub const ERROR: Color = Color::Red;

    /// Warnings (required fields still empty)
    pub const WARNING: Color = Color::Yellow;

    /// Border of the focused input
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Border of unfocused inputs
    pub const BORDER_INACTIVE: Color = Color::DarkGray;
}

/// Pre-built styles for common elements
pub struct Styles;

impl Styles {
    /// Screen and panel titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hints in the navigation line
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Validation error lines
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Generated command text
    pub fn command() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }
}
