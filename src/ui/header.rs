//! Header and common widget rendering
//!
//! ASCII art header, title bar, status line, and the bottom navigation
//! hints.

use crate::app::AppMode;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer containing the ASCII art header
pub struct HeaderRenderer {
    /// ASCII art header lines
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Render the ASCII art header
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Render a title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    /// Create the ASCII art header
    fn create_header() -> Vec<Line<'static>> {
        [
            " ███████ ███    ██ ███    ███ ██████  ",
            " ██      ████   ██ ████  ████ ██   ██ ",
            " ███████ ██ ██  ██ ██ ████ ██ ██████  ",
            "      ██ ██  ██ ██ ██  ██  ██ ██      ",
            " ███████ ██   ████ ██      ██ ██      ",
            "          Monitoring  Tester          ",
        ]
        .iter()
        .map(|text| {
            Line::from(vec![Span::styled(
                *text,
                Style::default().fg(Colors::PRIMARY),
            )])
        })
        .collect()
    }
}

/// Render the status line
pub fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Colors::FG_SECONDARY));
    f.render_widget(status, area);
}

/// Render the navigation bar with hints for the current mode
pub fn render_nav_bar(f: &mut Frame, mode: AppMode, area: Rect) {
    let hints: &[(&str, &str)] = match mode {
        AppMode::Form => &[
            ("Tab/↓", "Next"),
            ("Shift+Tab/↑", "Prev"),
            ("Enter", "Generate"),
            ("Ctrl+E", "Example"),
            ("Ctrl+L", "Clear"),
            ("Esc", "Quit"),
        ],
        AppMode::Results => &[("Esc/B", "Back to form"), ("Q", "Quit")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {} ", key), Styles::key_hint()));
        spans.push(Span::styled(
            format!("{}  ", action),
            Style::default().fg(Colors::FG_SECONDARY),
        ));
    }

    let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav, area);
}
