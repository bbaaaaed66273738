//! Form screen rendering
//!
//! Renders the five input fields with focus highlighting, password
//! masking, the help line for the focused field, and the full validation
//! error list from the last generate attempt.

use super::header::{render_status, HeaderRenderer};
use crate::app::AppState;
use crate::form::FormField;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the form screen in the specified area
pub fn render_form_in_area(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Header
            Constraint::Length(3),  // Title
            Constraint::Length(16), // Input fields + help line
            Constraint::Min(4),     // Validation errors
            Constraint::Length(3),  // Status
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Generate SNMP Configuration and Test Commands");
    render_fields(f, chunks[2], state);
    render_errors(f, chunks[3], state);
    render_status(f, chunks[4], &state.status_message);
}

/// Render the five input fields and the help line for the focused one
fn render_fields(f: &mut Frame, area: Rect, state: &AppState) {
    let field_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // SNMPv3 Username
            Constraint::Length(3), // Auth Password
            Constraint::Length(3), // Privacy Password
            Constraint::Length(3), // Zone
            Constraint::Length(3), // IP Range
            Constraint::Length(1), // Help line
        ])
        .split(area);

    for (i, field) in FormField::all().iter().enumerate() {
        let value = state.form.fields.value(*field);
        let is_current = i == state.form.focus;

        let display_value = if value.is_empty() {
            format!("({})", field.placeholder())
        } else if field.is_password() {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };

        let value_style = if value.is_empty() {
            Style::default().fg(Colors::FG_MUTED)
        } else if is_current {
            Style::default()
                .fg(Colors::FG_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::FG_SECONDARY)
        };

        let border_style = if is_current {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        };

        let cursor = if is_current && !value.is_empty() { "_" } else { "" };
        let text = format!(" {}{}", display_value, cursor);

        let widget = Paragraph::new(text).style(value_style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", field.label()))
                .border_style(border_style),
        );
        f.render_widget(widget, field_chunks[i]);
    }

    // Help line follows the focused field
    let help = Paragraph::new(format!("  {}", state.form.current().help()))
        .style(Style::default().fg(Colors::SECONDARY));
    f.render_widget(help, field_chunks[5]);
}

/// Render the validation error list (complete, in field order)
fn render_errors(f: &mut Frame, area: Rect, state: &AppState) {
    if state.errors.is_empty() {
        let hint = Paragraph::new("  All checks will run at once; errors appear here.")
            .style(Style::default().fg(Colors::FG_MUTED))
            .block(Block::default().borders(Borders::ALL).title(" Validation "));
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = state
        .errors
        .iter()
        .map(|e| ListItem::new(format!("  ✗ {}", e)).style(Styles::error()))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Validation Errors ")
            .border_style(Style::default().fg(Colors::ERROR)),
    );
    f.render_widget(list, area);
}
