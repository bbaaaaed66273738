//! Results screen rendering
//!
//! Shows the two generated command strings in separate panels so the
//! operator can copy each one to the right place: the config command to
//! the device, the test command to the monitoring host.

use super::header::{render_status, HeaderRenderer};
use crate::app::AppState;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the results screen in the specified area
pub fn render_results_in_area(
    f: &mut Frame,
    state: &AppState,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Header
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Config command
            Constraint::Min(5),    // Test command
            Constraint::Length(3), // Status
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Generated Commands");

    let Some(ref pair) = state.commands else {
        // Results mode without commands should not happen; show a hint
        // instead of an empty screen
        let empty = Paragraph::new("  No commands generated yet")
            .style(Style::default().fg(Colors::FG_MUTED));
        f.render_widget(empty, chunks[2]);
        render_status(f, chunks[4], &state.status_message);
        return;
    };

    render_command(
        f,
        chunks[2],
        " Command 1: SNMP Server Configuration ",
        &pair.config_command,
    );
    render_command(f, chunks[3], " Command 2: SNMP Test ", &pair.test_command);
    render_status(f, chunks[4], &state.status_message);
}

fn render_command(f: &mut Frame, area: Rect, title: &str, command: &str) {
    let widget = Paragraph::new(format!("\n  {}", command))
        .style(Styles::command())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(Styles::title())
                .border_style(Style::default().fg(Colors::PRIMARY)),
        );
    f.render_widget(widget, area);
}
