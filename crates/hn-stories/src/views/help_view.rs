//! Help overlay
//!
//! Floating panel listing the key bindings, rendered on top of the
//! stories view.

use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("/", "focus the search box"),
    ("Enter", "submit search (in search box)"),
    ("Esc", "back to list navigation"),
    ("j / k", "next / previous story"),
    ("g / G", "first / last story"),
    ("d or x", "dismiss story"),
    ("o or Enter", "open story in browser"),
    ("r", "refresh current search"),
    ("?", "toggle this help"),
    ("q / Ctrl+C", "quit"),
];

/// Render the help overlay
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let popup = centered_rect(50, 60, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>12}  ", keys),
                    Style::default().fg(theme.accent_primary),
                ),
                Span::styled(*description, Style::default().fg(theme.text_primary)),
            ])
        })
        .collect();

    let block = Block::bordered()
        .border_style(Style::default().fg(theme.accent_primary))
        .title(" Help ")
        .title_alignment(Alignment::Center);

    let paragraph = Paragraph::new(lines).block(block);

    // Clear what's underneath so the overlay is readable
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Centered rect taking the given percentages of the area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
