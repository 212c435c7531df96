//! Main application view
//!
//! Renders the search box, the story table and the status bar.

use crate::state::AppState;
use crate::view_models::StoryTableViewModel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
    Frame,
};

/// Render the stories view
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    // Split into search box, content area, and status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Story table
            Constraint::Length(1), // Status bar (single row)
        ])
        .split(area);

    render_search_box(state, chunks[0], f);
    render_story_table(state, chunks[1], f);
    render_status_bar(state, chunks[2], f);
}

/// Render the search input box
fn render_search_box(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    // The border highlights while the box has focus
    let border_color = if state.search.editing {
        theme.accent_primary
    } else {
        theme.text_muted
    };

    let text = if state.search.editing {
        format!("{}\u{2588}", state.search.term) // block cursor
    } else {
        state.search.term.clone()
    };

    let block = Block::bordered()
        .border_style(Style::default().fg(border_color))
        .title(" Search ");

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(theme.text_primary));

    f.render_widget(paragraph, area);
}

/// Render the story table
fn render_story_table(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = StoryTableViewModel::from_state(state, theme);

    let status_line = Line::from(vm.header.status_text.clone())
        .style(Style::default().fg(vm.header.status_color))
        .right_aligned();

    let block = Block::bordered()
        .border_style(Style::default().fg(theme.accent_primary))
        .title(vm.header.title.clone())
        .title(status_line);

    // Idle/failed/empty states show a centered message instead of rows
    if let Some(message) = &vm.empty_message {
        let paragraph = Paragraph::new(message.clone())
            .block(block)
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header_cells = [
        "Title".to_string(),
        "Author".to_string(),
        format!("{:^8}", "Comments"),
        format!("{:^8}", "Points"),
    ]
    .into_iter()
    .map(|h| Cell::from(h).style(theme.table_header()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .map(|row_vm| {
            // Title with the link target dimmed behind it
            let title_line = Line::from(vec![
                Span::raw(row_vm.title.clone()),
                Span::raw(" "),
                Span::styled(row_vm.url.clone(), Style::default().fg(theme.text_muted)),
            ]);

            Row::new(vec![
                Cell::from(title_line),
                Cell::from(row_vm.author.clone()),
                Cell::from(format!("{:^8}", row_vm.comments)),
                Cell::from(format!("{:^8}", row_vm.points)),
            ])
            .height(1)
        })
        .collect();

    let widths = [
        Constraint::Percentage(55), // Title
        Constraint::Percentage(25), // Author
        Constraint::Length(8),      // Comments
        Constraint::Length(8),      // Points
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = ratatui::widgets::TableState::default();
    table_state.select(Some(vm.selected_index));

    f.render_stateful_widget(table, area, &mut table_state);
}

/// Render the key hint line at the bottom
fn render_status_bar(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let hints = if state.search.editing {
        "Enter submit \u{2502} Esc list \u{2502} Ctrl+U clear \u{2502} Ctrl+C quit"
    } else {
        "/ search \u{2502} j/k move \u{2502} d dismiss \u{2502} o open \u{2502} r refresh \u{2502} ? help \u{2502} q quit"
    };

    let paragraph = Paragraph::new(hints).style(Style::default().fg(theme.text_muted));
    f.render_widget(paragraph, area);
}
