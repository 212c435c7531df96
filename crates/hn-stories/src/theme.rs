//! Application theme - centralized color management

use ratatui::style::{palette::tailwind, Color, Style};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_checking: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Table colors
    pub table_header_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::ORANGE.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_checking: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            selected_bg: tailwind::SLATE.c700,
            selected_fg: tailwind::SLATE.c100,

            table_header_fg: tailwind::SLATE.c200,
        }
    }

    /// Style for the table header row
    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .add_modifier(ratatui::style::Modifier::BOLD)
    }

    /// Style for the selected table row
    pub fn table_selected(&self) -> Style {
        Style::default().fg(self.selected_fg).bg(self.selected_bg)
    }
}
