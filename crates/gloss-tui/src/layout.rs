//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, category filter and term count
    pub header: Rect,

    /// Term list on the left
    pub list: Rect,

    /// Card for the selected term
    pub card: Rect,

    /// Single-row search prompt or key hints
    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Min(3),    // List + card
        Constraint::Length(1), // Footer
    ])
    .split(area);

    let columns =
        Layout::horizontal([Constraint::Percentage(30), Constraint::Min(20)]).split(rows[1]);

    ScreenAreas {
        header: rows[0],
        list: columns[0],
        card: columns[1],
        footer: rows[2],
    }
}
