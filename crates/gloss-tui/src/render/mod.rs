//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use gloss_app::{AppState, UiMode};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: scrolling and focus live in [`AppState`].
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(&state.filter, state.visible_len(), state.store.len()),
        areas.header,
    );

    frame.render_widget(
        widgets::TermList::new(state.visible_entries(), icons).selected(state.selected_index()),
        areas.list,
    );

    frame.render_widget(
        widgets::CardView::new(state.card(), icons)
            .focused(state.focused_target())
            .scroll(state.card_scroll),
        areas.card,
    );

    render_footer(frame, areas.footer, state, icons);
}

/// Search prompt while typing; otherwise key hints, with the applied query on the left
fn render_footer(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    state: &AppState,
    icons: IconSet,
) {
    let search = widgets::SearchInput::new(&state.filter.query, state.visible_len(), icons);

    match state.ui_mode {
        UiMode::SearchInput => {
            frame.render_widget(search.active(true), area);
        }
        UiMode::Browse if !state.filter.query.is_empty() => {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(30), Constraint::Min(20)]).areas(area);
            frame.render_widget(search, left);
            frame.render_widget(
                widgets::StatusBar::new(state.ui_mode).message(state.status.as_deref()),
                right,
            );
        }
        UiMode::Browse => {
            frame.render_widget(
                widgets::StatusBar::new(state.ui_mode).message(state.status.as_deref()),
                area,
            );
        }
    }
}
