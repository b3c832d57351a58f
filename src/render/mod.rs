//! ratatui presentation layer for the pane.
//!
//! Rendering is pure drawing: the pane recomputes from [`PaneState`] on
//! every frame and mutates nothing.

mod list;
mod tabs;

pub use list::render_entries;
pub use tabs::{render_input, render_tabs};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::state::PaneState;
use crate::style::Theme;

/// Draw the full pane: input row, tab selector, and the visible list.
///
/// The tab row stays visible while search results are shown, as in the host
/// application.
pub fn render_pane(frame: &mut Frame, area: Rect, state: &PaneState, theme: &Theme) {
    let [input_area, tabs_area, list_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    render_input(
        frame,
        input_area,
        state.query(),
        state.is_focused(),
        state.labels(),
        theme,
    );
    render_tabs(frame, tabs_area, state.labels(), state.active_tab(), theme);
    render_entries(frame, list_area, state.visible_entries(), theme);
}
