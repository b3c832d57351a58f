use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};

use crate::config::UiLabels;
use crate::style::Theme;

/// Render the search input row with its focus-dependent border, showing the
/// placeholder while the query is empty.
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    focused: bool,
    labels: &UiLabels,
    theme: &Theme,
) {
    let block = Block::bordered().border_style(theme.input_border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let line = if query.is_empty() {
        Line::from(Span::styled(
            labels.placeholder.clone(),
            theme.placeholder_style(),
        ))
    } else {
        Line::from(Span::styled(query.to_string(), theme.query_style()))
    };
    frame.render_widget(Paragraph::new(line), inner);
}

/// Render the tab selector row. An unrecognized active identifier leaves
/// every tab unhighlighted.
pub fn render_tabs(frame: &mut Frame, area: Rect, labels: &UiLabels, active_tab: &str, theme: &Theme) {
    let selected = labels
        .tabs()
        .iter()
        .position(|entry| entry.tab.as_str() == active_tab);
    let titles: Vec<Line> = labels
        .tabs()
        .iter()
        .map(|entry| {
            let active = entry.tab.as_str() == active_tab;
            Line::from(Span::styled(
                format!(" {} ", entry.caption),
                theme.tab_style(active),
            ))
        })
        .collect();

    let tabs = Tabs::new(titles).select(selected).divider("");
    frame.render_widget(tabs, area);
}
