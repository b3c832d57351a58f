use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::style::Theme;
use crate::view::Entry;

/// Display lines an entry body is clamped to, matching the host's
/// three-line clamp.
const BODY_CLAMP_LINES: usize = 3;
const ELLIPSIS: &str = "…";

/// Render the visible entries as a vertical list: a heading with a bold id
/// prefix, then the body clamped to [`BODY_CLAMP_LINES`] display lines.
pub fn render_entries(frame: &mut Frame, area: Rect, entries: &[Entry], theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = area.width as usize;
    let max_lines = area.height as usize;
    let mut lines: Vec<Line> = Vec::new();

    for entry in entries {
        if lines.len() >= max_lines {
            break;
        }
        lines.push(heading_line(entry, theme));
        for body_line in clamp_lines(&entry.body, width, BODY_CLAMP_LINES) {
            lines.push(Line::from(Span::styled(body_line, theme.body_style())));
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn heading_line(entry: &Entry, theme: &Theme) -> Line<'static> {
    let prefix = format!("{}.", entry.key);
    let rest = entry
        .title
        .strip_prefix(&prefix)
        .unwrap_or(entry.title.as_str())
        .to_string();
    Line::from(vec![
        Span::styled(prefix, theme.key_style()),
        Span::styled(rest, theme.title_style()),
    ])
}

/// Greedily wrap `text` to `width` display columns and keep at most
/// `max_lines` lines, replacing the tail with an ellipsis when content is
/// cut off. The entry itself keeps the full body; clamping only affects
/// what is drawn.
fn clamp_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut wrapped: Vec<String> = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0usize;
        for ch in raw_line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
        wrapped.push(current);
    }

    if wrapped.len() > max_lines {
        wrapped.truncate(max_lines);
        if let Some(last) = wrapped.last_mut() {
            while !last.is_empty() && last.width() + ELLIPSIS.width() > width {
                last.pop();
            }
            last.push_str(ELLIPSIS);
        }
    }

    wrapped
}
