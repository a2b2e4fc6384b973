//! Help popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::style::Styles;

use super::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("1-4 / Tab", "switch view (Sample, Data, Summary, Chart)"),
    ("e", "edit endpoint list"),
    ("f / F5", "fetch all endpoints and consolidate"),
    ("w", "write consolidated table to the export file"),
    ("Up/Down, j/k", "select row"),
    ("PgUp/PgDn", "page through rows"),
    ("Left/Right", "scroll columns"),
    ("o", "cycle sort column (view only)"),
    ("r", "reverse sort direction"),
    ("x / y", "chart: choose axis columns"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

pub fn render_help(frame: &mut Frame, area: Rect, scroll: u16) {
    let popup = centered_rect(area, 58, KEYS.len() as u16 + 4);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", key), Styles::help_key()),
            Span::styled(*action, Styles::help()),
        ]));
    }

    let body = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(Block::bordered().title(" Help "));

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}
