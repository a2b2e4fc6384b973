//! Status panel: the per-endpoint message trail of the last action.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::pipeline::StatusEvent;
use crate::tui::style::Styles;

/// How many status lines the panel shows at most.
const MAX_LINES: u16 = 5;

/// Panel height for the current event count, borders included.
pub fn status_height(events: &[StatusEvent]) -> u16 {
    (events.len() as u16).clamp(1, MAX_LINES) + 2
}

/// Renders the newest status lines, oldest first, timestamped.
pub fn render_status(frame: &mut Frame, area: Rect, events: &[StatusEvent]) {
    let block = Block::bordered().title(" Status ");

    if events.is_empty() {
        let hint = Paragraph::new("No fetches yet. Press e to add endpoints, f to fetch, ? for help.")
            .style(Styles::dim())
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let visible = area.height.saturating_sub(2) as usize;
    let start = events.len().saturating_sub(visible);
    let lines: Vec<Line> = events[start..]
        .iter()
        .map(|event| {
            Line::from(vec![
                Span::styled(format!("{} ", event.at.format("%H:%M:%S")), Styles::dim()),
                Span::styled(event.message.clone(), Styles::for_level(event.level)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
