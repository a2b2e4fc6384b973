//! Endpoint editor popup.
//!
//! Collects the list of endpoint addresses one line at a time: Enter adds
//! the typed URL, Ctrl-D drops the last entry, Esc closes the editor.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

use super::centered_rect;

pub fn render_endpoint_editor(frame: &mut Frame, area: Rect, state: &AppState) {
    let height = (state.endpoints.len() as u16 + 5).clamp(7, area.height);
    let popup = centered_rect(area, 64, height);

    let mut lines: Vec<Line> = Vec::new();
    if state.endpoints.is_empty() {
        lines.push(Line::from(Span::styled("(no endpoints yet)", Styles::dim())));
    }
    for (i, url) in state.endpoints.iter().enumerate() {
        lines.push(Line::from(format!("{:>2}. {}", i + 1, url)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::raw(state.endpoint_input.clone()),
        Span::styled("▏", Styles::default()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" add · ", Styles::help()),
        Span::styled("Ctrl-D", Styles::help_key()),
        Span::styled(" remove last · ", Styles::help()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" close", Styles::help()),
    ]));

    let body = Paragraph::new(lines).block(Block::bordered().title(" Endpoints (one URL per line) "));

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}
