//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::style::Styles;

use super::centered_rect;

pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(area, 34, 4);

    let lines = vec![
        Line::from("Quit datalot?"),
        Line::from(vec![
            Span::styled("Enter/y", Styles::help_key()),
            Span::styled(" quit · ", Styles::help()),
            Span::styled("Esc/n", Styles::help_key()),
            Span::styled(" stay", Styles::help()),
        ]),
    ];

    let body = Paragraph::new(lines)
        .centered()
        .block(Block::bordered().title(" Confirm "));

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}
