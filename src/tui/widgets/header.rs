//! Top header bar: program name, tabs and endpoint count.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Tab};
use crate::tui::style::Styles;

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        format!(" datalot v{} ", env!("CARGO_PKG_VERSION")),
        Styles::header(),
    )];

    for tab in Tab::ALL {
        spans.push(Span::raw(" "));
        let style = if tab == state.current_tab {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(tab.title(), style));
    }

    spans.push(Span::styled(
        format!("   {} endpoint(s)", state.endpoints.len()),
        Styles::dim(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
