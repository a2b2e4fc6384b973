//! TUI widgets for the dashboard.

mod chart;
mod data_table;
mod endpoint_editor;
mod header;
mod help;
mod quit_confirm;
mod status;

pub use chart::render_chart;
pub use data_table::render_data_table;
pub use endpoint_editor::render_endpoint_editor;
pub use header::render_header;
pub use help::render_help;
pub use quit_confirm::render_quit_confirm;
pub use status::{render_status, status_height};

use ratatui::layout::Rect;

/// A rectangle of at most `width`×`height` cells centered in `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
