//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};

use super::state::{AppState, InputMode, Tab};
use super::style::Styles;
use super::widgets::{
    render_chart, render_data_table, render_endpoint_editor, render_header, render_help,
    render_quit_confirm, render_status, status_height,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1),                           // Header
        Constraint::Min(8),                              // Content
        Constraint::Length(status_height(&state.events)), // Status trail
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_content(frame, chunks[1], state);
    render_status(frame, chunks[2], &state.events);

    // Popups overlay everything below them.
    if state.input_mode == InputMode::EndpointEntry {
        render_endpoint_editor(frame, area, state);
    }
    if state.show_help {
        render_help(frame, area, state.help_scroll);
    }
    if state.show_quit_confirm {
        render_quit_confirm(frame, area);
    }
}

fn render_content(frame: &mut Frame, area: Rect, state: &mut AppState) {
    match state.current_tab {
        Tab::Sample => {
            let halves =
                Layout::vertical([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .split(area);
            // Split borrows: the grids and tables are distinct fields.
            let AppState {
                sample,
                sample_summary,
                sample_grid,
                sample_summary_grid,
                ..
            } = state;
            render_data_table(frame, halves[0], "Sample Data", sample, sample_grid);
            render_data_table(
                frame,
                halves[1],
                "Summary of Sample Data",
                sample_summary,
                sample_summary_grid,
            );
        }
        Tab::Data => {
            let AppState {
                consolidated,
                data_grid,
                ..
            } = state;
            match consolidated {
                Some(table) => {
                    render_data_table(frame, area, "Consolidated Data", table, data_grid)
                }
                None => render_placeholder(frame, area, " Consolidated Data "),
            }
        }
        Tab::Summary => {
            let AppState {
                summary,
                summary_grid,
                ..
            } = state;
            match summary {
                Some(table) => render_data_table(
                    frame,
                    area,
                    "Summary of Consolidated Data",
                    table,
                    summary_grid,
                ),
                None => render_placeholder(frame, area, " Summary of Consolidated Data "),
            }
        }
        Tab::Chart => render_chart(frame, area, state),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph =
        Paragraph::new("No consolidated data yet. Press e to add endpoints, f to fetch.")
            .style(Styles::dim())
            .block(Block::bordered().title(title.to_string()));
    frame.render_widget(paragraph, area);
}
