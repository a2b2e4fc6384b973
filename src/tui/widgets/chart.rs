//! Bar chart of two chosen columns of the consolidated table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Paragraph};

use crate::data::{Table, Value};
use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Bar heights are mapped onto this scale; the true value is printed above
/// each bar, so only relative heights matter.
const VALUE_SCALE: f64 = 1000.0;

const CHART_TITLE: &str = " Consolidated Data Visualization ";

/// Renders the chart view: the bar chart when it is plottable, otherwise a
/// message saying why it is not. Never panics on bad column choices.
pub fn render_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::bordered().title(CHART_TITLE);

    let Some(table) = state.consolidated.as_ref() else {
        let message = Paragraph::new("No consolidated data yet. Press e to add endpoints, f to fetch.")
            .style(Styles::dim())
            .block(block);
        frame.render_widget(message, area);
        return;
    };

    if table.n_cols() < 2 {
        let message = Paragraph::new("Need at least two columns to plot.")
            .style(Styles::dim())
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let (x_col, y_col) = (state.chart_x, state.chart_y);
    if x_col >= table.n_cols() || y_col >= table.n_cols() {
        let message = Paragraph::new("Selected columns are out of range.")
            .style(Styles::dim())
            .block(block);
        frame.render_widget(message, area);
        return;
    }

    let inner_chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)])
        .split(block.inner(area));
    frame.render_widget(block, area);

    // Axis line: which columns are plotted and how to change them.
    let axis = Paragraph::new(format!(
        "x: {}   y: {}   (x/y to change columns)",
        table.columns[x_col], table.columns[y_col]
    ))
    .style(Styles::help());
    frame.render_widget(axis, inner_chunks[0]);

    render_bars(frame, inner_chunks[1], table, x_col, y_col);
}

fn render_bars(frame: &mut Frame, area: Rect, table: &Table, x_col: usize, y_col: usize) {
    let bar_width: u16 = 8;
    let bar_gap: u16 = 1;
    let capacity = (area.width / (bar_width + bar_gap)).max(1) as usize;

    let heights: Vec<f64> = table
        .column_values(y_col)
        .map(|v| v.as_f64().unwrap_or(0.0))
        .collect();
    let max = heights.iter().cloned().fold(0.0_f64, f64::max);

    let bars: Vec<Bar> = table
        .rows
        .iter()
        .take(capacity)
        .enumerate()
        .map(|(i, row)| {
            let label = bar_label(&row[x_col], bar_width as usize);
            let height = heights.get(i).copied().unwrap_or(0.0);
            // Non-positive and non-numeric values draw as zero-height bars;
            // the printed value still tells the truth.
            let scaled = if max > 0.0 {
                (height.max(0.0) / max * VALUE_SCALE).round() as u64
            } else {
                0
            };
            Bar::default()
                .value(scaled)
                .text_value(row[y_col].to_string())
                .label(Line::from(label))
        })
        .collect();

    let shown = bars.len();
    let chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .bar_style(Styles::bar())
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);

    if shown < table.n_rows() {
        let note = Paragraph::new(format!("showing first {} of {} rows", shown, table.n_rows()))
            .style(Styles::dim())
            .right_aligned();
        let note_area = Rect {
            y: area.y,
            height: 1,
            ..area
        };
        frame.render_widget(note, note_area);
    }
}

/// Bar label: the x-column value squeezed into the bar width.
fn bar_label(value: &Value, width: usize) -> String {
    let text = value.to_string();
    if text.chars().count() > width {
        text.chars().take(width.saturating_sub(1)).chain("…".chars()).collect()
    } else {
        text
    }
}
