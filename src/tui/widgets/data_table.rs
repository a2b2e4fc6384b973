//! Generic table renderer used by the Sample, Data and Summary views.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table as TableWidget};

use crate::data::Table;
use crate::tui::grid::GridState;
use crate::tui::style::Styles;

/// Widest a single column may render; longer cells are cut with an ellipsis.
const MAX_COL_WIDTH: usize = 28;
const MIN_COL_WIDTH: usize = 4;

/// Renders `table` into `area` with the selection, horizontal scroll and
/// view-only sort carried by `grid`.
pub fn render_data_table(frame: &mut Frame, area: Rect, title: &str, table: &Table, grid: &mut GridState) {
    let title_line = format!(
        " {} · {} rows x {} cols{} ",
        title,
        table.n_rows(),
        table.n_cols(),
        match grid.sort {
            Some(sort) => format!(
                " · sort: {} {}",
                table.columns.get(sort.column).map(String::as_str).unwrap_or("?"),
                if sort.ascending { "asc" } else { "desc" }
            ),
            None => String::new(),
        }
    );
    let block = Block::bordered().title(title_line);

    if table.n_cols() == 0 {
        let paragraph = Paragraph::new("(empty table)").style(Styles::dim()).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    grid.clamp(table.n_rows());
    let col_offset = grid.col_offset.min(table.n_cols() - 1);
    let visible = &table.columns[col_offset..];

    // Column widths follow content, bounded to keep wide tables scrollable.
    let widths: Vec<Constraint> = visible
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let column = col_offset + i;
            let cells = table.column_values(column).map(|v| v.to_string().len());
            let width = cells
                .chain(std::iter::once(name.len()))
                .max()
                .unwrap_or(MIN_COL_WIDTH)
                .clamp(MIN_COL_WIDTH, MAX_COL_WIDTH);
            Constraint::Length(width as u16)
        })
        .collect();

    let header = Row::new(
        visible
            .iter()
            .map(|name| Cell::from(Span::styled(clip(name), Styles::table_header()))),
    )
    .style(Styles::table_header());

    let order = grid.row_order(table);
    let rows = order.iter().map(|&index| {
        Row::new(
            table.rows[index][col_offset..]
                .iter()
                .map(|value| Cell::from(clip(&value.to_string()))),
        )
    });

    let widget = TableWidget::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected())
        .column_spacing(1);

    grid.table_state.select(Some(grid.selected));
    frame.render_stateful_widget(widget, area, &mut grid.table_state);
}

/// Cuts a cell to the rendering cap, marking the cut with an ellipsis.
fn clip(text: &str) -> String {
    if text.chars().count() > MAX_COL_WIDTH {
        let mut cut: String = text.chars().take(MAX_COL_WIDTH - 1).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::clip;

    #[test]
    fn test_clip_short_text_unchanged() {
        assert_eq!(clip("abc"), "abc");
    }

    #[test]
    fn test_clip_long_text_gets_ellipsis() {
        let long = "x".repeat(100);
        let clipped = clip(&long);
        assert_eq!(clipped.chars().count(), super::MAX_COL_WIDTH);
        assert!(clipped.ends_with('…'));
    }
}
