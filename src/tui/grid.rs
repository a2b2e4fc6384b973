//! View state for one rendered table: selection, horizontal scroll and
//! view-only sorting.
//!
//! Sorting never reorders the underlying [`Table`]; it only changes the
//! order rows are drawn in. The export and the consolidation invariants
//! always see ingestion order.

use ratatui::widgets::TableState;

use crate::data::Table;

/// Active sort: column index plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: usize,
    pub ascending: bool,
}

/// Per-view table state.
#[derive(Debug, Default)]
pub struct GridState {
    /// Selected row, as an index into the *displayed* order.
    pub selected: usize,
    /// First visible column (horizontal scroll).
    pub col_offset: usize,
    /// Current view-only sort, if any.
    pub sort: Option<Sort>,
    /// ratatui scroll bookkeeping, persisted across frames.
    pub table_state: TableState,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets selection, scroll and sort; used when fresh data arrives.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self, row_count: usize) {
        self.selected = (self.selected + 1).min(row_count.saturating_sub(1));
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page);
    }

    pub fn page_down(&mut self, page: usize, row_count: usize) {
        self.selected = (self.selected + page).min(row_count.saturating_sub(1));
    }

    pub fn scroll_left(&mut self) {
        self.col_offset = self.col_offset.saturating_sub(1);
    }

    pub fn scroll_right(&mut self, col_count: usize) {
        self.col_offset = (self.col_offset + 1).min(col_count.saturating_sub(1));
    }

    /// Cycles the sort column: none -> 0 -> 1 -> ... -> last -> none.
    /// A fresh sort starts descending, matching "largest first" reading.
    pub fn cycle_sort(&mut self, col_count: usize) {
        if col_count == 0 {
            return;
        }
        self.sort = match self.sort {
            None => Some(Sort {
                column: 0,
                ascending: false,
            }),
            Some(sort) if sort.column + 1 < col_count => Some(Sort {
                column: sort.column + 1,
                ..sort
            }),
            Some(_) => None,
        };
    }

    pub fn toggle_sort_direction(&mut self) {
        if let Some(sort) = &mut self.sort {
            sort.ascending = !sort.ascending;
        }
    }

    /// Row indices of `table` in display order. Stable, so rows that
    /// compare equal keep their ingestion order.
    pub fn row_order(&self, table: &Table) -> Vec<usize> {
        let mut order: Vec<usize> = (0..table.n_rows()).collect();
        if let Some(Sort { column, ascending }) = self.sort {
            if column < table.n_cols() {
                order.sort_by(|&a, &b| {
                    let cmp = table.rows[a][column].total_cmp(&table.rows[b][column]);
                    if ascending { cmp } else { cmp.reverse() }
                });
            }
        }
        order
    }

    /// Clamps selection after the row count changed.
    pub fn clamp(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = 0;
        } else if self.selected >= row_count {
            self.selected = row_count - 1;
        }
    }
}
