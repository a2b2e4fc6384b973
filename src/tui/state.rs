//! Application state for the TUI.

use std::path::PathBuf;

use crate::data::{Table, sample_table, summarize};
use crate::pipeline::{PipelineError, PipelineReport, StatusEvent, StatusLevel};

use super::grid::GridState;

/// Dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sample,
    Data,
    Summary,
    Chart,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Sample, Tab::Data, Tab::Summary, Tab::Chart];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Sample => "1:Sample",
            Tab::Data => "2:Data",
            Tab::Summary => "3:Summary",
            Tab::Chart => "4:Chart",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Sample => Tab::Data,
            Tab::Data => Tab::Summary,
            Tab::Summary => Tab::Chart,
            Tab::Chart => Tab::Sample,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::Sample => Tab::Chart,
            Tab::Data => Tab::Sample,
            Tab::Summary => Tab::Data,
            Tab::Chart => Tab::Summary,
        }
    }
}

/// Keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Endpoint editor popup is capturing keystrokes.
    EndpointEntry,
}

/// All mutable TUI state.
pub struct AppState {
    pub current_tab: Tab,
    pub input_mode: InputMode,

    /// Endpoint addresses, fetched in list order.
    pub endpoints: Vec<String>,
    /// Line being typed in the endpoint editor.
    pub endpoint_input: String,

    pub sample: Table,
    pub sample_summary: Table,
    /// Result of the last successful fetch action.
    pub consolidated: Option<Table>,
    pub summary: Option<Table>,
    /// Status trail of the last action, oldest first.
    pub events: Vec<StatusEvent>,

    pub sample_grid: GridState,
    pub sample_summary_grid: GridState,
    pub data_grid: GridState,
    pub summary_grid: GridState,

    /// Chart axis columns (indices into the consolidated table).
    pub chart_x: usize,
    pub chart_y: usize,

    pub export_path: PathBuf,

    pub show_help: bool,
    pub help_scroll: u16,
    pub show_quit_confirm: bool,
}

impl AppState {
    pub fn new(export_path: PathBuf, endpoints: Vec<String>) -> Self {
        let sample = sample_table();
        let sample_summary = summarize(&sample);
        Self {
            current_tab: Tab::Sample,
            input_mode: InputMode::Normal,
            endpoints,
            endpoint_input: String::new(),
            sample,
            sample_summary,
            consolidated: None,
            summary: None,
            events: Vec::new(),
            sample_grid: GridState::new(),
            sample_summary_grid: GridState::new(),
            data_grid: GridState::new(),
            summary_grid: GridState::new(),
            chart_x: 0,
            chart_y: 1,
            export_path,
            show_help: false,
            help_scroll: 0,
            show_quit_confirm: false,
        }
    }

    /// Installs the result of a successful pipeline run.
    pub fn apply_report(&mut self, report: PipelineReport) {
        self.summary = Some(summarize(&report.table));
        self.chart_x = 0;
        self.chart_y = if report.table.n_cols() > 1 { 1 } else { 0 };
        self.data_grid.reset();
        self.summary_grid.reset();
        self.events = report.events;
        self.consolidated = Some(report.table);
    }

    /// Installs the outcome of a failed pipeline run.
    pub fn apply_failure(&mut self, error: PipelineError) {
        match error {
            PipelineError::EmptyInput => {
                self.push_status(
                    StatusLevel::Error,
                    "Please input at least one API URL.".to_string(),
                );
            }
            PipelineError::NoData(events) => {
                self.events = events;
                self.consolidated = None;
                self.summary = None;
            }
        }
    }

    pub fn push_status(&mut self, level: StatusLevel, message: String) {
        self.events.push(StatusEvent::new(level, message));
    }

    /// The table shown by the current tab, if any.
    pub fn current_table(&self) -> Option<&Table> {
        match self.current_tab {
            Tab::Sample => Some(&self.sample),
            Tab::Data => self.consolidated.as_ref(),
            Tab::Summary => self.summary.as_ref(),
            Tab::Chart => None,
        }
    }

    /// Runs `f` against the grid and table of the current tab.
    fn with_current_grid(&mut self, f: impl FnOnce(&mut GridState, usize, usize)) {
        match self.current_tab {
            Tab::Sample => {
                let (rows, cols) = (self.sample.n_rows(), self.sample.n_cols());
                f(&mut self.sample_grid, rows, cols);
            }
            Tab::Data => {
                if let Some(table) = &self.consolidated {
                    let (rows, cols) = (table.n_rows(), table.n_cols());
                    f(&mut self.data_grid, rows, cols);
                }
            }
            Tab::Summary => {
                if let Some(table) = &self.summary {
                    let (rows, cols) = (table.n_rows(), table.n_cols());
                    f(&mut self.summary_grid, rows, cols);
                }
            }
            Tab::Chart => {}
        }
    }

    pub fn select_up(&mut self) {
        self.with_current_grid(|grid, _, _| grid.select_up());
    }

    pub fn select_down(&mut self) {
        self.with_current_grid(|grid, rows, _| grid.select_down(rows));
    }

    pub fn page_up(&mut self) {
        self.with_current_grid(|grid, _, _| grid.page_up(10));
    }

    pub fn page_down(&mut self) {
        self.with_current_grid(|grid, rows, _| grid.page_down(10, rows));
    }

    pub fn scroll_left(&mut self) {
        self.with_current_grid(|grid, _, _| grid.scroll_left());
    }

    pub fn scroll_right(&mut self) {
        self.with_current_grid(|grid, _, cols| grid.scroll_right(cols));
    }

    pub fn cycle_sort(&mut self) {
        self.with_current_grid(|grid, _, cols| grid.cycle_sort(cols));
    }

    pub fn toggle_sort_direction(&mut self) {
        self.with_current_grid(|grid, _, _| grid.toggle_sort_direction());
    }

    /// Advances the chart's x-axis column, wrapping around.
    pub fn cycle_chart_x(&mut self) {
        if let Some(table) = &self.consolidated {
            if table.n_cols() > 0 {
                self.chart_x = (self.chart_x + 1) % table.n_cols();
            }
        }
    }

    /// Advances the chart's y-axis column, wrapping around.
    pub fn cycle_chart_y(&mut self) {
        if let Some(table) = &self.consolidated {
            if table.n_cols() > 0 {
                self.chart_y = (self.chart_y + 1) % table.n_cols();
            }
        }
    }

    /// Moves the typed endpoint line into the endpoint list.
    pub fn submit_endpoint_input(&mut self) {
        let url = self.endpoint_input.trim().to_string();
        if !url.is_empty() {
            self.endpoints.push(url);
        }
        self.endpoint_input.clear();
    }

    pub fn remove_last_endpoint(&mut self) {
        self.endpoints.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;
    use crate::pipeline::{PipelineReport, StatusLevel};

    fn state() -> AppState {
        AppState::new(PathBuf::from("out.csv"), Vec::new())
    }

    fn two_col_report() -> PipelineReport {
        let mut table = Table::with_columns(["a", "b"]);
        table.push_row(vec![Value::Int(1), Value::Int(2)]);
        PipelineReport {
            table,
            events: vec![StatusEvent::new(StatusLevel::Success, "ok".to_string())],
        }
    }

    #[test]
    fn test_tab_cycle_round_trips() {
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_new_state_has_sample_and_its_summary() {
        let s = state();
        assert_eq!(s.sample.n_rows(), 5);
        assert_eq!(s.sample_summary.n_rows(), 4);
        assert!(s.consolidated.is_none());
    }

    #[test]
    fn test_apply_report_installs_table_summary_and_chart_axes() {
        let mut s = state();
        s.apply_report(two_col_report());

        assert_eq!(s.consolidated.as_ref().unwrap().n_rows(), 1);
        assert_eq!(s.summary.as_ref().unwrap().n_rows(), 2);
        assert_eq!((s.chart_x, s.chart_y), (0, 1));
        assert_eq!(s.events.len(), 1);
    }

    #[test]
    fn test_apply_failure_no_data_clears_previous_result() {
        let mut s = state();
        s.apply_report(two_col_report());
        s.apply_failure(PipelineError::NoData(vec![StatusEvent::new(
            StatusLevel::Warning,
            "No data to consolidate.".to_string(),
        )]));

        assert!(s.consolidated.is_none());
        assert!(s.summary.is_none());
        assert_eq!(s.events.len(), 1);
    }

    #[test]
    fn test_empty_input_failure_keeps_previous_result() {
        let mut s = state();
        s.apply_report(two_col_report());
        s.apply_failure(PipelineError::EmptyInput);

        assert!(s.consolidated.is_some());
        assert!(
            s.events
                .iter()
                .any(|e| e.message.contains("at least one API URL"))
        );
    }

    #[test]
    fn test_chart_axis_cycling_wraps() {
        let mut s = state();
        s.apply_report(two_col_report());

        s.cycle_chart_x();
        assert_eq!(s.chart_x, 1);
        s.cycle_chart_x();
        assert_eq!(s.chart_x, 0);
    }

    #[test]
    fn test_endpoint_editing() {
        let mut s = state();
        s.endpoint_input = "  http://a  ".to_string();
        s.submit_endpoint_input();
        assert_eq!(s.endpoints, vec!["http://a"]);
        assert!(s.endpoint_input.is_empty());

        s.endpoint_input = "   ".to_string();
        s.submit_endpoint_input();
        assert_eq!(s.endpoints.len(), 1);

        s.remove_last_endpoint();
        assert!(s.endpoints.is_empty());
    }
}
