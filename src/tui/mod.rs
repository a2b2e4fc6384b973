//! Terminal user interface for the dashboard.
//!
//! Keyboard-driven, tab-per-view: sample data, consolidated data, summary
//! statistics and the bar chart, with a status panel tracking each fetch.

mod app;
mod event;
mod grid;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use grid::GridState;
pub use state::{AppState, InputMode, Tab};
