//! datalot — interactive dashboard for consolidating tabular endpoint data.
//!
//! The library provides the consolidation pipeline:
//! - `data` — table model, sample dataset, consolidation, summary stats
//! - `fetch` — HTTP/JSON endpoint fetching behind the `DataSource` seam
//! - `pipeline` — one fetch action: ordered traversal with error isolation
//! - `export` — CSV serialization of the consolidated table
//! - `tui` — the interactive terminal dashboard driving the pipeline

pub mod data;
pub mod export;
pub mod fetch;
pub mod pipeline;
pub mod tui;
