//! HTTP status code lookup.
//!
//! A fixed table of status codes with their reason phrase and a short
//! explanation, queried by exact code, by digit pattern (`1xx`, `30[12]`) or
//! by a case-insensitive search over the descriptions.

pub mod engine;
pub mod error;
pub mod formatter;
pub mod regex_utils;
pub mod table;
pub mod types;

pub use engine::QueryEngine;
pub use error::{LookupError, Result};
pub use formatter::{render, render_all, OutputStyle};
pub use table::StatusCodeTable;
pub use types::{Query, StatusCodeEntry};

/// Resolve a query against the built-in table
pub fn lookup(query: &Query) -> Result<Vec<StatusCodeEntry>> {
    QueryEngine::default().resolve(query)
}
