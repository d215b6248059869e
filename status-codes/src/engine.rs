use crate::error::{LookupError, Result};
use crate::regex_utils::{build_code_pattern, build_search_pattern};
use crate::table::StatusCodeTable;
use crate::types::{Query, StatusCodeEntry};
use tracing::debug;

/// Resolves queries against a status code table.
///
/// Successful results are never empty and always ascending by code.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    table: &'a StatusCodeTable,
}

impl Default for QueryEngine<'static> {
    fn default() -> Self {
        Self::new(StatusCodeTable::global())
    }
}

impl<'a> QueryEngine<'a> {
    pub fn new(table: &'a StatusCodeTable) -> Self {
        Self { table }
    }

    pub fn resolve(&self, query: &Query) -> Result<Vec<StatusCodeEntry>> {
        debug!(?query, "resolving query");
        match query {
            Query::ExactCode(code) => self.exact(*code).map(|entry| vec![entry]),
            Query::PatternCode(pattern) => self.pattern(pattern),
            Query::SearchText {
                text,
                case_insensitive,
            } => self.search(text, *case_insensitive),
        }
    }

    pub fn exact(&self, code: u16) -> Result<StatusCodeEntry> {
        let entry = self
            .table
            .get(code)
            .copied()
            .ok_or(LookupError::CodeNotFound(code))?;
        debug!(%entry, "exact match");
        Ok(entry)
    }

    pub fn pattern(&self, pattern: &str) -> Result<Vec<StatusCodeEntry>> {
        let regex = build_code_pattern(pattern)?;
        debug!(pattern, regex = regex.as_str(), "compiled code pattern");

        let matches: Vec<StatusCodeEntry> = self
            .table
            .all_codes()
            .into_iter()
            .filter(|code| regex.is_match(&code.to_string()))
            .filter_map(|code| self.table.get(code).copied())
            .collect();

        debug!(count = matches.len(), "pattern matches");
        if matches.is_empty() {
            return Err(LookupError::PatternNotMatched(pattern.to_string()));
        }
        Ok(matches)
    }

    pub fn search(&self, text: &str, case_insensitive: bool) -> Result<Vec<StatusCodeEntry>> {
        let regex = build_search_pattern(text, case_insensitive)?;
        debug!(text, case_insensitive, "compiled search pattern");

        let matches: Vec<StatusCodeEntry> = self
            .table
            .entries()
            .into_iter()
            .filter(|entry| regex.is_match(&entry.search_text()))
            .copied()
            .collect();

        debug!(count = matches.len(), "search matches");
        if matches.is_empty() {
            return Err(LookupError::SearchNotMatched(text.to_string()));
        }
        Ok(matches)
    }
}
