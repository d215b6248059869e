use std::result;
use thiserror::Error;

/// Errors produced while resolving a query against the status code table
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No description found for code: {0}")]
    CodeNotFound(u16),

    #[error("No code found corresponding to: {0}")]
    PatternNotMatched(String),

    #[error("No status code found for search: {0}")]
    SearchNotMatched(String),

    #[error("Invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate status code in table: {0}")]
    DuplicateCode(u16),
}

impl LookupError {
    /// True for the "nothing matched" family, which callers report verbatim
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CodeNotFound(_) | Self::PatternNotMatched(_) | Self::SearchNotMatched(_)
        )
    }
}

pub type Result<T> = result::Result<T, LookupError>;
