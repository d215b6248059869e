use std::fmt::{self, Display, Formatter};

/// Wildcard letter that stands for any digit in a pattern query
pub const WILDCARD: char = 'x';

/// Pattern covering every three-digit code; used when no input is given
pub const MATCH_ALL_PATTERN: &str = "xxx";

/// One row of the status code table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCodeEntry {
    pub code: u16,
    pub short: &'static str,
    pub long: &'static str,
}

impl StatusCodeEntry {
    pub const fn new(code: u16, short: &'static str, long: &'static str) -> Self {
        Self { code, short, long }
    }

    /// Short and long text joined with no separator, the haystack for searches
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(self.short.len() + self.long.len());
        text.push_str(self.short);
        text.push_str(self.long);
        text
    }
}

impl Display for StatusCodeEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.short)
    }
}

/// A parsed lookup request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    ExactCode(u16),
    PatternCode(String),
    SearchText {
        text: String,
        case_insensitive: bool,
    },
}

impl Query {
    /// Build a query from the raw command line values.
    ///
    /// A search term always wins. Otherwise exactly three ASCII digits give an
    /// exact lookup, any other non-empty code is a pattern, and no input at
    /// all lists every code.
    pub fn parse(code: Option<&str>, search: Option<&str>) -> Self {
        if let Some(text) = search {
            return Self::search(text);
        }

        match code {
            Some(code) if is_three_digit_code(code) => match code.parse() {
                Ok(value) => Self::ExactCode(value),
                Err(_) => Self::PatternCode(code.to_string()),
            },
            Some(code) if !code.is_empty() => Self::PatternCode(code.to_string()),
            _ => Self::all(),
        }
    }

    pub fn search<S: Into<String>>(text: S) -> Self {
        Self::SearchText {
            text: text.into(),
            case_insensitive: true,
        }
    }

    pub fn pattern<S: Into<String>>(pattern: S) -> Self {
        Self::PatternCode(pattern.into())
    }

    pub fn all() -> Self {
        Self::PatternCode(MATCH_ALL_PATTERN.to_string())
    }

    /// The user input echoed back in "not found" diagnostics
    pub fn input(&self) -> String {
        match self {
            Self::ExactCode(code) => code.to_string(),
            Self::PatternCode(pattern) => pattern.clone(),
            Self::SearchText { text, .. } => text.clone(),
        }
    }
}

fn is_three_digit_code(input: &str) -> bool {
    input.len() == 3 && input.bytes().all(|b| b.is_ascii_digit())
}
