use crate::error::{LookupError, Result};
use crate::types::WILDCARD;
use regex::{Regex, RegexBuilder};

const DIGIT_CLASS: &str = "[0-9]";

/// Turn a code pattern such as `1xx` or `30[12]` into a regex matched from the
/// start of the stringified code.
///
/// Every alternative starts at the first digit, but only the end of the
/// pattern text carries the `$`, so in `1|20.` the `1` matches as a prefix.
pub fn build_code_pattern(pattern: &str) -> Result<Regex> {
    let expanded: String = pattern
        .chars()
        .map(|c| {
            if c.eq_ignore_ascii_case(&WILDCARD) {
                DIGIT_CLASS.to_string()
            } else {
                c.to_string()
            }
        })
        .collect();

    Regex::new(&format!("^(?:{expanded}$)")).map_err(|source| LookupError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

pub fn build_search_pattern(text: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(text)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| LookupError::InvalidPattern {
            pattern: text.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_expands_to_digits() {
        let regex = build_code_pattern("1xx").unwrap();
        assert_eq!(regex.as_str(), "^(?:1[0-9][0-9]$)");
        assert!(regex.is_match("100"));
        assert!(regex.is_match("199"));
        assert!(!regex.is_match("200"));
        assert!(!regex.is_match("1004"));
    }

    #[test]
    fn test_uppercase_wildcard() {
        let regex = build_code_pattern("4XX").unwrap();
        assert!(regex.is_match("404"));
    }

    #[test]
    fn test_code_pattern_is_anchored() {
        let regex = build_code_pattern("1").unwrap();
        assert!(!regex.is_match("100"));
        assert!(regex.is_match("1"));

        let regex = build_code_pattern("00").unwrap();
        assert!(!regex.is_match("200"));
    }

    #[test]
    fn test_only_last_alternative_is_end_anchored() {
        let regex = build_code_pattern("1|20.").unwrap();
        assert!(regex.is_match("100"));
        assert!(regex.is_match("205"));
        assert!(!regex.is_match("2050"));
        assert!(!regex.is_match("310"));

        // Every alternative still starts at the first digit
        let regex = build_code_pattern("1|00").unwrap();
        assert!(!regex.is_match("200"));
        assert!(regex.is_match("00"));
    }

    #[test]
    fn test_search_pattern_case_insensitive() {
        let regex = build_search_pattern("webdav", true).unwrap();
        assert!(regex.is_match("WebDAV; RFC 4918"));

        let regex = build_search_pattern("webdav", false).unwrap();
        assert!(!regex.is_match("WebDAV; RFC 4918"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = build_code_pattern("30[12").unwrap_err();
        assert!(matches!(err, LookupError::InvalidPattern { ref pattern, .. } if pattern == "30[12"));

        assert!(build_search_pattern("(unclosed", true).is_err());
    }
}
