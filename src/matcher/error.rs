//! Construction-time error type for the matcher.
//!
//! Corresponds to the fatal-error path in C `wm_search_prep_pat` (wumanber_impl.c
//! lines 170–174), which prints a diagnostic and calls `exit(2)` when the
//! pattern list contains an empty string. That `exit(2)` is re-expressed here
//! as a plain `Result::Err` — scan-time code never fails, only construction
//! can.

use std::error::Error;
use std::fmt;

/// Reasons [`crate::matcher::Matcher::new`] can refuse to construct a matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherError {
    /// The pattern list is empty — there is nothing to build a shift table from.
    NoPatterns,
    /// Pattern at this 1-based index has zero length.
    ///
    /// Corresponds to `"the pattern file contains an empty string"` in
    /// wumanber_impl.c.
    EmptyPattern { index: usize },
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherError::NoPatterns => write!(f, "pattern list is empty"),
            MatcherError::EmptyPattern { index } => {
                write!(f, "pattern #{index} is empty (zero-length patterns are not allowed)")
            }
        }
    }
}

impl Error for MatcherError {}
