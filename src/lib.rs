//! Multi-pattern exact string matcher, ported from the Wu–Manber `mgrep`
//! rework in wumanber_impl.c.
//!
//! [`matcher::Matcher`] owns the preprocessed shift table and pattern-hash
//! chains; [`scan::scan`] runs a stateless scan against a shared `&Matcher`.
//! `cli` and `io` implement the standalone command-line driver.

pub mod cli;
pub mod config;
pub mod io;
pub mod matcher;
pub mod scan;

pub use matcher::{Matcher, MatcherError, ScanFlags};
pub use scan::scan;
