//! File loading primitives for the command-line driver.
//!
//! Corresponds to `load_file` and `load_pat_list` in wumanber_impl.c's
//! standalone driver (the original `main()`, not the library API).
//!
//! Verbosity-gated diagnostics are emitted via the [`crate::displaylevel`]
//! macro, in the same shape as the teacher crate's `io::file_io` module.

use std::fs;
use std::io;
use std::path::Path;

use crate::displaylevel;

/// Reads `path` as a newline-separated pattern list.
///
/// Each line is one literal pattern: raw bytes up to, not including, the
/// `\n`. A trailing `\n` at end-of-file is optional. A trailing `\r` before
/// `\n` is kept as part of the pattern — there is no CRLF normalization,
/// matching the C source, which only ever splits on `\n`.
pub fn load_patterns(path: &str) -> io::Result<Vec<Vec<u8>>> {
    let bytes = fs::read(path).map_err(|e| {
        displaylevel!(1, "{}: {}\n", path, e);
        e
    })?;

    let mut patterns: Vec<Vec<u8>> = bytes
        .split(|&b| b == b'\n')
        .map(|line| line.to_vec())
        .collect();

    // A trailing `\n` produces one empty trailing element from `split`; drop
    // it so an optional final newline doesn't manifest as an empty pattern.
    if patterns.last().is_some_and(|p| p.is_empty()) {
        patterns.pop();
    }

    displaylevel!(2, "loaded {} pattern(s) from {}\n", patterns.len(), path);
    Ok(patterns)
}

/// Reads `path` verbatim into one in-memory byte buffer.
pub fn load_text(path: &str) -> io::Result<Vec<u8>> {
    if Path::new(path).is_dir() {
        displaylevel!(1, "{}: is a directory\n", path);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path}: is a directory"),
        ));
    }

    let bytes = fs::read(path).map_err(|e| {
        displaylevel!(1, "{}: {}\n", path, e);
        e
    })?;
    displaylevel!(2, "loaded {} byte(s) from {}\n", bytes.len(), path);
    Ok(bytes)
}
