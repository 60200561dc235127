//! Binary entry point for the `wmgrep` command-line tool.
//!
//! Corresponds to the standalone `main()` at the bottom of
//! wumanber_impl.c: parses argv, loads the pattern and text files,
//! constructs a matcher, runs one scan, and exits with the matching code.

use std::process::ExitCode;

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(wm::cli::run(argv) as u8)
}
