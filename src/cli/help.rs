//! Usage text for the command-line driver.
//!
//! Corresponds to the argument-synopsis comment block at the top of
//! wumanber_impl.c's standalone `main()` and its `-i/-n, -c, -q` flag
//! handling.

use crate::cli::constants::COMPRESSOR_NAME;

/// Print brief usage to stderr. Called from [`crate::cli::run`] alongside
/// the parser's own error message when argument parsing fails.
pub fn print_usage(program: &str) {
    eprintln!("Usage :");
    eprintln!("      {program} [-i] [-c] [-q] patterns_file text_file");
    eprintln!();
    eprintln!("patterns_file : newline-separated list of literal patterns");
    eprintln!("text_file     : file to scan");
    eprintln!();
    eprintln!("Arguments :");
    eprintln!(" -i, -n : case-insensitive matching");
    eprintln!(" -c     : suppress per-match output; keep counts");
    eprintln!(" -q     : suppress statistics on stderr");
}
