//! Command-line argument parsing for the `wmgrep` driver.
//!
//! Corresponds to the `argv` loop at the top of wumanber_impl.c's standalone
//! `main()`, which recognises `-i`/`-n`, `-c`, `-q` and two positional file
//! arguments. Re-expressed here with `clap`'s derive API, matching the
//! teacher crate's preference for a declarative parser over a hand-rolled
//! `argv` loop.

use clap::Parser;

/// Parsed command-line arguments for a single scan invocation.
#[derive(Debug, Parser)]
#[command(name = "wmgrep", about = "Multi-pattern exact string matcher")]
pub struct Cli {
    /// Case-insensitive matching.
    #[arg(short = 'i', long = "nocase", visible_short_alias = 'n')]
    pub nocase: bool,

    /// Suppress per-match output; keep counts only.
    #[arg(short = 'c')]
    pub quiet_matches: bool,

    /// Suppress statistics on stderr.
    #[arg(short = 'q')]
    pub quiet_stats: bool,

    /// Newline-separated list of literal patterns.
    pub patterns_file: String,

    /// File to scan.
    pub text_file: String,
}

impl Cli {
    /// Parses `argv` (not including argv[0]), returning a usage error message
    /// on failure rather than printing and exiting directly — the caller
    /// decides how to report it (see [`crate::cli::run`]).
    pub fn try_parse_from_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(std::iter::once("wmgrep".into()).chain(argv.into_iter().map(Into::into)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_positionals() {
        let cli = Cli::try_parse_from_args(["pat.txt", "text.txt"]).unwrap();
        assert_eq!(cli.patterns_file, "pat.txt");
        assert_eq!(cli.text_file, "text.txt");
        assert!(!cli.nocase);
        assert!(!cli.quiet_matches);
        assert!(!cli.quiet_stats);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from_args(["-i", "-c", "-q", "pat.txt", "text.txt"]).unwrap();
        assert!(cli.nocase);
        assert!(cli.quiet_matches);
        assert!(cli.quiet_stats);
    }

    #[test]
    fn accepts_n_as_nocase_alias() {
        let cli = Cli::try_parse_from_args(["-n", "pat.txt", "text.txt"]).unwrap();
        assert!(cli.nocase);
    }

    #[test]
    fn missing_positional_is_usage_error() {
        assert!(Cli::try_parse_from_args(["pat.txt"]).is_err());
    }

    #[test]
    fn unknown_flag_is_usage_error() {
        assert!(Cli::try_parse_from_args(["-z", "pat.txt", "text.txt"]).is_err());
    }
}
