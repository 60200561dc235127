//! Command-line driver: argument parsing, file loading, scan dispatch.
//!
//! Corresponds to wumanber_impl.c's standalone `main()`: `load_pat_list`,
//! `load_file`, `wm_search_init`, `wm_search_text`, `count_em`, and the
//! `-i/-n, -c, -q` handling, plus that `main`'s exit codes (0/1/2/3).

pub mod args;
pub mod constants;
pub mod help;

use std::collections::HashSet;

use anyhow::Context;

use crate::displayout;
use crate::io::file_io::{load_patterns, load_text};
use crate::matcher::Matcher;

/// Usage error: bad flags or wrong number of positionals.
pub const EXIT_USAGE_ERROR: i32 = 1;
/// No match was found in the text. Shares its value with
/// [`EXIT_USAGE_ERROR`] — the source conflates the two under one
/// `exit(1)` (`had_matches = wm->n_matches ? 0 : 1` in wumanber_impl.c's
/// `main()`), and this driver preserves that.
pub const EXIT_NO_MATCH: i32 = 1;
/// The pattern file contained an empty pattern.
pub const EXIT_EMPTY_PATTERN: i32 = 2;
/// A pattern or text file could not be opened.
pub const EXIT_FILE_ERROR: i32 = 3;

/// Runs one invocation of the CLI from `argv` (excluding argv[0]).
///
/// Returns the process exit code: `0` if at least one match was found, `1`
/// on usage error or on a clean run that found no match, `2` on empty
/// pattern, `3` on file-open error.
pub fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match args::Cli::try_parse_from_args(argv) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{e}");
            help::print_usage(constants::COMPRESSOR_NAME);
            return EXIT_USAGE_ERROR;
        }
    };

    match scan_files(&cli) {
        Ok(n_matches) => {
            if n_matches > 0 {
                0
            } else {
                EXIT_NO_MATCH
            }
        }
        Err(e) => {
            eprintln!("{e:#}");
            match e.downcast_ref::<crate::matcher::MatcherError>() {
                Some(_) => EXIT_EMPTY_PATTERN,
                None => EXIT_FILE_ERROR,
            }
        }
    }
}

/// Loads both files, constructs the matcher and runs the scan, printing
/// matches and statistics per the CLI flags. Returns the total match count.
///
/// Corresponds to the body of wumanber_impl.c's `main()` between
/// `load_pat_list`/`load_file` and `wm_search_text`, re-expressed with
/// `anyhow::Context` in the same style as the teacher crate's
/// `cli::args::parse_args`.
fn scan_files(cli: &args::Cli) -> anyhow::Result<u64> {
    constants::set_display_level(if cli.quiet_stats { 1 } else { 2 });

    let patterns = load_patterns(&cli.patterns_file)
        .with_context(|| format!("failed to read patterns file {}", cli.patterns_file))?;
    let text = load_text(&cli.text_file)
        .with_context(|| format!("failed to read text file {}", cli.text_file))?;

    let matcher = Matcher::new(&patterns, cli.nocase)?;

    let mut distinct: HashSet<u32> = HashSet::new();
    let n_matches = crate::scan::scan(&matcher, &text, |idx, offset| {
        distinct.insert(idx);
        if !cli.quiet_matches {
            let pattern = String::from_utf8_lossy(matcher.pattern(idx));
            displayout!("offset={offset}: idx={idx}, '{pattern}'\n");
        }
    });

    crate::displaylevel!(2, "words:{} {}\n", distinct.len(), n_matches);

    Ok(n_matches)
}
