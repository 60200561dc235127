// cli/constants.rs — display infrastructure for the command-line front-end.
//
// Migrated from the lz4cli.c DISPLAYLEVEL/DISPLAY/END_PROCESS family: a
// crate-level atomic verbosity level gates stderr diagnostics the same way
// lz4cli.c's file-scoped `static unsigned displayLevel` does.

use std::sync::atomic::{AtomicU32, Ordering};

pub const COMPRESSOR_NAME: &str = "wmgrep";

// ── Display level global ──────────────────────────────────────────────────
//
// 0 = silent; 1 = errors only; 2 = normal (default); 3 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────
//
//   DISPLAYOUT(...)      → print!(...) / use `displayout!` macro
//   DISPLAY(...)         → eprint!(...) / use `display!` macro
//   DISPLAYLEVEL(l, ...) → if display_level() >= l { eprint!(...) }

/// Print to stdout — equivalent to C `DISPLAYOUT(...)`.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr — equivalent to C `DISPLAY(...)`.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level` — equivalent to C `DISPLAYLEVEL(l, ...)`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print debug output — equivalent to C `DEBUGOUTPUT(...)`.
/// Only active in debug builds.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        eprint!($($arg)*);
    };
}

/// Terminate the process with an error code after printing a diagnostic.
///
/// Usage: `end_process!(exit_code, "message {}", arg)`
#[macro_export]
macro_rules! end_process {
    ($error:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        eprint!("Error in {}, line {} : \n", file!(), line!());
        if $crate::cli::constants::display_level() >= 1 {
            eprint!("Error {} : ", $error);
            eprint!($($arg)*);
            eprint!("\n");
        }
        std::process::exit($error as i32);
    }};
}
