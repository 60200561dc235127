//! Compile-time configuration constants.
//! Migrated from wumanber_impl.c / wumanber_impl.h (SHIFT_SZ, PAT_HASH_SZ).
//!
//! The two table sizes are compile-time constants in the C source (plain
//! `#define`s). They stay `const` here for the same reason: both tables are
//! indexed by masking a hash with `SIZE - 1`, so `SIZE` must remain a power
//! of two for that mask to be correct.

/// Size of the bad-shift table (`shift_min[]`). Must be a power of two.
/// Corresponds to `SHIFT_SZ` in wumanber_impl.h.
pub const SHIFT_SZ: usize = 1 << 12;

/// Size of the pattern-hash-chain table (`pat_hash[]`). Must be a power of two.
/// Corresponds to `PAT_HASH_SZ` in wumanber_impl.h.
pub const PAT_HASH_SZ: usize = 1 << 12;

/// Beyond this many patterns, construction logs a warning instead of failing.
/// Corresponds to the `4*PAT_HASH_SZ` literal in the C `load_pat_list` driver.
pub const PATTERN_OVERFLOW_THRESHOLD: usize = 4 * PAT_HASH_SZ;
