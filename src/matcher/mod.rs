//! Wu–Manber multi-pattern exact matcher.
//!
//! Corresponds to `struct WuManber` and its lifecycle functions in
//! wumanber_impl.c:
//!   - [`Matcher::new`] / [`Matcher::with_flags`] ← `wm_search_init` +
//!     `wm_search_prep_pat` + `wm_search_defaults`
//!   - [`Matcher::set_flags`]                      ← direct field assignment
//!     on `wm->one_match_per_line` / `wm->one_match_per_offset`
//!   - `Drop`                                      ← `wm_search_free` (RAII
//!     replaces the explicit free + chain-node walk)
//!
//! The handle stores no callback, no callback data, and no match counter —
//! those are parameters of [`crate::scan::scan`] instead (see the crate-level
//! concurrency notes).

mod error;
mod preprocess;
mod translate;

pub use error::MatcherError;

use crate::config::{PAT_HASH_SZ, SHIFT_SZ};

/// End-of-chain sentinel for [`Matcher::chain`] and [`Matcher::pat_hash`].
pub(crate) const NIL: u32 = u32::MAX;

/// One node of a pattern-hash chain, stored in a contiguous arena.
///
/// Corresponds to `struct pat_list { int index; struct pat_list *next; }` in
/// wumanber_impl.c, with the pointer replaced by an arena index (see
/// DESIGN.md).
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChainNode {
    /// 0-based pattern index.
    pub index: u32,
    /// Arena index of the next node in the chain, or [`NIL`].
    pub next: u32,
}

/// Policy flags that adjust how matches are reported.
///
/// Corresponds to `wm->one_match_per_line` / `wm->one_match_per_offset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanFlags {
    /// Skip the cursor to the next `\n` after the first match at a position.
    pub one_match_per_line: bool,
    /// Report at most one match per starting offset, then advance.
    pub one_match_per_offset: bool,
}

/// Which scan loop a constructed matcher uses.
///
/// Corresponds to `wm->use_bs1` / `wm->use_bs3` (a third, implicit state is
/// the 2-byte-block default when neither flag is set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variant {
    /// Single-byte dispatch — selected when the shortest pattern has length 1.
    Bs1,
    /// 2-byte block hashing — the default multi-byte variant.
    Bs2,
    /// 3-byte block hashing — selected for large pattern sets (`n_pat > 100`)
    /// whose shortest pattern is at least 3 bytes.
    Bs3,
}

impl Variant {
    pub(crate) fn block_width(self) -> usize {
        match self {
            Variant::Bs1 => 0,
            Variant::Bs2 => 2,
            Variant::Bs3 => 3,
        }
    }
}

/// A preprocessed multi-pattern matcher.
///
/// Immutable after construction except for [`ScanFlags`], which may be
/// changed between scans via [`Matcher::set_flags`]. See the crate-level
/// documentation for the concurrency model: a shared `&Matcher` may be
/// scanned from multiple threads simultaneously.
pub struct Matcher {
    patterns: Vec<Box<[u8]>>,
    p_size: usize,
    variant: Variant,
    nocase: bool,
    tr: [u8; 256],
    tr1: [u8; 256],
    shift_min: Vec<u32>,
    pat_hash: Vec<u32>,
    chain: Vec<ChainNode>,
    flags: ScanFlags,
}

impl Matcher {
    /// Builds a matcher from `patterns`, failing if the list is empty or any
    /// pattern is zero-length.
    ///
    /// Corresponds to `wm_search_init(pat_list, n_pat, nocase, progname)`.
    pub fn new<P: AsRef<[u8]>>(patterns: &[P], nocase: bool) -> Result<Self, MatcherError> {
        Self::with_flags(patterns, nocase, ScanFlags::default())
    }

    /// Like [`Matcher::new`], additionally pre-setting [`ScanFlags`].
    pub fn with_flags<P: AsRef<[u8]>>(
        patterns: &[P],
        nocase: bool,
        flags: ScanFlags,
    ) -> Result<Self, MatcherError> {
        if patterns.is_empty() {
            return Err(MatcherError::NoPatterns);
        }
        for (i, p) in patterns.iter().enumerate() {
            if p.as_ref().is_empty() {
                return Err(MatcherError::EmptyPattern { index: i + 1 });
            }
        }

        if patterns.len() > crate::config::PATTERN_OVERFLOW_THRESHOLD {
            crate::displaylevel!(
                1,
                "warning: {} patterns exceeds the recommended maximum of {}; hash chains may be long\n",
                patterns.len(),
                crate::config::PATTERN_OVERFLOW_THRESHOLD
            );
        }

        let owned: Vec<Box<[u8]>> = patterns.iter().map(|p| p.as_ref().into()).collect();
        let p_size = owned.iter().map(|p| p.len()).min().unwrap();
        let variant = if p_size == 1 {
            Variant::Bs1
        } else if owned.len() > 100 && p_size >= 3 {
            Variant::Bs3
        } else {
            Variant::Bs2
        };

        let tr = translate::build_tr(nocase);
        let tr1 = translate::build_tr1(&tr);

        let built = preprocess::build(&owned, p_size, variant, &tr);

        Ok(Matcher {
            patterns: owned,
            p_size,
            variant,
            nocase,
            tr,
            tr1,
            shift_min: built.shift_min,
            pat_hash: built.pat_hash,
            chain: built.chain,
            flags,
        })
    }

    /// Updates the reporting policy used by subsequent scans.
    ///
    /// Corresponds to direct assignment of `wm->one_match_per_line` /
    /// `wm->one_match_per_offset` (the C source has no dedicated setter).
    pub fn set_flags(&mut self, one_match_per_line: bool, one_match_per_offset: bool) {
        self.flags = ScanFlags {
            one_match_per_line,
            one_match_per_offset,
        };
    }

    /// Current reporting policy.
    pub fn flags(&self) -> ScanFlags {
        self.flags
    }

    /// Number of patterns this matcher was built from.
    pub fn n_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// Length of the shortest pattern (the scanner's window width).
    pub fn shortest_pattern_len(&self) -> usize {
        self.p_size
    }

    /// Whether case-insensitive (ASCII-only) matching is active.
    pub fn is_nocase(&self) -> bool {
        self.nocase
    }

    /// Raw bytes of pattern `index` (1-based, matching callback indices).
    ///
    /// # Panics
    /// Panics if `index` is `0` or exceeds [`Matcher::n_patterns`].
    pub fn pattern(&self, index: u32) -> &[u8] {
        &self.patterns[index as usize - 1]
    }

    pub(crate) fn patterns(&self) -> &[Box<[u8]>] {
        &self.patterns
    }

    pub(crate) fn variant(&self) -> Variant {
        self.variant
    }

    pub(crate) fn tr(&self) -> &[u8; 256] {
        &self.tr
    }

    pub(crate) fn tr1(&self) -> &[u8; 256] {
        &self.tr1
    }

    pub(crate) fn shift_min(&self, hash: usize) -> u32 {
        self.shift_min[hash & (SHIFT_SZ - 1)]
    }

    pub(crate) fn chain_head(&self, hash: usize) -> u32 {
        self.pat_hash[hash & (PAT_HASH_SZ - 1)]
    }

    pub(crate) fn chain_node(&self, idx: u32) -> ChainNode {
        self.chain[idx as usize]
    }
}
