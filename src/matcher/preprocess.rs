//! Builds the bad-shift table and pattern-hash chains from a pattern list.
//!
//! Corresponds to the per-pattern setup in C `wm_search_prep_pat` +
//! `f_prep` (wumanber_impl.c lines 148–180, 334–358).
//!
//! Both the shift-table block hash and the pattern-hash prefix hash are
//! computed with the byte *ending* the window weighted most significant and
//! the byte *starting* the window weighted least significant — this is the
//! order the C source actually builds (traced from `f_prep`'s `hash = (hash
//! << 4) + nextByte` accumulation, which processes the ending byte first),
//! not the "most-recent-last" phrasing a literal reading of the prose
//! spec might suggest. [`crate::scan`] reproduces the identical order so the
//! two stay mutually consistent — that consistency, not a particular byte
//! order, is what the safety invariant in DESIGN.md actually requires.

use super::{ChainNode, Variant, NIL};
use crate::config::{PAT_HASH_SZ, SHIFT_SZ};

pub(crate) struct Built {
    pub shift_min: Vec<u32>,
    pub pat_hash: Vec<u32>,
    pub chain: Vec<ChainNode>,
}

/// Block hash of the `b` bytes ending at `end` (inclusive) in `bytes`, using
/// `lookup` to canonicalize/nibble-mask each byte before accumulation.
///
/// `lookup` is `tr1` at scan time (see [`crate::scan`]) and `|byte| byte &
/// 0x0F` at preprocess time (the C source intentionally hashes the raw byte,
/// not `tr[byte]`, when building the shift table — see wumanber_impl.c
/// `f_prep`, which reads `Pattern[i] & Mask` rather than `wm->tr[Pattern[i]]`).
fn block_hash(bytes: &[u8], end: usize, b: usize, lookup: impl Fn(u8) -> u8) -> u32 {
    let mut h: u32 = 0;
    for j in 0..b {
        h = (h << 4) | (lookup(bytes[end - j]) as u32 & 0x0F);
    }
    h
}

/// Full `m`-byte prefix hash of the window ending at `end` in `bytes`.
/// `mask` is `0x0F` for the bs2/bs3 variants and `0xFF` for bs1 (where `m ==
/// 1` and this degenerates to the single canonicalized byte).
fn prefix_hash(bytes: &[u8], end: usize, m: usize, tr: &[u8; 256], mask: u8) -> u32 {
    let mut h: u32 = 0;
    for j in 0..m {
        let byte = bytes[end - j];
        h = (h << 4) + (tr[byte as usize] as u32 & mask as u32);
    }
    h & (PAT_HASH_SZ as u32 - 1)
}

pub(crate) fn build(
    patterns: &[Box<[u8]>],
    m: usize,
    variant: Variant,
    tr: &[u8; 256],
) -> Built {
    let default_shift = if variant == Variant::Bs1 {
        0
    } else {
        (m - 2) as u32
    };
    let mut shift_min = vec![default_shift; SHIFT_SZ];
    let mut pat_hash = vec![NIL; PAT_HASH_SZ];
    let mut chain: Vec<ChainNode> = Vec::with_capacity(patterns.len());

    let b = variant.block_width();
    let prefix_mask: u8 = if variant == Variant::Bs1 { 0xFF } else { 0x0F };

    for (idx, pattern) in patterns.iter().enumerate() {
        if b > 0 {
            // k ranges over ending offsets [B-1, m-1] of every B-byte block
            // inside this pattern's first m bytes.
            for k in (b - 1)..m {
                let h = block_hash(pattern, k, b, |byte| byte) as usize & (SHIFT_SZ - 1);
                let candidate = (m - 1 - k) as u32;
                if shift_min[h] >= candidate {
                    shift_min[h] = candidate;
                }
            }
        }

        let h = prefix_hash(pattern, m - 1, m, tr, prefix_mask) as usize;
        let node_idx = chain.len() as u32;
        chain.push(ChainNode {
            index: idx as u32,
            next: pat_hash[h],
        });
        pat_hash[h] = node_idx;
    }

    Built {
        shift_min,
        pat_hash,
        chain,
    }
}
