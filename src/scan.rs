//! Scanning — the two Wu–Manber text-scan variants.
//!
//! Corresponds to `wm_bs3` (wumanber_impl.c lines 221–298, shared between the
//! 2- and 3-byte block widths) and `wm_bs1` (lines 300–332). `wm_search_text`
//! (lines 360–374) is the dispatcher; here that role is played by
//! [`scan`], which additionally never stores `cb`/`n_matches`/`cb_data` on
//! the matcher (see the crate-level concurrency notes): both are local to
//! this call.

use crate::config::PAT_HASH_SZ;
use crate::matcher::{Matcher, Variant, NIL};

/// Runs one scan of `text` against `matcher`, invoking `cb(pattern_index,
/// offset)` for every match found. Returns the number of matches.
///
/// `pattern_index` is 1-based; `offset` is the 0-based byte offset within
/// `text` where the match begins. `matcher` is only ever read — this
/// function may be called concurrently from multiple threads against the
/// same `&Matcher`.
pub fn scan(matcher: &Matcher, text: &[u8], mut cb: impl FnMut(u32, u64)) -> u64 {
    match matcher.variant() {
        Variant::Bs1 => scan_bs1(matcher, text, &mut cb),
        Variant::Bs2 | Variant::Bs3 => scan_bs_multi(matcher, text, &mut cb),
    }
}

/// Block hash of the `b` bytes ending at `end` (inclusive), translated
/// through `tr1`. Ending-byte-most-significant — see `matcher::preprocess`
/// for why this order must match the preprocessor's.
fn block_hash(text: &[u8], end: usize, b: usize, tr1: &[u8; 256]) -> u32 {
    let mut h: u32 = 0;
    for j in 0..b {
        h = (h << 4) | tr1[text[end - j] as usize] as u32;
    }
    h
}

/// Full `m`-byte prefix hash of the window ending at `end`, via `tr1`.
fn prefix_hash(text: &[u8], end: usize, m: usize, tr1: &[u8; 256]) -> u32 {
    let mut h: u32 = 0;
    for j in 0..m {
        h = (h << 4) + tr1[text[end - j] as usize] as u32;
    }
    h & (PAT_HASH_SZ as u32 - 1)
}

/// Byte-for-byte pattern verification, case-aware when `nocase`.
fn verify(tr: &[u8; 256], pattern: &[u8], candidate: &[u8], nocase: bool) -> bool {
    debug_assert_eq!(pattern.len(), candidate.len());
    if nocase {
        pattern
            .iter()
            .zip(candidate)
            .all(|(&p, &c)| tr[p as usize] == tr[c as usize])
    } else {
        pattern == candidate
    }
}

fn scan_bs_multi(matcher: &Matcher, text: &[u8], cb: &mut impl FnMut(u32, u64)) -> u64 {
    let m = matcher.shortest_pattern_len();
    let b = matcher.variant().block_width();
    let len = text.len();
    if len < m {
        return 0;
    }

    let tr = matcher.tr();
    let tr1 = matcher.tr1();
    let nocase = matcher.is_nocase();
    let flags = matcher.flags();
    let patterns = matcher.patterns();

    let mut n_matches: u64 = 0;
    let mut t = m - 1;
    while t < len {
        let h = block_hash(text, t, b, tr1) as usize;
        let s = matcher.shift_min(h);
        if s > 0 {
            t += s as usize;
            continue;
        }

        let h2 = prefix_hash(text, t, m, tr1) as usize;
        let mut node = matcher.chain_head(h2);
        let mut matched_this_position = false;
        while node != NIL {
            let entry = matcher.chain_node(node);
            node = entry.next;

            // Recomputed per candidate: `one_match_per_line` may have moved
            // `t` forward earlier in this same chain walk (mirrors
            // wumanber_impl.c, where `qx` is likewise rederived from the
            // live cursor on every chain-node iteration).
            if t >= len {
                break;
            }
            let qx_start = t - (m - 1);
            let pat = &patterns[entry.index as usize];
            let l = pat.len();
            if qx_start + l <= len {
                let candidate = &text[qx_start..qx_start + l];
                if verify(tr, pat, candidate, nocase) {
                    n_matches += 1;
                    cb(entry.index + 1, qx_start as u64);
                    matched_this_position = true;
                    if flags.one_match_per_line {
                        while t < len && text[t] != b'\n' {
                            t += 1;
                        }
                    }
                }
            }

            if flags.one_match_per_offset && matched_this_position {
                break;
            }
        }

        t += 1; // forced to 1 after a zero-shift position, to catch overlaps
    }
    n_matches
}

fn scan_bs1(matcher: &Matcher, text: &[u8], cb: &mut impl FnMut(u32, u64)) -> u64 {
    let len = text.len();
    let tr = matcher.tr();
    let nocase = matcher.is_nocase();
    let flags = matcher.flags();
    let patterns = matcher.patterns();

    let mut n_matches: u64 = 0;
    let mut t = 0usize;
    while t < len {
        let h = tr[text[t] as usize] as usize;
        let mut node = matcher.chain_head(h);
        let mut matched_this_position = false;
        while node != NIL {
            let entry = matcher.chain_node(node);
            node = entry.next;

            if t >= len {
                break;
            }
            let pat = &patterns[entry.index as usize];
            let l = pat.len();
            if t + l <= len {
                let candidate = &text[t..t + l];
                if verify(tr, pat, candidate, nocase) {
                    n_matches += 1;
                    cb(entry.index + 1, t as u64);
                    matched_this_position = true;
                    if flags.one_match_per_line {
                        while t < len && text[t] != b'\n' {
                            t += 1;
                        }
                    }
                }
            }

            if flags.one_match_per_offset && matched_this_position {
                break;
            }
        }
        t += 1;
    }
    n_matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::ScanFlags;

    fn collect(matcher: &Matcher, text: &[u8]) -> Vec<(u32, u64)> {
        let mut out = Vec::new();
        scan(matcher, text, |i, o| out.push((i, o)));
        out
    }

    #[test]
    fn scenario_1_overlapping_prefixes() {
        let pats: [&[u8]; 4] = [b"he", b"she", b"his", b"hers"];
        let m = Matcher::new(&pats, false).unwrap();
        assert_eq!(collect(&m, b"ushers"), vec![(2, 1), (4, 2)]);
    }

    #[test]
    fn scenario_2_overlapping_same_pattern() {
        let pats: [&[u8]; 1] = [b"aa"];
        let m = Matcher::new(&pats, false).unwrap();
        assert_eq!(collect(&m, b"aaaa"), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn scenario_3_prefix_patterns() {
        let pats: [&[u8]; 3] = [b"abc", b"abcd", b"bcd"];
        let m = Matcher::new(&pats, false).unwrap();
        let mut got = collect(&m, b"xabcdx");
        got.sort();
        let mut want = vec![(1u32, 1u64), (2, 1), (3, 2)];
        want.sort();
        assert_eq!(got, want);
    }

    #[test]
    fn scenario_4_case_insensitive() {
        let pats: [&[u8]; 1] = [b"Foo"];
        let m = Matcher::new(&pats, true).unwrap();
        assert_eq!(
            collect(&m, b"foo FOO Foo"),
            vec![(1, 0), (1, 4), (1, 8)]
        );
    }

    #[test]
    fn scenario_5_single_byte_variant() {
        let pats: [&[u8]; 1] = [b"a"];
        let m = Matcher::new(&pats, false).unwrap();
        assert_eq!(collect(&m, b"banana"), vec![(1, 1), (1, 3), (1, 5)]);
    }

    #[test]
    fn scenario_6_large_pattern_set_uses_bs3() {
        let mut pats: Vec<Vec<u8>> = (0u32..200).map(|i| format!("p{i:03}").into_bytes()).collect();
        pats[37] = b"quiz".to_vec();
        let refs: Vec<&[u8]> = pats.iter().map(|p| p.as_slice()).collect();
        let m = Matcher::new(&refs, false).unwrap();
        assert_eq!(m.variant(), crate::matcher::Variant::Bs3);

        let mut text = vec![b'x'; 200];
        text[10..14].copy_from_slice(b"quiz");
        text[100..104].copy_from_slice(b"quiz");

        let mut offsets: Vec<u64> = Vec::new();
        scan(&m, &text, |idx, off| {
            if idx == 38 {
                offsets.push(off);
            }
        });
        offsets.sort();
        assert_eq!(offsets, vec![10, 100]);
    }

    #[test]
    fn empty_text_has_no_matches() {
        let pats: [&[u8]; 1] = [b"abc"];
        let m = Matcher::new(&pats, false).unwrap();
        assert_eq!(collect(&m, b""), vec![]);
    }

    #[test]
    fn pattern_longer_than_text_has_no_matches() {
        let pats: [&[u8]; 1] = [b"abcdef"];
        let m = Matcher::new(&pats, false).unwrap();
        assert_eq!(collect(&m, b"abc"), vec![]);
    }

    #[test]
    fn match_at_offset_zero_and_end_of_buffer() {
        let pats: [&[u8]; 1] = [b"ab"];
        let m = Matcher::new(&pats, false).unwrap();
        assert_eq!(collect(&m, b"ab"), vec![(1, 0)]);
    }

    #[test]
    fn rescanning_is_deterministic() {
        let pats: [&[u8]; 4] = [b"he", b"she", b"his", b"hers"];
        let m = Matcher::new(&pats, false).unwrap();
        let first = collect(&m, b"ushers");
        let second = collect(&m, b"ushers");
        assert_eq!(first, second);
    }

    #[test]
    fn one_match_per_offset_short_circuits_chain_but_not_scan() {
        let pats: [&[u8]; 2] = [b"aa", b"aaa"];
        let mut m = Matcher::new(&pats, false).unwrap();
        m.set_flags(false, true);
        let got = collect(&m, b"aaaa");
        // At least one report per matched offset, but never both patterns at
        // the same offset.
        let mut seen_offsets = std::collections::HashSet::new();
        for (_, off) in &got {
            assert!(seen_offsets.insert(*off), "offset {off} reported twice");
        }
        assert!(!got.is_empty());
    }

    #[test]
    fn nocase_equivalence_with_prelowered_input() {
        let pats: [&[u8]; 2] = [b"FOO", b"bar"];
        let text = b"xFooxBARx";
        let nocase = Matcher::new(&pats, true).unwrap();
        let got = collect(&nocase, text);

        let lower_pats: [&[u8]; 2] = [b"foo", b"bar"];
        let lower_text: Vec<u8> = text.iter().map(|b| b.to_ascii_lowercase()).collect();
        let sensitive = Matcher::new(&lower_pats, false).unwrap();
        let want = collect(&sensitive, &lower_text);

        assert_eq!(got, want);
    }

    #[test]
    fn scan_flags_default_reports_every_match() {
        let pats: [&[u8]; 1] = [b"a"];
        let m = Matcher::new(&pats, false).unwrap();
        assert_eq!(m.flags(), ScanFlags::default());
    }
}
