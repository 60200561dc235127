#![no_main]
use libfuzzer_sys::fuzz_target;

#[derive(arbitrary::Arbitrary, Debug)]
struct Input {
    patterns: Vec<Vec<u8>>,
    text: Vec<u8>,
    nocase: bool,
    one_match_per_line: bool,
    one_match_per_offset: bool,
}

fuzz_target!(|input: Input| {
    // Construction rejects empty pattern lists / zero-length patterns; skip
    // those rather than treat them as failures.
    let patterns: Vec<&[u8]> = input.patterns.iter().map(|p| p.as_slice()).collect();
    if patterns.is_empty() || patterns.iter().any(|p| p.is_empty()) {
        return;
    }
    // Bound the pattern set so a single input can't force gigabytes of table
    // allocation via n_pat > 100 interacting with huge per-pattern sizes.
    if patterns.len() > 2000 || patterns.iter().any(|p| p.len() > 4096) {
        return;
    }

    let flags = wm::ScanFlags {
        one_match_per_line: input.one_match_per_line,
        one_match_per_offset: input.one_match_per_offset,
    };
    let matcher = match wm::Matcher::with_flags(&patterns, input.nocase, flags) {
        Ok(m) => m,
        Err(_) => return,
    };

    let mut n = 0u64;
    wm::scan(&matcher, &input.text, |idx, offset| {
        assert!(idx >= 1 && (idx as usize) <= matcher.n_patterns());
        assert!((offset as usize) < input.text.len());
        n += 1;
    });
    let _ = n;
});
