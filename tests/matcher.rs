//! Integration tests for the public `wm` API, covering the invariants and
//! concrete scenarios from the matcher's design notes.

fn collect(matcher: &wm::Matcher, text: &[u8]) -> Vec<(u32, u64)> {
    let mut out = Vec::new();
    wm::scan(matcher, text, |i, o| out.push((i, o)));
    out
}

#[test]
fn scenario_1_overlapping_prefixes() {
    let pats: [&[u8]; 4] = [b"he", b"she", b"his", b"hers"];
    let m = wm::Matcher::new(&pats, false).unwrap();
    assert_eq!(collect(&m, b"ushers"), vec![(2, 1), (4, 2)]);
}

#[test]
fn scenario_2_overlapping_same_pattern() {
    let pats: [&[u8]; 1] = [b"aa"];
    let m = wm::Matcher::new(&pats, false).unwrap();
    assert_eq!(collect(&m, b"aaaa"), vec![(1, 0), (1, 1), (1, 2)]);
}

#[test]
fn scenario_4_case_insensitive() {
    let pats: [&[u8]; 1] = [b"Foo"];
    let m = wm::Matcher::new(&pats, true).unwrap();
    assert_eq!(collect(&m, b"foo FOO Foo"), vec![(1, 0), (1, 4), (1, 8)]);
}

#[test]
fn scenario_5_single_byte_variant() {
    let pats: [&[u8]; 1] = [b"a"];
    let m = wm::Matcher::new(&pats, false).unwrap();
    assert_eq!(collect(&m, b"banana"), vec![(1, 1), (1, 3), (1, 5)]);
}

#[test]
fn case_mode_equivalence_invariant() {
    let pats: [&[u8]; 3] = [b"Alpha", b"BETA", b"gamma"];
    let text: &[u8] = b"alphaBETAGammaALPHA";

    let nocase = wm::Matcher::new(&pats, true).unwrap();
    let got = collect(&nocase, text);

    let lowered_pats: Vec<Vec<u8>> = pats.iter().map(|p| p.to_ascii_lowercase()).collect();
    let lowered_text = text.to_ascii_lowercase();
    let sensitive = wm::Matcher::new(&lowered_pats, false).unwrap();
    let want = collect(&sensitive, &lowered_text);

    assert_eq!(got, want);
}

#[test]
fn order_invariant_offsets_nondecreasing() {
    let pats: [&[u8]; 4] = [b"he", b"she", b"his", b"hers"];
    let m = wm::Matcher::new(&pats, false).unwrap();
    let got = collect(&m, b"she shells sea shells by the hershey shore");
    for pair in got.windows(2) {
        assert!(pair[0].1 <= pair[1].1);
    }
}

#[test]
fn determinism_invariant() {
    let pats: [&[u8]; 4] = [b"he", b"she", b"his", b"hers"];
    let m = wm::Matcher::new(&pats, false).unwrap();
    let text: &[u8] = b"she sells seashells by the hershey shore";
    assert_eq!(collect(&m, text), collect(&m, text));
}

#[test]
fn pattern_overflow_logs_warning_but_still_constructs() {
    let owned: Vec<Vec<u8>> = (0u32..20_000).map(|i| format!("w{i:06}").into_bytes()).collect();
    let refs: Vec<&[u8]> = owned.iter().map(|p| p.as_slice()).collect();
    let matcher = wm::Matcher::new(&refs, false).expect("overflow is a warning, not an error");
    assert_eq!(matcher.n_patterns(), 20_000);

    let mut text = vec![b'z'; 64];
    text[10..16].copy_from_slice(b"w09999");
    let got = collect(&matcher, &text);
    assert!(got.iter().any(|&(idx, off)| matcher.pattern(idx) == b"w09999" && off == 10));
}

#[test]
fn rejects_empty_pattern_list() {
    let pats: [&[u8]; 0] = [];
    assert_eq!(
        wm::Matcher::new(&pats, false).unwrap_err(),
        wm::MatcherError::NoPatterns
    );
}

#[test]
fn rejects_zero_length_pattern() {
    let pats: [&[u8]; 2] = [b"abc", b""];
    assert_eq!(
        wm::Matcher::new(&pats, false).unwrap_err(),
        wm::MatcherError::EmptyPattern { index: 2 }
    );
}

#[test]
fn concurrent_scans_against_shared_matcher() {
    use std::sync::Arc;
    use std::thread;

    let pats: [&[u8]; 4] = [b"he", b"she", b"his", b"hers"];
    let matcher = Arc::new(wm::Matcher::new(&pats, false).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || collect(&matcher, b"ushers"))
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), vec![(2, 1), (4, 2)]);
    }
}
