//! End-to-end test of the `wmgrep` CLI surface: argument parsing, file
//! loading, scanning and exit codes, driven through `wm::cli::run` the same
//! way `main` does.

use std::fs;

fn write_fixture(dir: &std::path::Path, name: &str, content: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_owned()
}

#[test]
fn full_scan_reports_matches_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let pat = write_fixture(dir.path(), "patterns.txt", b"he\nshe\nhis\nhers\n");
    let text = write_fixture(dir.path(), "text.txt", b"ushers");

    let code = wm::cli::run(["-q", &pat, &text]);
    assert_eq!(code, 0);
}

#[test]
fn no_match_exits_with_no_match_code() {
    let dir = tempfile::tempdir().unwrap();
    let pat = write_fixture(dir.path(), "patterns.txt", b"zzz\n");
    let text = write_fixture(dir.path(), "text.txt", b"ushers");

    let code = wm::cli::run(["-q", &pat, &text]);
    assert_eq!(code, wm::cli::EXIT_NO_MATCH);
}

#[test]
fn case_insensitive_flag_widens_matches() {
    let dir = tempfile::tempdir().unwrap();
    let pat = write_fixture(dir.path(), "patterns.txt", b"FOO\n");
    let text = write_fixture(dir.path(), "text.txt", b"foo FOO Foo");

    let code = wm::cli::run(["-i", "-q", &pat, &text]);
    assert_eq!(code, 0);
}

#[test]
fn missing_positional_exits_with_usage_error() {
    let code = wm::cli::run(["only-one-arg"]);
    assert_eq!(code, wm::cli::EXIT_USAGE_ERROR);
}

#[test]
fn empty_pattern_line_exits_with_empty_pattern_code() {
    let dir = tempfile::tempdir().unwrap();
    let pat = write_fixture(dir.path(), "patterns.txt", b"foo\n\nbar\n");
    let text = write_fixture(dir.path(), "text.txt", b"whatever");

    let code = wm::cli::run(["-q", &pat, &text]);
    assert_eq!(code, wm::cli::EXIT_EMPTY_PATTERN);
}

#[test]
fn nonexistent_pattern_file_exits_with_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let text = write_fixture(dir.path(), "text.txt", b"whatever");

    let code = wm::cli::run(["-q", "/nonexistent/patterns.txt", &text]);
    assert_eq!(code, wm::cli::EXIT_FILE_ERROR);
}

#[test]
fn nonexistent_text_file_exits_with_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let pat = write_fixture(dir.path(), "patterns.txt", b"foo\n");

    let code = wm::cli::run(["-q", &pat, "/nonexistent/text.txt"]);
    assert_eq!(code, wm::cli::EXIT_FILE_ERROR);
}

#[test]
fn large_pattern_set_uses_bs3_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let mut body = String::new();
    for i in 0..200 {
        if i == 37 {
            body.push_str("quiz\n");
        } else {
            body.push_str(&format!("p{i:03}\n"));
        }
    }
    let pat = write_fixture(dir.path(), "patterns.txt", body.as_bytes());

    let mut text = vec![b'x'; 200];
    text[10..14].copy_from_slice(b"quiz");
    text[100..104].copy_from_slice(b"quiz");
    let text_path = write_fixture(dir.path(), "text.bin", &text);

    let code = wm::cli::run(["-q", &pat, &text_path]);
    assert_eq!(code, 0);
}
