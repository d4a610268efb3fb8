mod common;
use common::TestEnv;

#[test]
fn scripted_session_walks_the_panels() {
    let t = TestEnv::new();
    let script = "\
open add
open favorites
add   | nobody
add Fresh words | Me
fav
remove-fav 7
close favorites
bogus
quit
new
";
    let out = t
        .bin()
        .arg("run")
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    let at = |needle: &str| {
        lines
            .iter()
            .position(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("missing {needle:?} in:\n{out}"))
    };
    let blank = at("status: Type something uplifting first.");
    let saved = at("status: Saved your quote.");
    let added = at("status: Added to favorites.");
    let removed = at("status: Removed favorite.");
    assert!(blank < saved && saved < added && added < removed);
    assert!(lines[saved + 1].starts_with("quote: Fresh words — Me"));
    assert!(out.contains("error: unknown action 'bogus'"));
    assert!(out.contains("  (no favorites yet)"));
    // startup, added, favorited, unfavorited by removal; nothing after quit ran
    assert_eq!(lines.iter().filter(|l| l.starts_with("quote:")).count(), 4);
}

#[test]
fn undecodable_line_is_reported_and_skipped() {
    let t = TestEnv::new();
    let mut script = b"theme\n".to_vec();
    script.extend_from_slice(&[0xff, 0xfe, b'\n']);
    script.extend_from_slice(b"add Still here | Me\nquit\n");
    let out = t
        .bin()
        .arg("run")
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let out = String::from_utf8(out).unwrap();
    assert!(out.lines().any(|l| l.starts_with("error: ")), "{out}");
    assert!(out.contains("status: Saved your quote."), "{out}");
}
