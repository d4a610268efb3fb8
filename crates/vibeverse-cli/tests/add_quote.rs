mod common;
use common::TestEnv;
use predicates::prelude::*;

#[test]
fn add_trims_and_lists_in_order() {
    let t = TestEnv::new();
    let out = t.stdout(&["add", "  Rest is productive.  ", "--source", "  Nap Club "]);
    assert!(out.contains("status: Saved your quote."));
    assert!(out.lines().last().unwrap().starts_with("added "));

    t.bin()
        .arg("add")
        .write_stdin("From stdin\n")
        .assert()
        .success();

    let v = t.json(&["quotes", "--json"]);
    let items: Vec<(String, String)> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|q| {
            (
                q["text"].as_str().unwrap().to_string(),
                q["source"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        items,
        [
            ("Keep going.".to_string(), "Anon".to_string()),
            ("Rest is productive.".to_string(), "Nap Club".to_string()),
            ("From stdin".to_string(), "—".to_string()),
        ]
    );
}

#[test]
fn blank_add_reports_status_without_saving() {
    let t = TestEnv::new();
    t.bin()
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type something uplifting first."))
        .stdout(predicate::str::contains("added ").not());
    let v = t.json(&["quotes", "--json"]);
    assert_eq!(v.as_array().unwrap().len(), 1);
}
