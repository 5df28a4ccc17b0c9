mod common;

use common::chgate;

#[test]
fn classify_covers_the_decision_tree() {
    let cases: [(&[&str], &str); 4] = [
        (&["--service-down", "--pre-approved"], "Emergency"),
        (&["--service-down"], "Emergency"),
        (&["--pre-approved"], "Standard"),
        (&[], "Normal"),
    ];
    for (flags, expected) in cases {
        let mut args = vec!["classify", "--json"];
        args.extend_from_slice(flags);
        let run = chgate(&args);
        assert!(run.success, "stderr: {}", run.stderr);
        assert_eq!(run.json()["classification"], expected, "flags {flags:?}");
    }
}

#[test]
fn score_reports_tier_boundaries() {
    let low = chgate(&["score", "--scores", "2,2,2,2,2,2,2", "--json"]).json();
    assert_eq!(low["composite"], 2.0);
    assert_eq!(low["tier"], "Low");

    let medium = chgate(&["score", "--scores", "2,2,2,2,2,3,2", "--json"]).json();
    assert_eq!(medium["composite"], 2.1);
    assert_eq!(medium["tier"], "Medium");
}

#[test]
fn score_text_lists_breakdown() {
    let run = chgate(&["score", "--scores", "5,5,5,5,5,5,5"]);
    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("Composite score: 5.0 (High Risk)"));
    assert!(run.stdout.contains("  Impact Scope: 5"));
}

#[test]
fn score_rejects_wrong_count() {
    let run = chgate(&["score", "--scores", "3,3,3"]);
    assert!(!run.success);
    assert!(run
        .stderr
        .contains("expected 7 risk dimension scores, got 3"));
}

#[test]
fn path_step_counts() {
    let cases: [(&[&str], usize); 5] = [
        (&["--classification", "standard"], 6),
        (&["--classification", "emergency"], 7),
        (&["--classification", "normal", "--tier", "low"], 7),
        (&["--classification", "normal", "--tier", "medium"], 8),
        (&["--classification", "normal", "--tier", "high"], 10),
    ];
    for (flags, expected) in cases {
        let mut args = vec!["path", "--json"];
        args.extend_from_slice(flags);
        let run = chgate(&args);
        assert!(run.success, "stderr: {}", run.stderr);
        assert_eq!(
            run.json()["steps"].as_array().map(Vec::len),
            Some(expected),
            "flags {flags:?}"
        );
    }
}

#[test]
fn normal_path_without_tier_fails() {
    let run = chgate(&["path", "--classification", "normal"]);
    assert!(!run.success);
    assert!(run.stderr.contains("risk tier is required"));
}

#[test]
fn paths_lists_all_five_workflows() {
    let run = chgate(&["paths", "--json"]);
    assert!(run.success, "stderr: {}", run.stderr);
    let value = run.json();
    let paths = value.as_array().expect("array of paths");
    assert_eq!(paths.len(), 5);
    assert_eq!(paths[0]["title"], "Standard Change Flow (Section 4.1)");
}

#[test]
fn init_without_out_prints_stub() {
    let run = chgate(&["init"]);
    assert!(run.success, "stderr: {}", run.stderr);
    let value = run.json();
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["risk"]["impact_scope"], 3);
}

#[test]
fn score_reports_negative_values_by_dimension() {
    let run = chgate(&["score", "--scores", "-1,3,3,3,3,3,3"]);
    assert!(!run.success);
    assert!(
        run.stderr
            .contains("Impact Scope score must be between 1 and 5 (got -1)"),
        "stderr: {}",
        run.stderr
    );
}
