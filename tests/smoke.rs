use assert_cmd::Command;
use tempfile::tempdir;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("newslens").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn enrich_inline_text_prints_a_record() {
    let dir = tempdir().expect("tempdir");
    let mut cmd = Command::cargo_bin("newslens").expect("binary exists");
    let assert = cmd
        .env("ARTICLES_DIR", dir.path().join("articles"))
        .env("DATA_DIR", dir.path().join("data"))
        .env("OUTPUTS_DIR", dir.path().join("outputs"))
        .args(["enrich", "--text", "Apple Inc. announced a new product in Paris."])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 output");
    assert!(stdout.contains("\"entityMentions\""));
    for label in [
        "PERSON", "NORP", "FAC", "ORG", "GPE", "LOC", "PRODUCT", "EVENT", "LAW",
    ] {
        assert!(stdout.contains(&format!("\"{label}\"")), "missing {label}");
    }
    assert!(stdout.contains("Apple Inc."));
}
