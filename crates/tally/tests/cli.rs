//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write `content` to `name` inside `tmp` and return the path as a string.
fn fixture(tmp: &TempDir, name: &str, content: &str) -> String {
    let path = tmp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn info_lists_stopword_languages() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("english"));
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
}

#[test]
fn verbose_flag_accepted() {
    cmd().args(["--verbose", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Words Command
// =============================================================================

#[test]
fn words_ranks_non_stopwords() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "sample.txt", "the cat sat on the mat, the cat sat");

    let output = cmd().args(["words", &file, "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    let tokens: Vec<&str> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["token"].as_str().unwrap())
        .collect();
    // "the" and "on" are stopwords; ties keep first-appearance order.
    assert_eq!(tokens, vec!["cat", "sat", "mat"]);
}

#[test]
fn words_json_has_percentages_and_counts() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "sample.txt", "the cat sat on the mat");

    let output = cmd()
        .args(["words", &file, "--top", "all", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(json["total_words"], 3);
    assert_eq!(json["distinct_words"], 3);
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries[0]["token"], "cat");
    assert_eq!(entries[0]["count"], 1);
    let sum: f64 = entries
        .iter()
        .map(|e| e["percentage"].as_f64().unwrap())
        .sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn words_empty_file_fails() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "empty.txt", "");

    cmd()
        .args(["words", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to rank"));
}

#[test]
fn words_unknown_language_fails_with_available_list() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "sample.txt", "the cat sat on the mat");

    cmd()
        .args(["words", &file, "--language", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no stopword list"))
        .stderr(predicate::str::contains("english"));
}

#[test]
fn words_list_languages_needs_no_file() {
    cmd()
        .args(["words", "--list-languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("english"))
        .stdout(predicate::str::contains("turkish"));
}

#[test]
fn words_missing_file_fails() {
    cmd()
        .args(["words", "/nonexistent/file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// Numbers Command
// =============================================================================

#[test]
fn numbers_ranks_column_values() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "data.csv", "id,score\n1,3\n2,3\n3,5\n4,\n5,5\n6,5\n");

    let output = cmd()
        .args(["numbers", &file, "--column", "score", "--top", "all", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(json["total_values"], 5);
    assert_eq!(json["missing"], 1);
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries[0]["token"], 5.0);
    assert_eq!(entries[0]["count"], 3);
    assert_eq!(entries[0]["percentage"], 60.0);
    assert_eq!(entries[1]["token"], 3.0);
    assert_eq!(entries[1]["count"], 2);
    assert_eq!(entries[1]["percentage"], 40.0);
}

#[test]
fn numbers_stats_flag_adds_summary() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "data.csv", "score\n1\n2\n3\n");

    let output = cmd()
        .args(["numbers", &file, "--column", "score", "--stats", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    assert_eq!(json["stats"]["count"], 3);
    assert_eq!(json["stats"]["mean"], 2.0);
    assert_eq!(json["stats"]["median"], 2.0);
}

#[test]
fn numbers_unknown_column_fails() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "data.csv", "a,b\n1,2\n");

    cmd()
        .args(["numbers", &file, "--column", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no such column"));
}

#[test]
fn numbers_all_missing_column_fails() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "data.csv", "id,score\n1,\n2,\n");

    cmd()
        .args(["numbers", &file, "--column", "score"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no values to rank"));
}

// =============================================================================
// Emails Command
// =============================================================================

#[test]
fn emails_lists_matches() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(
        &tmp,
        "mail.txt",
        "Contact us at john@doe.com or support@doe.org",
    );

    cmd()
        .args(["emails", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("john@doe.com"))
        .stdout(predicate::str::contains("support@doe.org"));
}

#[test]
fn emails_no_matches_fails() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "mail.txt", "no addresses here");

    cmd()
        .args(["emails", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no email addresses found"));
}

#[test]
fn emails_save_then_contacts_lists_them() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "mail.txt", "write to jane@example.com please");
    let store = tmp.path().join("contacts.json");
    let store = store.to_str().unwrap();

    cmd()
        .args(["emails", &file, "--save", "--contacts", store])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 new contacts saved"));

    cmd()
        .args(["contacts", "--contacts", store])
        .assert()
        .success()
        .stdout(predicate::str::contains("jane@example.com"));

    // The store on disk is a flat JSON array.
    let raw = std::fs::read_to_string(store).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, serde_json::json!(["jane@example.com"]));
}

#[test]
fn contacts_clear_empties_the_store() {
    let tmp = TempDir::new().unwrap();
    let store = tmp.path().join("contacts.json");
    std::fs::write(&store, r#"["old@example.com"]"#).unwrap();
    let store = store.to_str().unwrap();

    cmd()
        .args(["contacts", "--contacts", store, "--clear"])
        .assert()
        .success();

    let raw = std::fs::read_to_string(store).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

// =============================================================================
// Anonymize Command
// =============================================================================

#[test]
fn anonymize_replaces_builtin_names() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "text.txt", "John met Sarah. They talked.");

    cmd()
        .args(["anonymize", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("xxx met xxx."))
        .stdout(predicate::str::contains("John").not());
}

#[test]
fn anonymize_uses_names_file_when_given() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "text.txt", "Astrid stayed home.");
    let names = fixture(&tmp, "names.txt", "Astrid\n");

    cmd()
        .args(["anonymize", &file, "--names-file", &names])
        .assert()
        .success()
        .stdout(predicate::str::contains("xxx stayed home."));
}

#[test]
fn anonymize_missing_names_file_fails() {
    let tmp = TempDir::new().unwrap();
    let file = fixture(&tmp, "text.txt", "Some text.");

    cmd()
        .args(["anonymize", &file, "--names-file", "/nonexistent/names.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read name list"));
}

// =============================================================================
// Password Command
// =============================================================================

#[test]
fn password_default_is_twelve_chars() {
    let output = cmd().arg("password").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    assert_eq!(stdout.trim_end_matches('\n').len(), 12);
}

#[test]
fn password_custom_length() {
    let output = cmd().args(["password", "--length", "20"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    assert_eq!(stdout.trim_end_matches('\n').len(), 20);
}

#[test]
fn password_single_class_draws_only_from_it() {
    let output = cmd()
        .args(["password", "--length", "32", "--digits"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    assert!(
        stdout
            .trim_end_matches('\n')
            .chars()
            .all(|c| c.is_ascii_digit())
    );
}

#[test]
fn password_json_output() {
    let output = cmd().args(["password", "--json"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(json["password"].is_string());
}
