//! End-to-end pipeline tests on a temporary repository layout.

use std::path::{Path, PathBuf};

use baseliner_core::config::BaselinerConfig;
use baseliner_core::errors::{PatchError, RunError};
use baseliner_engine::pipeline;
use baseliner_engine::report::{create_reporter, ConsoleReporter, JsonReporter, Reporter};
use baseliner_engine::reset::reset_baseline;

const DELIMITER: &str = "--------------------";

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn config() -> BaselinerConfig {
    BaselinerConfig::default()
}

/// Lay out one functional test file under the provider's project dir.
fn write_test_file(root: &Path, provider: &str, identifier: &str, lines: &[&str]) -> PathBuf {
    let path = root
        .join("test")
        .join(format!("EFCore.{provider}.FunctionalTests"))
        .join(identifier);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, format!("{}\n", lines.join("\n"))).unwrap();
    path
}

fn write_baseline(root: &Path, blocks: &[&str]) -> PathBuf {
    let path = root.join("QueryBaseline.txt");
    let mut text = String::new();
    for block in blocks {
        text.push_str(block);
        text.push_str("\n\n");
        text.push_str(DELIMITER);
        text.push('\n');
    }
    std::fs::write(&path, text).unwrap();
    path
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_end_to_end_single_record() {
    let dir = tempdir();
    let root = dir.path();

    let target = write_test_file(
        root,
        "SqlServer",
        "Query/MySqlServerQueryTest.cs",
        &["a", "b", "c", "d", "}", "f"],
    );
    let baseline = write_baseline(
        root,
        &["Foo.Bar.Query.MySqlServerQueryTest : 5\nline1\nline2\ntrailer"],
    );

    let report = pipeline::run(root, &config()).unwrap();

    assert_eq!(report.parse.records, 1);
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.records_applied(), 1);
    assert!(report.baseline_reset);

    // Recorded lines appear immediately above the anchor.
    assert_eq!(
        read_lines(&target),
        vec!["a", "b", "c", "d", "line1", "line2", "}", "f"]
    );
    // Records are consumed exactly once.
    assert_eq!(std::fs::read_to_string(&baseline).unwrap(), "");
}

#[test]
fn test_zero_records_truncates_baseline_without_touching_files() {
    let dir = tempdir();
    let root = dir.path();

    let target = write_test_file(
        root,
        "SqlServer",
        "Query/MySqlServerQueryTest.cs",
        &["a", "}"],
    );
    let before = read_lines(&target);

    // Only noise: malformed header plus an unknown provider.
    let baseline = write_baseline(
        root,
        &[
            "garbage without separator\nbody\ntrailer",
            "Foo.Bar.Query.MyQueryTest : 5\nbody\ntrailer",
        ],
    );

    let report = pipeline::run(root, &config()).unwrap();

    assert_eq!(report.parse.records, 0);
    assert_eq!(report.parse.skipped_malformed_header, 1);
    assert_eq!(report.parse.skipped_unknown_provider, 1);
    assert!(report.files.is_empty());
    assert!(report.baseline_reset);

    assert_eq!(read_lines(&target), before);
    assert_eq!(std::fs::read_to_string(&baseline).unwrap(), "");
}

#[test]
fn test_multiple_providers_in_one_run() {
    let dir = tempdir();
    let root = dir.path();

    let sqlserver = write_test_file(
        root,
        "SqlServer",
        "Query/MySqlServerQueryTest.cs",
        &["a", "}", "z"],
    );
    let sqlite = write_test_file(
        root,
        "Sqlite",
        "Query/MySqliteQueryTest.cs",
        &["a", "b", "}"],
    );

    write_baseline(
        root,
        &[
            "Foo.Bar.Query.MySqlServerQueryTest : 2\nsqlserver-line\ntrailer",
            "Foo.Bar.Query.MySqliteQueryTest : 3\nsqlite-line\ntrailer",
        ],
    );

    let report = pipeline::run(root, &config()).unwrap();

    assert_eq!(report.files.len(), 2);
    assert_eq!(read_lines(&sqlserver), vec!["a", "sqlserver-line", "}", "z"]);
    assert_eq!(read_lines(&sqlite), vec!["a", "b", "sqlite-line", "}"]);
}

#[test]
fn test_patch_failure_leaves_baseline_intact() {
    let dir = tempdir();
    let root = dir.path();

    // No closing brace anywhere: the record cannot anchor.
    write_test_file(
        root,
        "SqlServer",
        "Query/MySqlServerQueryTest.cs",
        &["a", "b", "c"],
    );
    let baseline = write_baseline(
        root,
        &["Foo.Bar.Query.MySqlServerQueryTest : 3\nx\ntrailer"],
    );

    let err = pipeline::run(root, &config()).unwrap_err();
    assert!(matches!(
        err,
        RunError::Patch(PatchError::AnchorNotFound { .. })
    ));

    // The resetter was never reached.
    assert!(!std::fs::read_to_string(&baseline).unwrap().is_empty());
}

#[test]
fn test_missing_baseline_is_error() {
    let dir = tempdir();
    let err = pipeline::run(dir.path(), &config()).unwrap_err();
    assert!(matches!(err, RunError::Baseline(_)));
}

#[test]
fn test_missing_target_file_is_error() {
    let dir = tempdir();
    let root = dir.path();

    write_baseline(
        root,
        &["Foo.Bar.Query.MySqlServerQueryTest : 2\nx\ntrailer"],
    );

    let err = pipeline::run(root, &config()).unwrap_err();
    assert!(matches!(err, RunError::Patch(PatchError::Read { .. })));
}

#[test]
fn test_reset_is_idempotent() {
    let dir = tempdir();
    let baseline = dir.path().join("QueryBaseline.txt");
    std::fs::write(&baseline, "leftover").unwrap();

    reset_baseline(&baseline).unwrap();
    assert_eq!(std::fs::read_to_string(&baseline).unwrap(), "");

    // Running the resetter again on an already-empty file is a no-op.
    reset_baseline(&baseline).unwrap();
    assert_eq!(std::fs::read_to_string(&baseline).unwrap(), "");
}

#[test]
fn test_reset_creates_missing_file_empty() {
    let dir = tempdir();
    let baseline = dir.path().join("QueryBaseline.txt");

    reset_baseline(&baseline).unwrap();
    assert_eq!(std::fs::read_to_string(&baseline).unwrap(), "");
}

#[test]
fn test_console_report_shape() {
    let dir = tempdir();
    let root = dir.path();

    write_test_file(
        root,
        "SqlServer",
        "Query/MySqlServerQueryTest.cs",
        &["a", "}"],
    );
    write_baseline(
        root,
        &[
            "Foo.Bar.Query.MySqlServerQueryTest : 2\nx\ntrailer",
            "Foo.Bar.Query.MyQueryTest : 2\ny\ntrailer",
        ],
    );

    let report = pipeline::run(root, &config()).unwrap();

    let text = ConsoleReporter::new(false).generate(&report).unwrap();
    assert!(text.contains("1 file(s) patched"));
    assert!(text.contains("1 record(s) applied"));
    assert!(text.contains("1 block(s) skipped"));
    assert!(text.contains("unknown provider"));
    assert!(text.contains("Baseline truncated"));
    // Color disabled: no escape sequences.
    assert!(!text.contains('\x1b'));
}

#[test]
fn test_json_report_round_trips() {
    let dir = tempdir();
    let root = dir.path();

    write_test_file(
        root,
        "Cosmos",
        "Query/MyCosmosQueryTest.cs",
        &["a", "}"],
    );
    write_baseline(root, &["Foo.Bar.Query.MyCosmosQueryTest : 2\nx\ntrailer"]);

    let report = pipeline::run(root, &config()).unwrap();
    let text = JsonReporter.generate(&report).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["parse"]["records"], 1);
    assert_eq!(value["baseline_reset"], true);
    assert_eq!(value["files"][0]["provider"], "Cosmos");
}

#[test]
fn test_reporter_factory() {
    assert!(create_reporter("console").is_some());
    assert!(create_reporter("json").is_some());
    assert!(create_reporter("sarif").is_none());

    let names: Vec<&str> = baseliner_engine::report::available_formats().to_vec();
    assert_eq!(names, vec!["console", "json"]);
}
