//! Integration tests for the `csync` binary against fixture projects

use std::process::Command;

const CLEAN: &str = "tests/fixtures/clean_project";
const DRIFT: &str = "tests/fixtures/drift_project";

fn csync_bin() -> String {
    env!("CARGO_BIN_EXE_csync").to_string()
}

/// Run a `csync` command and return (stdout, stderr, success).
fn run_csync(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(csync_bin())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute csync with args {:?}: {}", args, e));
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn exit_code(args: &[&str]) -> Option<i32> {
    Command::new(csync_bin())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute csync with args {:?}: {}", args, e))
        .status
        .code()
}

// ── Validate: text output ───────────────────────────────────────────────

#[test]
fn test_validate_clean_project_passes() {
    let (stdout, stderr, success) = run_csync(&["-p", CLEAN, "validate"]);
    assert!(success, "stdout: {}\nstderr: {}", stdout, stderr);
    assert!(stdout.contains("INTEGRATION VALIDATION REPORT"));
    assert!(stdout.contains("All checks passed! Frontend and backend are in sync."));
}

#[test]
fn test_validate_drift_project_fails() {
    let (stdout, _, success) = run_csync(&["-p", DRIFT, "validate"]);
    assert!(!success);
    assert!(stdout.contains("Found 2 errors, 2 warnings"), "{}", stdout);
    assert!(stdout.contains("--- Contracts ---"));
    assert!(stdout.contains("--- Field Mismatch ---"));
    assert!(stdout.contains(
        "[error] C005: Case mismatch in 'Profile': database has 'full_name', TypeScript has 'fullName'"
    ));
    assert!(stdout.contains("Missing required contract file: validation.ts"));
    assert!(stdout.contains("Frontend calls '/api/cv/upload' but no matching backend route found"));
    assert!(stdout.contains("Validation FAILED - fix errors before deployment"));
}

#[test]
fn test_validate_failure_exit_code_is_one() {
    assert_eq!(exit_code(&["-p", DRIFT, "validate"]), Some(1));
    assert_eq!(exit_code(&["-p", CLEAN, "validate"]), Some(0));
}

// ── Validate: machine output ────────────────────────────────────────────

#[test]
fn test_validate_json_output() {
    let (stdout, _, success) = run_csync(&["-p", DRIFT, "validate", "-o", "json"]);
    assert!(!success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["passed"], false);
    assert_eq!(value["summary"]["errors"], 2);
    assert_eq!(value["summary"]["warnings"], 2);

    let codes: Vec<&str> = value["issues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["C001", "C005", "C004", "C007"]);
    assert_eq!(value["issues"][1]["file"], "contracts/types.ts");
    assert_eq!(value["issues"][1]["line"], 3);
}

#[test]
fn test_validate_jsonl_output() {
    let (stdout, _, _) = run_csync(&["-p", DRIFT, "validate", "-o", "jsonl"]);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in &lines {
        let record: serde_json::Value = serde_json::from_str(line).expect("valid JSON line");
        assert!(record["severity"].is_string());
    }
    assert!(lines[3].starts_with(r#"{"severity":"warning","code":"C007","category":"Route Mismatch""#));
    assert!(lines[3].contains(r#""file":"apps/web/src/upload.ts","line":3"#));
}

#[test]
fn test_validate_clean_jsonl_is_empty() {
    let (stdout, _, success) = run_csync(&["-p", CLEAN, "validate", "-o", "jsonl"]);
    assert!(success);
    assert!(stdout.trim().is_empty(), "{}", stdout);
}

// ── Validate: flags ─────────────────────────────────────────────────────

#[test]
fn test_pass_filter_runs_only_named_passes() {
    let (stdout, _, success) =
        run_csync(&["-p", DRIFT, "validate", "--pass", "route_sync", "-o", "jsonl"]);
    assert!(success, "warnings alone should not fail: {}", stdout);
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("\"code\":\"C007\""));
}

#[test]
fn test_strict_fails_on_warnings() {
    let (stdout, _, success) = run_csync(&["-p", DRIFT, "validate", "--pass", "route_sync", "--strict"]);
    assert!(!success);
    assert!(stdout.contains("Validation FAILED - warnings are not allowed in strict mode"));
}

#[test]
fn test_strict_clean_project_still_passes() {
    let (_, _, success) = run_csync(&["-p", CLEAN, "validate", "--strict"]);
    assert!(success);
}

#[test]
fn test_unknown_pass_is_rejected() {
    let (_, stderr, success) = run_csync(&["-p", CLEAN, "validate", "--pass", "spelling"]);
    assert!(!success);
    assert!(stderr.contains("Unknown pass 'spelling'"), "{}", stderr);
    assert!(stderr.contains("route_sync"));
}

#[test]
fn test_zero_threads_is_rejected() {
    let (_, stderr, success) = run_csync(&["-p", CLEAN, "validate", "--threads", "0"]);
    assert!(!success);
    assert!(stderr.contains("--threads"), "{}", stderr);
}

#[test]
fn test_contracts_only_mode() {
    let contracts = format!("{}/contracts", CLEAN);
    let (stdout, stderr, success) = run_csync(&["validate", "--contracts-only", &contracts]);
    assert!(success, "stdout: {}\nstderr: {}", stdout, stderr);
    assert!(stdout.contains("All checks passed!"));
}

#[test]
fn test_missing_config_file_is_error() {
    let (_, stderr, success) = run_csync(&["-p", CLEAN, "-c", "no-such-config.yml", "validate"]);
    assert!(!success);
    assert!(stderr.contains("Failed to load config"), "{}", stderr);
}

// ── Inspect ─────────────────────────────────────────────────────────────

#[test]
fn test_inspect_table_output() {
    let (stdout, stderr, success) = run_csync(&["-p", CLEAN, "inspect"]);
    assert!(success, "stderr: {}", stderr);
    assert!(stdout.contains("Contracts directory: contracts"));
    assert!(stdout.contains("Tables (3)"));
    assert!(stdout.contains("Interfaces (3)"));
    assert!(stdout.contains("Routes (3)"));
    assert!(stdout.contains("cv_analyses"));
    assert!(stdout.contains("ref CV.GET"));
    assert!(stdout.contains("source file(s) scanned"));
}

#[test]
fn test_inspect_json_output() {
    let (stdout, _, success) = run_csync(&["-p", DRIFT, "inspect", "-o", "json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");

    let passes: Vec<&str> = value["passes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(passes[0], "contract_files");
    assert!(passes.contains(&"route_sync"));
    assert_eq!(value["model"]["contracts_dir"], "contracts");
}

#[test]
fn test_no_subcommand_shows_usage() {
    let (_, stderr, success) = run_csync(&[]);
    assert!(!success);
    assert!(stderr.contains("Usage"));
}
