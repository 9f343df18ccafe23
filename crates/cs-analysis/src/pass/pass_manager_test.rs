use super::*;
use crate::test_utils::*;

const SQL: &str = "CREATE TABLE profiles (id UUID, full_name TEXT);";
const TS: &str = "interface Profile { id: string; fullName: string }";

#[test]
fn test_pass_names_in_run_order() {
    assert_eq!(
        PassManager::with_defaults().pass_names(),
        vec![
            "contract_files",
            "extraction",
            "type_sync",
            "route_sync",
            "nullability",
            "row_level_security",
        ]
    );
}

#[test]
fn test_describe_lists_every_pass() {
    let manager = PassManager::with_defaults();
    let described = manager.describe();
    assert_eq!(described.len(), manager.pass_names().len());
    assert!(described.iter().all(|(_, d)| !d.is_empty()));
}

#[test]
fn test_opt_in_passes_skipped_by_default() {
    let model = make_model(SQL, TS, "");
    let issues = PassManager::with_defaults().run(&model, &Config::default(), None);
    assert_eq!(codes(&issues), vec!["C005"]);
}

#[test]
fn test_opt_in_passes_enabled_by_config() {
    let model = make_model(SQL, TS, "");
    let mut config = Config::default();
    config.checks.row_level_security = true;
    let issues = PassManager::with_defaults().run(&model, &config, None);
    assert_eq!(codes(&issues), vec!["C005", "C010"]);
}

#[test]
fn test_filter_selects_named_passes_only() {
    let model = ContractModel::new(None, Vec::new());
    let filter = vec!["row_level_security".to_string()];
    let manager = PassManager::with_defaults();
    let issues = manager.run(&model, &Config::default(), Some(filter.as_slice()));
    assert!(issues.is_empty());

    let model = make_model(SQL, TS, "");
    let issues = manager.run(&model, &Config::default(), Some(filter.as_slice()));
    assert_eq!(codes(&issues), vec!["C010"]);
}

#[test]
fn test_structural_issues_come_first() {
    let model = ContractModel::new(None, Vec::new())
        .with_schema(cs_contracts::extract_schema(SQL, SCHEMA_FILE))
        .with_interfaces(cs_contracts::extract_interfaces(TS, INTERFACES_FILE));
    let issues = PassManager::with_defaults().run(&model, &Config::default(), None);
    assert_eq!(codes(&issues), vec!["C001", "C005"]);
}
