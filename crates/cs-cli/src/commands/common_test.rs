use super::*;

#[test]
fn test_calculate_column_widths() {
    let rows = vec![
        vec!["profiles".to_string(), "3".to_string()],
        vec!["cvs".to_string(), "12".to_string()],
    ];
    assert_eq!(calculate_column_widths(&["TABLE", "COLUMNS"], &rows), vec![8, 7]);
}

#[test]
fn test_format_table() {
    let rows = vec![vec!["cvs".to_string(), "2".to_string()]];
    assert_eq!(
        format_table(&["TABLE", "N"], &rows),
        "TABLE  N\n-----  -\ncvs    2"
    );
}

#[test]
fn test_exit_code_display_is_empty() {
    assert_eq!(ExitCode(1).to_string(), "");
}

#[test]
fn test_load_project_with_contracts_only() {
    let temp = tempfile::TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("shared/contracts")).unwrap();
    let global = GlobalArgs {
        verbose: false,
        project_dir: "ignored".to_string(),
        config: None,
    };
    let dir = temp.path().join("shared/contracts");
    let (_, layout) = load_project(&global, Some(dir.to_str().unwrap())).unwrap();
    assert_eq!(layout.root, temp.path().join("shared"));
    assert_eq!(layout.contracts_dir, Some(dir));
}

#[test]
fn test_missing_config_flag_is_error() {
    let temp = tempfile::TempDir::new().unwrap();
    let global = GlobalArgs {
        verbose: false,
        project_dir: temp.path().display().to_string(),
        config: Some(temp.path().join("nope.yml").display().to_string()),
    };
    assert!(load_project(&global, None).is_err());
}
