use super::*;
use tempfile::TempDir;

fn mkdirs(root: &Path, dirs: &[&str]) {
    for dir in dirs {
        std::fs::create_dir_all(root.join(dir)).unwrap();
    }
}

#[test]
fn test_locate_missing_root_errors() {
    let temp = TempDir::new().unwrap();
    let result = ProjectLayout::locate(&temp.path().join("missing"), &LayoutConfig::default());
    assert!(matches!(result, Err(CoreError::ProjectNotFound { .. })));
}

#[test]
fn test_locate_empty_project() {
    let temp = TempDir::new().unwrap();
    let layout = ProjectLayout::locate(temp.path(), &LayoutConfig::default()).unwrap();
    assert!(layout.contracts_dir.is_none());
    assert!(layout.frontend_roots.is_empty());
    assert!(layout.backend_roots.is_empty());
    assert!(layout.contract_files(&ContractsConfig::default()).is_empty());
}

#[test]
fn test_contracts_candidates_ranked() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["src/contracts", "packages/shared/contracts"]);
    let layout = ProjectLayout::locate(temp.path(), &LayoutConfig::default()).unwrap();
    assert_eq!(
        layout.contracts_dir,
        Some(temp.path().join("packages/shared/contracts"))
    );
}

#[test]
fn test_all_existing_source_roots_are_kept() {
    let temp = TempDir::new().unwrap();
    mkdirs(
        temp.path(),
        &["apps/web/src", "frontend/src", "server/src", "src/routes"],
    );
    let layout = ProjectLayout::locate(temp.path(), &LayoutConfig::default()).unwrap();
    assert_eq!(
        layout.frontend_roots,
        vec![
            temp.path().join("apps/web/src"),
            temp.path().join("src"),
            temp.path().join("frontend/src"),
        ]
    );
    assert_eq!(
        layout.backend_roots,
        vec![temp.path().join("server/src"), temp.path().join("src/routes")]
    );
}

#[test]
fn test_configured_layout_wins() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["contracts", "shared", "web", "apps/web/src"]);
    let config = LayoutConfig {
        contracts_dir: Some("shared".to_string()),
        frontend_roots: vec!["web".to_string(), "missing".to_string()],
        backend_roots: vec![],
        exclude_dirs: vec![],
    };
    let layout = ProjectLayout::locate(temp.path(), &config).unwrap();
    assert_eq!(layout.contracts_dir, Some(temp.path().join("shared")));
    assert_eq!(layout.frontend_roots, vec![temp.path().join("web")]);
}

#[test]
fn test_configured_missing_contracts_dir_is_none() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["contracts"]);
    let config = LayoutConfig {
        contracts_dir: Some("nope".to_string()),
        ..Default::default()
    };
    let layout = ProjectLayout::locate(temp.path(), &config).unwrap();
    assert!(layout.contracts_dir.is_none());
}

#[test]
fn test_contract_files_report_existence() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["contracts"]);
    std::fs::write(temp.path().join("contracts/database.sql"), "").unwrap();
    std::fs::write(temp.path().join("contracts/errors.ts"), "").unwrap();

    let layout = ProjectLayout::locate(temp.path(), &LayoutConfig::default()).unwrap();
    let contracts = ContractsConfig::default();
    let files = layout.contract_files(&contracts);
    let summary: Vec<(&str, bool)> = files.iter().map(|f| (f.name.as_str(), f.exists)).collect();
    assert_eq!(
        summary,
        vec![
            ("database.sql", true),
            ("types.ts", false),
            ("endpoints.ts", false),
            ("validation.ts", false),
            ("errors.ts", true),
        ]
    );

    assert!(layout
        .existing_contract(&contracts, ContractFileKind::Schema)
        .is_some());
    assert!(layout
        .existing_contract(&contracts, ContractFileKind::Interfaces)
        .is_none());
}

#[test]
fn test_for_contracts_dir_uses_parent_as_root() {
    let temp = TempDir::new().unwrap();
    mkdirs(temp.path(), &["shared/contracts", "contracts"]);
    let layout = ProjectLayout::for_contracts_dir(
        &temp.path().join("shared/contracts"),
        &LayoutConfig::default(),
    )
    .unwrap();
    assert_eq!(layout.root, temp.path().join("shared"));
    assert_eq!(
        layout.contracts_dir,
        Some(temp.path().join("shared/contracts"))
    );
}

#[test]
fn test_display_path_is_relative() {
    let temp = TempDir::new().unwrap();
    let layout = ProjectLayout::locate(temp.path(), &LayoutConfig::default()).unwrap();
    assert_eq!(
        layout.display_path(&temp.path().join("src").join("api.ts")),
        Path::new("src").join("api.ts").display().to_string()
    );
}
