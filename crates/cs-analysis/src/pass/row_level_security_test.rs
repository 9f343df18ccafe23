use super::*;
use crate::test_utils::*;

#[test]
fn test_tables_without_rls_warned() {
    let sql = r#"CREATE TABLE profiles (id UUID);
CREATE TABLE cvs (id UUID);
ALTER TABLE profiles ENABLE ROW LEVEL SECURITY;
"#;
    let model = make_model(sql, "", "");
    let issues = RowLevelSecurity.run(&model, &Config::default());

    assert_eq!(codes(&issues), vec!["C010"]);
    assert_eq!(
        issues[0].message(),
        "Table 'cvs' does not enable row level security"
    );
    assert_eq!(issues[0].line(), Some(2));
    assert_eq!(
        issues[0].suggestion(),
        Some("Add 'ALTER TABLE cvs ENABLE ROW LEVEL SECURITY;' to database.sql")
    );
}

#[test]
fn test_no_schema_no_issues() {
    let model = ContractModel::default();
    assert!(RowLevelSecurity.run(&model, &Config::default()).is_empty());
}
