use super::*;
use std::collections::HashSet;

#[test]
fn test_severity_ordering() {
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
}

#[test]
fn test_category_codes_are_unique() {
    let codes: HashSet<&str> = Category::ALL.iter().map(|c| c.code()).collect();
    assert_eq!(codes.len(), Category::ALL.len());
}

#[test]
fn test_category_from_code_round_trips() {
    for category in Category::ALL {
        assert_eq!(Category::from_code(category.code()), Some(category));
    }
    assert_eq!(Category::from_code("C999"), None);
}

#[test]
fn test_category_serializes_as_label() {
    let json = serde_json::to_string(&Category::FieldMismatch).unwrap();
    assert_eq!(json, "\"Field Mismatch\"");
    let json = serde_json::to_string(&Severity::Warning).unwrap();
    assert_eq!(json, "\"warning\"");
}

#[test]
fn test_issue_builder() {
    let issue = Issue::warning(Category::RouteMismatch, "no route")
        .with_file("src/api.ts")
        .with_line(12)
        .with_suggestion("Add route");
    assert_eq!(issue.severity(), Severity::Warning);
    assert_eq!(issue.category(), Category::RouteMismatch);
    assert_eq!(issue.code(), "C007");
    assert_eq!(issue.file(), Some("src/api.ts"));
    assert_eq!(issue.line(), Some(12));
    assert_eq!(issue.suggestion(), Some("Add route"));
    assert!(!issue.is_error());
}

#[test]
fn test_with_severity_copies() {
    let issue = Issue::warning(Category::MissingField, "missing");
    let promoted = issue.with_severity(Severity::Error);
    assert!(promoted.is_error());
    assert_eq!(issue.severity(), Severity::Warning);
    assert_eq!(promoted.message(), issue.message());
}

#[test]
fn test_issue_display() {
    let issue = Issue::error(Category::Contracts, "No contracts directory found");
    assert_eq!(
        issue.to_string(),
        "[error] C001: No contracts directory found"
    );

    let issue = Issue::warning(Category::RouteMismatch, "no route")
        .with_file("src/a.ts")
        .with_line(3);
    assert_eq!(issue.to_string(), "[warning] C007: no route (src/a.ts:3)");
}
