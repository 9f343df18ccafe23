use super::*;
use crate::extraction::DiagnosticKind;

const TYPES_TS: &str = r#"// Generated types
export interface Profile {
  id: string;
  email: string;
  fullName: string | null;
  avatar_url?: string;
  created_at: string;
}

export interface CV {
  id: string
  user_id: string
  file_size_bytes: number
  status:
    | 'pending'
    | 'processed'
  parsed_content: Record<string, unknown> | null
}
"#;

fn field_names(interface: &Interface) -> Vec<&str> {
    interface.fields.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_extract_semicolon_members() {
    let result = extract_interfaces(TYPES_TS, "types.ts");
    assert!(result.diagnostics.is_empty());

    let profile = result.value.get("Profile").unwrap();
    assert_eq!(profile.line, 2);
    assert_eq!(
        field_names(profile),
        vec!["id", "email", "fullName", "avatar_url", "created_at"]
    );
    assert_eq!(profile.field("fullName").unwrap().type_expr, "string | null");
    assert!(profile.field("avatar_url").unwrap().optional);
    assert!(!profile.field("email").unwrap().optional);
    assert_eq!(profile.field("email").unwrap().line, 4);
}

#[test]
fn test_extract_newline_members_with_multiline_union() {
    let result = extract_interfaces(TYPES_TS, "types.ts");
    let cv = result.value.get("CV").unwrap();
    assert_eq!(
        field_names(cv),
        vec!["id", "user_id", "file_size_bytes", "status", "parsed_content"]
    );
    assert_eq!(
        cv.field("status").unwrap().type_expr,
        "| 'pending' | 'processed'"
    );
    assert_eq!(
        cv.field("parsed_content").unwrap().type_expr,
        "Record<string, unknown> | null"
    );
}

#[test]
fn test_accepts_null() {
    let result = extract_interfaces(TYPES_TS, "types.ts");
    let profile = result.value.get("Profile").unwrap();
    assert!(profile.field("fullName").unwrap().accepts_null());
    assert!(profile.field("avatar_url").unwrap().accepts_null());
    assert!(!profile.field("email").unwrap().accepts_null());
}

#[test]
fn test_generics_extends_and_modifiers() {
    let ts = r#"
interface Page<T> extends Base<T>, Meta {
  readonly items: T[];
  'total-count': number;
  "next"?: string;
  readonly: boolean;
  [key: string]: unknown;
  load(page: number): Promise<void>;
  refresh?(): void;
  nested: { inner: string; other: number };
  handler: (a: string, b: number) => void;
}
"#;
    let result = extract_interfaces(ts, "types.ts");
    assert!(result.diagnostics.is_empty());
    let page = result.value.get("Page").unwrap();
    assert_eq!(
        field_names(page),
        vec!["items", "total-count", "next", "readonly", "nested", "handler"]
    );
    assert!(page.field("next").unwrap().optional);
    assert_eq!(
        page.field("nested").unwrap().type_expr,
        "{ inner: string; other: number }"
    );
    assert_eq!(
        page.field("handler").unwrap().type_expr,
        "(a: string, b: number) => void"
    );
}

#[test]
fn test_object_type_alias() {
    let ts = r#"
export type Settings = {
  theme: string;
  locale?: string;
};
export type Status = 'a' | 'b';
import type { Other } from './other';
"#;
    let result = extract_interfaces(ts, "types.ts");
    assert_eq!(result.value.len(), 1);
    let settings = result.value.get("Settings").unwrap();
    assert_eq!(field_names(settings), vec!["theme", "locale"]);
}

#[test]
fn test_comments_ignored() {
    let ts = r#"
interface Note {
  /** Body text; may contain markdown */
  body: string; // trailing
  // author: string;
  title: string
}
"#;
    let result = extract_interfaces(ts, "types.ts");
    let note = result.value.get("Note").unwrap();
    assert_eq!(field_names(note), vec!["body", "title"]);
}

#[test]
fn test_duplicate_field_last_wins() {
    let ts = "interface A {\n  x: string;\n  y: number;\n  x: number;\n}";
    let result = extract_interfaces(ts, "types.ts");
    let a = result.value.get("A").unwrap();
    assert_eq!(field_names(a), vec!["x", "y"]);
    assert_eq!(a.field("x").unwrap().type_expr, "number");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::Duplicate);
    assert_eq!(result.diagnostics[0].line, 4);
}

#[test]
fn test_duplicate_interface_last_wins_in_place() {
    let ts = "interface A { a: string }\ninterface B { b: string }\ninterface A { c: string }";
    let result = extract_interfaces(ts, "types.ts");
    let names: Vec<&str> = result
        .value
        .interfaces
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(field_names(&result.value.interfaces[0]), vec!["c"]);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].line, 3);
}

#[test]
fn test_unclosed_interface_does_not_swallow_next() {
    let ts = r#"export interface Broken {
  id: string;

export interface Good {
  id: string;
}
"#;
    let result = extract_interfaces(ts, "types.ts");
    assert!(result.value.get("Broken").is_none());
    assert!(result.value.get("Good").is_some());
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].kind, DiagnosticKind::Malformed);
    assert_eq!(result.diagnostics[0].line, 1);
}

#[test]
fn test_field_named_type_is_not_a_declaration() {
    let ts = "interface Event {\n  type: string;\n  interface: string;\n}";
    let result = extract_interfaces(ts, "types.ts");
    assert!(result.diagnostics.is_empty());
    assert_eq!(
        field_names(result.value.get("Event").unwrap()),
        vec!["type", "interface"]
    );
}
