//! Relational schema extraction from `CREATE TABLE` declarations

use crate::extraction::{insert_last_wins, Extraction, ParseDiagnostic};
use crate::lexer::{
    find_matching, is_ident_byte, keyword_at, skip_string, split_top_level, strip_comments,
    Cursor, Delimited, Dialect, LineIndex,
};
use serde::Serialize;
use std::collections::BTreeSet;

/// Leading keywords of table-level constraint clauses
const CONSTRAINT_KEYWORDS: &[&str] = &[
    "PRIMARY",
    "FOREIGN",
    "CHECK",
    "CONSTRAINT",
    "UNIQUE",
    "EXCLUDE",
    "LIKE",
];

/// One column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    /// First word of the declared type, upper-cased (e.g. `TEXT`, `VARCHAR(255)`)
    pub data_type: String,
    pub nullable: bool,
    pub primary_key: bool,
    pub line: usize,
}

/// One table declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub file: String,
    pub line: usize,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Every table in a schema file, in declaration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schema {
    pub tables: Vec<Table>,
    /// Tables with `ENABLE ROW LEVEL SECURITY`
    pub rls_enabled: BTreeSet<String>,
}

impl Schema {
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn has_rls(&self, table: &str) -> bool {
        self.rls_enabled.contains(table)
    }
}

/// Extract table declarations from schema text.
///
/// `file` is only used to label tables and diagnostics.
pub fn extract_schema(text: &str, file: &str) -> Extraction<Schema> {
    let stripped = strip_comments(text, Dialect::Sql);
    let lines = LineIndex::new(&stripped);
    let bytes = stripped.as_bytes();

    let mut schema = Schema::default();
    let mut diagnostics = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b == b'\'' || b == b'"' {
            pos = skip_string(bytes, pos, Dialect::Sql);
            continue;
        }
        if !is_ident_byte(b) || (pos > 0 && is_ident_byte(bytes[pos - 1])) {
            pos += 1;
            continue;
        }

        if keyword_at(&stripped, pos, "CREATE") {
            if let Some(header) = parse_create_header(&stripped, pos) {
                pos = read_table(
                    &stripped,
                    pos,
                    header,
                    file,
                    &lines,
                    &mut schema,
                    &mut diagnostics,
                );
                continue;
            }
        } else if keyword_at(&stripped, pos, "ALTER") {
            if let Some((table, end)) = parse_enable_rls(&stripped, pos) {
                schema.rls_enabled.insert(table);
                pos = end;
                continue;
            }
        }

        while pos < bytes.len() && is_ident_byte(bytes[pos]) {
            pos += 1;
        }
    }

    log::debug!(
        "Extracted {} table(s) from {} ({} diagnostic(s))",
        schema.tables.len(),
        file,
        diagnostics.len()
    );
    Extraction::new(schema, diagnostics)
}

/// Name of the table and the offset of its opening `(`
struct CreateHeader {
    name: String,
    open: usize,
}

/// `CREATE [OR REPLACE] [TEMP|TEMPORARY|UNLOGGED] TABLE [IF NOT EXISTS] name (`
fn parse_create_header(text: &str, pos: usize) -> Option<CreateHeader> {
    let mut cursor = Cursor::new(text, pos);
    cursor.eat_keyword("CREATE");
    cursor.eat_keywords(&["OR", "REPLACE"]);
    let _ = cursor.eat_keyword("TEMPORARY")
        || cursor.eat_keyword("TEMP")
        || cursor.eat_keyword("UNLOGGED");
    if !cursor.eat_keyword("TABLE") {
        return None;
    }
    cursor.eat_keywords(&["IF", "NOT", "EXISTS"]);
    let name = cursor.qualified_name()?;
    cursor.skip_ws();
    (cursor.peek() == Some(b'(')).then(|| CreateHeader {
        name,
        open: cursor.pos(),
    })
}

/// `ALTER TABLE [IF EXISTS] [ONLY] name ENABLE ROW LEVEL SECURITY`
fn parse_enable_rls(text: &str, pos: usize) -> Option<(String, usize)> {
    let mut cursor = Cursor::new(text, pos);
    if !cursor.eat_keywords(&["ALTER", "TABLE"]) {
        return None;
    }
    cursor.eat_keywords(&["IF", "EXISTS"]);
    cursor.eat_keyword("ONLY");
    let name = cursor.qualified_name()?;
    cursor
        .eat_keywords(&["ENABLE", "ROW", "LEVEL", "SECURITY"])
        .then(|| (name, cursor.pos()))
}

/// Read one table body, returning the offset where scanning resumes
fn read_table(
    text: &str,
    create_pos: usize,
    header: CreateHeader,
    file: &str,
    lines: &LineIndex,
    schema: &mut Schema,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> usize {
    let line = lines.line(create_pos);
    let interrupt = |t: &str, i: usize| t.as_bytes()[i] == b';' || keyword_at(t, i, "CREATE");

    let close = match find_matching(text, header.open, Dialect::Sql, interrupt) {
        Delimited::Closed(close) => close,
        Delimited::Interrupted(at) => {
            diagnostics.push(ParseDiagnostic::malformed(
                file,
                line,
                format!(
                    "Unterminated column list for table '{}' (interrupted at line {})",
                    header.name,
                    lines.line(at)
                ),
            ));
            return if text.as_bytes()[at] == b';' { at + 1 } else { at };
        }
        Delimited::Unterminated => {
            diagnostics.push(ParseDiagnostic::malformed(
                file,
                line,
                format!(
                    "Unterminated column list for table '{}' (reached end of file)",
                    header.name
                ),
            ));
            return text.len();
        }
    };

    let body_start = header.open + 1;
    let body = &text[body_start..close];
    let mut columns: Vec<Column> = Vec::new();
    let mut table_keys: Vec<String> = Vec::new();

    for (offset, piece) in split_top_level(body, b',', Dialect::Sql) {
        let definition = piece.trim();
        if definition.is_empty() {
            continue;
        }
        let leading_ws = piece.len() - piece.trim_start().len();
        let column_line = lines.line(body_start + offset + leading_ws);

        if is_constraint_clause(definition) {
            table_keys.extend(primary_key_columns(definition));
            continue;
        }

        let Some(column) = parse_column(definition, column_line) else {
            diagnostics.push(ParseDiagnostic::malformed(
                file,
                column_line,
                format!("Unreadable column definition in table '{}'", header.name),
            ));
            continue;
        };

        let column_name = column.name.clone();
        if insert_last_wins(&mut columns, column, |c| c.name.as_str()) {
            diagnostics.push(ParseDiagnostic::duplicate(
                file,
                column_line,
                format!(
                    "Column '{}' declared more than once in table '{}'",
                    column_name, header.name
                ),
            ));
        }
    }

    for column in &mut columns {
        if table_keys.contains(&column.name) {
            column.primary_key = true;
        }
    }

    let table = Table {
        name: header.name.clone(),
        columns,
        file: file.to_string(),
        line,
    };
    if insert_last_wins(&mut schema.tables, table, |t| t.name.as_str()) {
        diagnostics.push(ParseDiagnostic::duplicate(
            file,
            line,
            format!("Table '{}' declared more than once", header.name),
        ));
    }

    close + 1
}

fn is_constraint_clause(definition: &str) -> bool {
    CONSTRAINT_KEYWORDS
        .iter()
        .any(|kw| keyword_at(definition, 0, kw))
}

/// Column names listed in a `PRIMARY KEY (a, b)` clause
fn primary_key_columns(definition: &str) -> Vec<String> {
    let upper = definition.to_ascii_uppercase();
    let Some(key_pos) = upper.find("PRIMARY KEY") else {
        return Vec::new();
    };
    let Some(open) = definition[key_pos..].find('(').map(|i| key_pos + i) else {
        return Vec::new();
    };
    let Delimited::Closed(close) = find_matching(definition, open, Dialect::Sql, |_, _| false)
    else {
        return Vec::new();
    };

    definition[open + 1..close]
        .split(',')
        .filter_map(|part| Cursor::new(part, 0).name())
        .collect()
}

fn parse_column(definition: &str, line: usize) -> Option<Column> {
    let mut cursor = Cursor::new(definition, 0);
    let name = cursor.name()?;
    cursor.skip_ws();
    let data_type = type_token(&definition[cursor.pos()..]).to_ascii_uppercase();

    let normalized = definition
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase();

    Some(Column {
        name,
        data_type,
        nullable: !normalized.contains("NOT NULL"),
        primary_key: normalized.contains("PRIMARY KEY"),
        line,
    })
}

/// First whitespace-delimited word, keeping parenthesized arguments whole
fn type_token(rest: &str) -> &str {
    let mut depth = 0usize;
    for (i, ch) in rest.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => return &rest[..i],
            _ => {}
        }
    }
    rest
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
