//! Typed record extraction from `interface` and object `type` declarations

use crate::extraction::{insert_last_wins, Extraction, ParseDiagnostic};
use crate::lexer::{
    find_matching, is_ident_byte, keyword_at, skip_string, strip_comments, Cursor, Delimited,
    Dialect, LineIndex,
};
use serde::Serialize;

/// One member of an interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    /// Declared type with whitespace collapsed (e.g. `string | null`)
    pub type_expr: String,
    pub optional: bool,
    pub line: usize,
}

impl Field {
    /// Whether the field admits an absent or null value
    pub fn accepts_null(&self) -> bool {
        self.optional
            || self
                .type_expr
                .split('|')
                .map(str::trim)
                .any(|member| member == "null" || member == "undefined")
    }
}

/// One interface or object type alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub name: String,
    pub fields: Vec<Field>,
    pub file: String,
    pub line: usize,
}

impl Interface {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Every interface in a file, in declaration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct InterfaceSet {
    pub interfaces: Vec<Interface>,
}

impl InterfaceSet {
    pub fn get(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

/// Extract interface declarations from TypeScript text
pub fn extract_interfaces(text: &str, file: &str) -> Extraction<InterfaceSet> {
    let stripped = strip_comments(text, Dialect::TypeScript);
    let lines = LineIndex::new(&stripped);
    let bytes = stripped.as_bytes();

    let mut set = InterfaceSet::default();
    let mut diagnostics = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b == b'\'' || b == b'"' || b == b'`' {
            pos = skip_string(bytes, pos, Dialect::TypeScript);
            continue;
        }
        if !is_ident_byte(b) || (pos > 0 && is_ident_byte(bytes[pos - 1])) {
            pos += 1;
            continue;
        }

        let header = if keyword_at(&stripped, pos, "interface") {
            parse_interface_header(&stripped, pos)
        } else if keyword_at(&stripped, pos, "type") {
            parse_type_alias_header(&stripped, pos)
        } else {
            None
        };

        match header {
            Some(Header::Body { name, open }) => {
                let line = lines.line(pos);
                pos = match find_matching(&stripped, open, Dialect::TypeScript, declaration_starts_at)
                {
                    Delimited::Closed(close) => {
                        let fields = read_members(
                            &stripped[open + 1..close],
                            open + 1,
                            &name,
                            file,
                            &lines,
                            &mut diagnostics,
                        );
                        let interface = Interface {
                            name: name.clone(),
                            fields,
                            file: file.to_string(),
                            line,
                        };
                        if insert_last_wins(&mut set.interfaces, interface, |i| i.name.as_str()) {
                            diagnostics.push(ParseDiagnostic::duplicate(
                                file,
                                line,
                                format!("Interface '{}' declared more than once", name),
                            ));
                        }
                        close + 1
                    }
                    Delimited::Interrupted(_) | Delimited::Unterminated => {
                        diagnostics.push(ParseDiagnostic::malformed(
                            file,
                            line,
                            format!("Unclosed body for interface '{}'", name),
                        ));
                        open + 1
                    }
                };
            }
            Some(Header::Missing { name, resume }) => {
                diagnostics.push(ParseDiagnostic::malformed(
                    file,
                    lines.line(pos),
                    format!("Interface '{}' has no body", name),
                ));
                pos = resume;
            }
            None => {
                while pos < bytes.len() && is_ident_byte(bytes[pos]) {
                    pos += 1;
                }
            }
        }
    }

    log::debug!(
        "Extracted {} interface(s) from {} ({} diagnostic(s))",
        set.len(),
        file,
        diagnostics.len()
    );
    Extraction::new(set, diagnostics)
}

enum Header {
    /// Declaration with its body opening at `open`
    Body { name: String, open: usize },
    /// Declaration whose body could not be found
    Missing { name: String, resume: usize },
}

/// `interface Name[<T>] [extends A, B<C>] {`
fn parse_interface_header(text: &str, pos: usize) -> Option<Header> {
    let mut cursor = Cursor::new(text, pos + "interface".len());
    let name = cursor.ident()?.to_string();
    let bytes = text.as_bytes();

    let mut angle = 0usize;
    let mut i = cursor.pos();
    while i < bytes.len() {
        match bytes[i] {
            b'\'' | b'"' | b'`' => {
                i = skip_string(bytes, i, Dialect::TypeScript);
                continue;
            }
            b'<' => angle += 1,
            b'>' if i > 0 && bytes[i - 1] != b'=' => angle = angle.saturating_sub(1),
            b'{' if angle == 0 => return Some(Header::Body { name, open: i }),
            b';' | b'}' if angle == 0 => return Some(Header::Missing { name, resume: i }),
            _ => {}
        }
        i += 1;
    }
    Some(Header::Missing {
        name,
        resume: bytes.len(),
    })
}

/// `type Name[<T>] = {`; aliases of anything but an object literal are ignored
fn parse_type_alias_header(text: &str, pos: usize) -> Option<Header> {
    let mut cursor = Cursor::new(text, pos + "type".len());
    let name = cursor.ident()?.to_string();
    cursor.skip_ws();
    if cursor.peek() == Some(b'<') {
        let bytes = text.as_bytes();
        let mut depth = 0usize;
        let mut i = cursor.pos();
        while i < bytes.len() {
            match bytes[i] {
                b'<' => depth += 1,
                b'>' if bytes[i - 1] != b'=' => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        cursor = Cursor::new(text, i + 1);
    }
    if !cursor.eat_char(b'=') {
        return None;
    }
    cursor.skip_ws();
    (cursor.peek() == Some(b'{')).then(|| Header::Body {
        name,
        open: cursor.pos(),
    })
}

/// Another declaration starting inside a body means the body was never closed
fn declaration_starts_at(text: &str, i: usize) -> bool {
    let keyword = if keyword_at(text, i, "export") {
        "export"
    } else if keyword_at(text, i, "interface") {
        "interface"
    } else {
        return false;
    };
    let mut cursor = Cursor::new(text, i + keyword.len());
    cursor.ident().is_some()
}

fn read_members(
    body: &str,
    body_offset: usize,
    interface: &str,
    file: &str,
    lines: &LineIndex,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> Vec<Field> {
    let mut fields: Vec<Field> = Vec::new();

    for (offset, member) in split_members(body) {
        let trimmed = member.trim();
        if trimmed.is_empty() {
            continue;
        }
        let leading_ws = member.len() - member.trim_start().len();
        let line = lines.line(body_offset + offset + leading_ws);

        let Some(field) = parse_member(trimmed, line) else {
            continue;
        };
        let name = field.name.clone();
        if insert_last_wins(&mut fields, field, |f| f.name.as_str()) {
            diagnostics.push(ParseDiagnostic::duplicate(
                file,
                line,
                format!(
                    "Field '{}' declared more than once in interface '{}'",
                    name, interface
                ),
            ));
        }
    }
    fields
}

/// Split a body into members on `;`, `,` and line breaks at nesting depth 0.
///
/// A line break does not separate when the member so far ends with a type
/// operator or the next line starts with `|` or `&`.
fn split_members(body: &str) -> Vec<(usize, &str)> {
    let bytes = body.as_bytes();
    let mut members = Vec::new();
    let mut depth = 0usize;
    let mut angle = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'\'' | b'"' | b'`' => {
                i = skip_string(bytes, i, Dialect::TypeScript);
                continue;
            }
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b'<' => angle += 1,
            b'>' if i > 0 && bytes[i - 1] != b'=' => angle = angle.saturating_sub(1),
            b';' | b',' if depth == 0 && angle == 0 => {
                members.push((start, &body[start..i]));
                start = i + 1;
            }
            b'\n' if depth == 0 && angle == 0 && !continues_on_next_line(body, start, i) => {
                members.push((start, &body[start..i]));
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    members.push((start, &body[start..]));
    members
}

fn continues_on_next_line(body: &str, start: usize, newline: usize) -> bool {
    let so_far = body[start..newline].trim_end();
    if so_far.trim_start().is_empty() {
        return false;
    }
    if so_far.ends_with(['|', '&', ':', '=']) || so_far.ends_with("=>") {
        return true;
    }
    body[newline + 1..]
        .trim_start()
        .starts_with(['|', '&'])
}

/// `[readonly] name[?]: type`; index and method signatures yield `None`
fn parse_member(member: &str, line: usize) -> Option<Field> {
    let mut rest = member;
    if let Some(after) = rest.strip_prefix("readonly") {
        let after_trimmed = after.trim_start();
        let is_modifier = after.len() != after_trimmed.len()
            && after_trimmed
                .bytes()
                .next()
                .is_some_and(|b| is_ident_byte(b) || b == b'\'' || b == b'"');
        if is_modifier {
            rest = after_trimmed;
        }
    }

    let (name, after_name) = match rest.as_bytes().first().copied()? {
        quote @ (b'\'' | b'"') => {
            let close = rest[1..].find(quote as char)? + 1;
            (&rest[1..close], &rest[close + 1..])
        }
        b if is_ident_byte(b) => {
            let end = rest
                .bytes()
                .position(|b| !is_ident_byte(b))
                .unwrap_or(rest.len());
            (&rest[..end], &rest[end..])
        }
        _ => return None,
    };

    let mut after_name = after_name.trim_start();
    let optional = after_name.starts_with('?');
    if optional {
        after_name = after_name[1..].trim_start();
    }
    let type_expr = after_name.strip_prefix(':')?;

    Some(Field {
        name: name.to_string(),
        type_expr: type_expr.split_whitespace().collect::<Vec<_>>().join(" "),
        optional,
        line,
    })
}

#[cfg(test)]
#[path = "interfaces_test.rs"]
mod tests;
