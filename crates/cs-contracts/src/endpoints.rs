//! Endpoint table extraction.
//!
//! The endpoint file declares string constants and a nested object of path
//! templates:
//!
//! ```ts
//! export const API_BASE = `/api/${API_VERSION}`;
//! export const ENDPOINTS = {
//!   CV: {
//!     LIST: `${API_BASE}/cv`,
//!     GET: (id: string) => `${API_BASE}/cv/${id}`,
//!   },
//! } as const;
//! ```
//!
//! Constants are substituted into later literals, and literals inside the
//! table remember their key path (`CV.GET`) so source references such as
//! `ENDPOINTS.CV.GET(id)` can be resolved.

use crate::extraction::{Extraction, ParseDiagnostic};
use crate::lexer::{strip_comments, tokenize, Dialect, LineIndex, Token, TokenKind};
use cs_core::path_template::{has_prefix, normalize_path};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// One declared API path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointTemplate {
    /// Normalized path template
    pub path: String,
    /// Literal text after constant substitution
    pub raw: String,
    /// Key path inside the endpoint table (e.g. `CV.GET`)
    pub key: Option<String>,
    pub file: String,
    pub line: usize,
}

/// Every endpoint template in the endpoint file
#[derive(Debug, Clone, Default, Serialize)]
pub struct EndpointTable {
    pub templates: Vec<EndpointTemplate>,
}

impl EndpointTable {
    /// Template for a table reference such as `CV.GET`.
    ///
    /// A reference to a group (`CV`) resolves to its first entry.
    pub fn resolve(&self, key: &str) -> Option<&EndpointTemplate> {
        self.templates
            .iter()
            .filter_map(|t| t.key.as_deref().map(|k| (k, t)))
            .find(|(k, _)| {
                *k == key || (k.starts_with(key) && k.as_bytes().get(key.len()) == Some(&b'.'))
            })
            .map(|(_, t)| t)
    }

    /// Whether any template has this normalized path
    pub fn contains_path(&self, path: &str) -> bool {
        self.templates.iter().any(|t| t.path == path)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Extract endpoint templates.
///
/// `api_prefix` selects which literals are endpoints; `table_name` is the
/// constant holding the keyed endpoint object.
pub fn extract_endpoints(
    text: &str,
    file: &str,
    api_prefix: &str,
    table_name: &str,
) -> Extraction<EndpointTable> {
    let stripped = strip_comments(text, Dialect::TypeScript);
    let lines = LineIndex::new(&stripped);
    let tokens = tokenize(&stripped);

    let mut extractor = EndpointExtractor {
        file,
        api_prefix,
        lines: &lines,
        constants: HashMap::new(),
        table: EndpointTable::default(),
        diagnostics: Vec::new(),
    };

    let toks = &tokens.tokens;
    let mut i = 0;
    while i < toks.len() {
        if let Some((name, value)) = constant_at(toks, i) {
            if name == table_name && value.is_punct('{') {
                i = extractor.read_table(toks, i + 3, table_name);
                continue;
            }
            if value.kind == TokenKind::Str {
                let resolved = extractor.substitute(value.text);
                extractor.record(&resolved, value, None, false);
                extractor.constants.insert(name.to_string(), resolved);
                i += 4;
                continue;
            }
        }
        if toks[i].kind == TokenKind::Str {
            let resolved = extractor.substitute(toks[i].text);
            extractor.record(&resolved, &toks[i], None, false);
        }
        i += 1;
    }

    if let Some(offset) = tokens.unterminated {
        extractor.diagnostics.push(ParseDiagnostic::malformed(
            file,
            lines.line(offset),
            "Unterminated string literal",
        ));
    }

    log::debug!(
        "Extracted {} endpoint template(s) from {} ({} diagnostic(s))",
        extractor.table.len(),
        file,
        extractor.diagnostics.len()
    );
    Extraction::new(extractor.table, extractor.diagnostics)
}

/// `const NAME = <value>` starting at `i`
fn constant_at<'t, 'a>(toks: &'t [Token<'a>], i: usize) -> Option<(&'a str, &'t Token<'a>)> {
    let [kw, name, eq, value, ..] = toks.get(i..)? else {
        return None;
    };
    (kw.is_word("const") && name.kind == TokenKind::Word && eq.is_punct('='))
        .then_some((name.text, value))
}

/// One `{ ... }` level inside the endpoint table
struct Frame {
    /// Key whose value this object is; `None` for the table root and for
    /// function bodies
    key: Option<String>,
    /// Key most recently read at this level whose value is still open
    pending: Option<String>,
}

struct EndpointExtractor<'a> {
    file: &'a str,
    api_prefix: &'a str,
    lines: &'a LineIndex,
    constants: HashMap<String, String>,
    table: EndpointTable,
    diagnostics: Vec<ParseDiagnostic>,
}

impl EndpointExtractor<'_> {
    /// Walk the table object whose `{` is at `open`; returns the index after it
    fn read_table(&mut self, toks: &[Token<'_>], open: usize, table_name: &str) -> usize {
        let mut stack = vec![Frame {
            key: None,
            pending: None,
        }];
        let mut seen_keys: HashSet<String> = HashSet::new();
        let mut parens = 0usize;
        let mut i = open + 1;

        while i < toks.len() {
            let tok = &toks[i];
            let prev = &toks[i - 1];

            if tok.is_punct('(') {
                parens += 1;
            } else if tok.is_punct(')') {
                parens = parens.saturating_sub(1);
            } else if tok.kind == TokenKind::Str {
                let is_key = parens == 0
                    && (prev.is_punct('{') || prev.is_punct(','))
                    && toks.get(i + 1).is_some_and(|t| t.is_punct(':'));
                if is_key {
                    self.open_key(&mut stack, &mut seen_keys, tok);
                    i += 2;
                    continue;
                }
                let resolved = self.substitute(tok.text);
                let key = key_path(&stack);
                self.record(&resolved, tok, key, true);
            } else if parens == 0
                && tok.kind == TokenKind::Word
                && (prev.is_punct('{') || prev.is_punct(','))
                && toks.get(i + 1).is_some_and(|t| t.is_punct(':'))
            {
                self.open_key(&mut stack, &mut seen_keys, tok);
                i += 2;
                continue;
            } else if tok.is_punct('{') {
                let key = if prev.is_punct(':') {
                    stack.last_mut().and_then(|f| f.pending.take())
                } else {
                    None
                };
                stack.push(Frame { key, pending: None });
            } else if tok.is_punct('}') {
                stack.pop();
                if stack.is_empty() {
                    return i + 1;
                }
            } else if tok.is_punct(',') && parens == 0 {
                if let Some(frame) = stack.last_mut() {
                    frame.pending = None;
                }
            }
            i += 1;
        }

        let line = toks.get(open).map_or(1, |t| self.lines.line(t.offset));
        self.diagnostics.push(ParseDiagnostic::malformed(
            self.file,
            line,
            format!("Unclosed endpoint table '{}'", table_name),
        ));
        toks.len()
    }

    fn open_key(&mut self, stack: &mut [Frame], seen: &mut HashSet<String>, tok: &Token<'_>) {
        let name = tok.text.to_string();
        let full = {
            let mut parts: Vec<&str> = stack.iter().filter_map(|f| f.key.as_deref()).collect();
            parts.push(&name);
            parts.join(".")
        };

        if !seen.insert(full.clone()) {
            let nested = format!("{}.", full);
            self.table.templates.retain(|t| {
                !t.key
                    .as_deref()
                    .is_some_and(|k| k == full || k.starts_with(&nested))
            });
            self.diagnostics.push(ParseDiagnostic::duplicate(
                self.file,
                self.lines.line(tok.offset),
                format!("Endpoint '{}' declared more than once", full),
            ));
        }

        if let Some(frame) = stack.last_mut() {
            frame.pending = Some(name);
        }
    }

    /// Replace `${NAME}` with known constant values
    fn substitute(&self, literal: &str) -> String {
        let mut out = String::with_capacity(literal.len());
        let mut rest = literal;
        while let Some(start) = rest.find("${") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                out.push_str(&rest[start..]);
                return out;
            };
            match self.constants.get(after[..end].trim()) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 1]),
            }
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        out
    }

    fn record(&mut self, resolved: &str, tok: &Token<'_>, key: Option<String>, in_table: bool) {
        let lower = resolved.to_ascii_lowercase();
        let is_url = lower.starts_with("http://") || lower.starts_with("https://");
        let path = normalize_path(resolved);
        let is_api = resolved.starts_with('/') && has_prefix(&path, self.api_prefix);
        let is_table_path = in_table && resolved.starts_with('/');

        if !(is_url || is_api || is_table_path) {
            return;
        }
        self.table.templates.push(EndpointTemplate {
            path,
            raw: resolved.to_string(),
            key,
            file: self.file.to_string(),
            line: self.lines.line(tok.offset),
        });
    }
}

/// Dotted key path for a literal at the current position
fn key_path(stack: &[Frame]) -> Option<String> {
    let parts: Vec<&str> = stack
        .iter()
        .flat_map(|f| [f.key.as_deref(), f.pending.as_deref()])
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join("."))
}

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod tests;
