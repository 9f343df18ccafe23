//! Path template normalization.
//!
//! Frontend code, backend routers and the endpoint table spell dynamic path
//! segments differently (`${id}`, `:id`, `{id}`, a literal UUID). All of them
//! are rewritten to a single placeholder so the three sides compare equal.

use std::borrow::Cow;

/// Canonical placeholder for a dynamic path segment
pub const PARAM_PLACEHOLDER: &str = ":param";

/// Normalize a raw URL or route path into a canonical path template.
///
/// Normalizing an already-normalized path returns it unchanged.
pub fn normalize_path(raw: &str) -> String {
    let without_origin = strip_origin(raw.trim());
    let interpolated = replace_interpolations(without_origin);
    let path = trim_tail(strip_query(&interpolated));

    path.split('/')
        .map(normalize_segment)
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether `path` is already in canonical form
pub fn is_normalized(path: &str) -> bool {
    normalize_path(path) == path
}

/// Whether a normalized path lives under `prefix`, matching whole segments
/// (`/api` covers `/api` and `/api/users` but not `/apiary`).
pub fn has_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return path.starts_with('/');
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Drop a leading `scheme://host` so absolute URLs compare as paths
fn strip_origin(raw: &str) -> &str {
    let lower = raw.get(..8).unwrap_or(raw).to_ascii_lowercase();
    let scheme_len = if lower.starts_with("https://") {
        8
    } else if lower.starts_with("http://") {
        7
    } else {
        return raw;
    };
    let rest = &raw[scheme_len..];
    match rest.find('/') {
        Some(idx) => &rest[idx..],
        None => "/",
    }
}

/// Rewrite every `${...}` interpolation to the placeholder, honoring nested braces
fn replace_interpolations(path: &str) -> Cow<'_, str> {
    if !path.contains("${") {
        return Cow::Borrowed(path);
    }

    let bytes = path.as_bytes();
    let mut out = String::with_capacity(path.len());
    let mut i = 0;
    let mut copied_from = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'$' && bytes[i + 1] == b'{' {
            let Some(end) = closing_brace(bytes, i + 2) else {
                break;
            };
            out.push_str(&path[copied_from..i]);
            out.push_str(PARAM_PLACEHOLDER);
            i = end + 1;
            copied_from = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&path[copied_from..]);
    Cow::Owned(out)
}

/// Index of the `}` closing an interpolation whose body starts at `start`
fn closing_brace(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, &b) in bytes[start..].iter().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Drop trailing whitespace and slashes; a lone `/` is kept
fn trim_tail(path: &str) -> &str {
    let mut path = path.trim_end();
    while path.len() > 1 && path.ends_with('/') {
        path = path[..path.len() - 1].trim_end();
    }
    path
}

fn normalize_segment(segment: &str) -> &str {
    if is_named_param(segment) || is_brace_param(segment) || is_uuid(segment) {
        PARAM_PLACEHOLDER
    } else {
        segment
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// `:id` style segment
fn is_named_param(segment: &str) -> bool {
    segment.strip_prefix(':').is_some_and(is_word)
}

/// `{id}` style segment
fn is_brace_param(segment: &str) -> bool {
    segment
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .is_some_and(is_word)
}

/// 8-4-4-4-12 hexadecimal segment
fn is_uuid(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    if bytes.len() != 36 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => *b == b'-',
        _ => b.is_ascii_hexdigit(),
    })
}

#[cfg(test)]
#[path = "path_template_test.rs"]
mod tests;
