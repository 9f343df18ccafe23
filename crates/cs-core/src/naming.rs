//! Identifier transforms used to pair tables with interfaces and columns
//! with fields.

/// Capitalize the first letter of every alphabetic run and lower-case the rest.
///
/// `"cv_analyse"` becomes `"Cv_Analyse"`; non-letters are kept and start a
/// new run.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Convert `snake_case` to `camelCase`, leaving the first word untouched.
pub fn snake_to_camel(name: &str) -> String {
    let mut parts = name.split('_');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        out.push_str(&title_case(part));
    }
    out
}

/// Lower-case with `_` and `-` removed.
///
/// Two names with equal folds differ only by casing convention.
pub fn fold_case(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Candidate interface names for a table, in precedence order.
///
/// An explicit alias comes first, then the title-cased singular
/// (`profiles` → `Profile`), its upper-case form (`cvs` → `CV`), and the
/// camel-joined singular for snake_case names
/// (`motivation_letters` → `MotivationLetter`). Singularization only strips
/// trailing `s` characters, so irregular plurals such as `analyses` do not
/// produce the expected name.
pub fn interface_candidates(table: &str, alias: Option<&str>) -> Vec<String> {
    let base = title_case(table.trim_end_matches('s'));
    let joined: String = table.split('_').map(title_case).collect();
    let joined = joined.trim_end_matches('s').to_string();

    let mut candidates: Vec<String> = Vec::with_capacity(4);
    let ordered = alias
        .map(str::to_string)
        .into_iter()
        .chain([base.clone(), base.to_uppercase(), joined]);
    for candidate in ordered {
        if !candidate.is_empty() && !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }
    candidates
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;
