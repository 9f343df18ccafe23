//! Line-oriented call and route patterns

use crate::error::ScanResult;
use crate::model::{CallKind, CallSite, HttpMethod, RouteDeclaration};
use cs_core::path_template::{has_prefix, normalize_path};
use cs_core::ScanConfig;
use regex::Regex;

/// Quoted first argument: `'...'`, `"..."` or `` `...` ``
const QUOTED_ARG: &str = r#"\(\s*['"`]([^'"`]+)['"`]"#;

/// Compiled patterns for one scan
#[derive(Debug, Clone)]
pub struct ScanPatterns {
    fetch_call: Option<Regex>,
    client_call: Option<Regex>,
    endpoint_ref: Regex,
    route: Option<Regex>,
    api_prefix: String,
}

impl ScanPatterns {
    /// Build patterns from the scan configuration and the endpoint table name
    pub fn new(config: &ScanConfig, endpoint_table: &str) -> ScanResult<Self> {
        let fetch_call = alternation(&config.fetch_functions)
            .map(|names| Regex::new(&format!(r"\b(?:{}){}", names, QUOTED_ARG)))
            .transpose()?;
        let client_call = alternation(&config.http_clients)
            .map(|names| Regex::new(&format!(r"\b(?:{})\.\w+{}", names, QUOTED_ARG)))
            .transpose()?;
        let endpoint_ref = Regex::new(&format!(
            r"\b{}((?:\.\w+)+)",
            regex::escape(endpoint_table)
        ))?;
        let route = alternation(&config.route_receivers)
            .map(|names| {
                Regex::new(&format!(
                    r"(?i)\b(?:{})\.(get|post|put|patch|delete){}",
                    names, QUOTED_ARG
                ))
            })
            .transpose()?;

        Ok(Self {
            fetch_call,
            client_call,
            endpoint_ref,
            route,
            api_prefix: config.api_prefix.clone(),
        })
    }

    /// Frontend call sites in `text`, in source order
    pub fn find_calls(&self, text: &str, file: &str) -> Vec<CallSite> {
        let mut calls = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            let mut on_line: Vec<CallSite> = Vec::new();
            // URL start offsets, parallel to the literal entries of `on_line`
            let mut url_starts: Vec<usize> = Vec::new();

            for regex in [&self.fetch_call, &self.client_call].into_iter().flatten() {
                for caps in regex.captures_iter(line) {
                    let (Some(whole), Some(url)) = (caps.get(0), caps.get(1)) else {
                        continue;
                    };
                    if !self.is_api_url(url.as_str()) {
                        continue;
                    }
                    // `api.fetch(...)` matches both patterns; keep the outermost
                    if let Some(seen) = url_starts.iter().position(|&s| s == url.start()) {
                        let call = &mut on_line[seen];
                        call.column = call.column.min(whole.start() + 1);
                        continue;
                    }
                    url_starts.push(url.start());
                    on_line.push(CallSite {
                        raw: url.as_str().to_string(),
                        kind: CallKind::Literal,
                        file: file.to_string(),
                        line: idx + 1,
                        column: whole.start() + 1,
                    });
                }
            }

            for caps in self.endpoint_ref.captures_iter(line) {
                let (Some(whole), Some(path)) = (caps.get(0), caps.get(1)) else {
                    continue;
                };
                on_line.push(CallSite {
                    raw: whole.as_str().to_string(),
                    kind: CallKind::EndpointRef {
                        key: path.as_str().trim_start_matches('.').to_string(),
                    },
                    file: file.to_string(),
                    line: idx + 1,
                    column: whole.start() + 1,
                });
            }

            on_line.sort_by_key(|c| c.column);
            calls.extend(on_line);
        }
        calls
    }

    /// Backend route declarations in `text`, in source order
    pub fn find_routes(&self, text: &str, file: &str) -> Vec<RouteDeclaration> {
        let Some(route) = &self.route else {
            return Vec::new();
        };

        let mut routes = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            for caps in route.captures_iter(line) {
                let (Some(whole), Some(verb), Some(path)) = (caps.get(0), caps.get(1), caps.get(2))
                else {
                    continue;
                };
                let Some(method) = HttpMethod::parse(verb.as_str()) else {
                    continue;
                };
                routes.push(RouteDeclaration {
                    method,
                    path: normalize_path(path.as_str()),
                    raw: path.as_str().to_string(),
                    file: file.to_string(),
                    line: idx + 1,
                    column: whole.start() + 1,
                });
            }
        }
        routes
    }

    /// Literal URLs are kept when they are absolute or under the API prefix
    fn is_api_url(&self, url: &str) -> bool {
        let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return true;
        }
        url.starts_with('/') && has_prefix(&normalize_path(url), &self.api_prefix)
    }
}

/// `a|b|c` of escaped names, or `None` when the list is empty
fn alternation(names: &[String]) -> Option<String> {
    let escaped: Vec<String> = names
        .iter()
        .filter(|n| !n.is_empty())
        .map(|n| regex::escape(n))
        .collect();
    (!escaped.is_empty()).then(|| escaped.join("|"))
}

#[cfg(test)]
#[path = "patterns_test.rs"]
mod tests;
