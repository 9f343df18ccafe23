//! Call sites and route declarations found in source files

use cs_core::path_template::normalize_path;
use serde::Serialize;
use std::fmt;

/// How a frontend call names its URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CallKind {
    /// A string literal passed to a fetch function or HTTP client
    Literal,
    /// A reference into the endpoint table, e.g. `ENDPOINTS.CV.GET`
    EndpointRef { key: String },
}

/// One frontend API invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    /// URL text or table reference as written
    pub raw: String,
    pub kind: CallKind,
    /// Path relative to the project root
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl CallSite {
    /// Normalized path for literal calls
    pub fn path(&self) -> Option<String> {
        match self.kind {
            CallKind::Literal => Some(normalize_path(&self.raw)),
            CallKind::EndpointRef { .. } => None,
        }
    }
}

/// HTTP verb of a backend route
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Parse a router method name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "get" => Some(Self::Get),
            "post" => Some(Self::Post),
            "put" => Some(Self::Put),
            "patch" => Some(Self::Patch),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One backend route registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDeclaration {
    pub method: HttpMethod,
    /// Normalized path template
    pub path: String,
    /// Path as written
    pub raw: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
}

/// Everything found under the source roots
#[derive(Debug, Clone, Default, Serialize)]
pub struct SourceScan {
    pub calls: Vec<CallSite>,
    pub routes: Vec<RouteDeclaration>,
    pub files_scanned: usize,
}

impl SourceScan {
    /// Order by (file, line, column) so output does not depend on worker timing
    pub fn sort(&mut self) {
        self.calls
            .sort_by(|a, b| (&a.file, a.line, a.column).cmp(&(&b.file, b.line, b.column)));
        self.routes
            .sort_by(|a, b| (&a.file, a.line, a.column).cmp(&(&b.file, b.line, b.column)));
    }

    pub fn merge(&mut self, other: SourceScan) {
        self.calls.extend(other.calls);
        self.routes.extend(other.routes);
        self.files_scanned += other.files_scanned;
    }
}
