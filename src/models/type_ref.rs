use std::fmt;

/// Path of a host type as it was written at the use site
/// (`crate::model::Order` is stored as `["crate", "model", "Order"]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    segments: Vec<String>,
}

impl TypeRef {
    /// Parse a `::`-separated path. Surrounding whitespace and a leading `::` are ignored.
    pub fn new(path: &str) -> Self {
        let segments = path
            .trim()
            .trim_start_matches("::")
            .split("::")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { segments }
    }

    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last path segment (`Order` for `crate::model::Order`)
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("::"))
    }
}

impl From<&str> for TypeRef {
    fn from(path: &str) -> Self {
        TypeRef::new(path)
    }
}
