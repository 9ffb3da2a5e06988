//! Variable bindings handed to the template engine

use std::collections::BTreeMap;

/// Variables available while rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Certificate directory, bound as `cert_dir`
    pub cert_dir: String,
    /// HTTP port, bound as `http_port`
    pub http_port: String,
    /// Additional variables from configuration
    pub extra: BTreeMap<String, String>,
}

impl RenderContext {
    /// Create a context with the two command-line variables
    pub fn new(cert_dir: impl Into<String>, http_port: impl Into<String>) -> Self {
        Self {
            cert_dir: cert_dir.into(),
            http_port: http_port.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Add configured variables; `cert_dir` and `http_port` still win
    pub fn with_extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }

    /// Build the Tera context
    pub fn to_tera(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in &self.extra {
            context.insert(key.as_str(), value);
        }
        context.insert("cert_dir", &self.cert_dir);
        context.insert("http_port", &self.http_port);
        context
    }
}
