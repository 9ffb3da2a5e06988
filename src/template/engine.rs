//! Tera-backed template engine bound to one search directory

use super::{RenderContext, TemplateSource};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tera::{Tera, Value};

/// Tera globals that read the environment, the clock or an RNG. Rendering
/// must depend on the template and its variables only.
const DISABLED_FUNCTIONS: [&str; 3] = ["get_env", "now", "get_random"];

fn disabled_function(name: &'static str) -> impl tera::Function {
    move |_: &HashMap<String, Value>| -> tera::Result<Value> {
        Err(tera::Error::msg(format!(
            "function `{}` is not available in config templates",
            name
        )))
    }
}

/// Loads templates by name from a search directory and renders them
#[derive(Debug)]
pub struct TemplateEngine {
    search_dir: PathBuf,
    autoescape: Vec<String>,
    tera: Tera,
}

impl TemplateEngine {
    /// Create an engine rooted at `search_dir` with autoescaping off
    pub fn new<P: Into<PathBuf>>(search_dir: P) -> Self {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        for name in DISABLED_FUNCTIONS {
            tera.register_function(name, disabled_function(name));
        }
        Self {
            search_dir: search_dir.into(),
            autoescape: Vec::new(),
            tera,
        }
    }

    /// Create an engine for a resolved template source
    pub fn for_source(source: &TemplateSource) -> Self {
        Self::new(source.directory.clone())
    }

    /// Enable HTML escaping for templates whose name ends with one of `suffixes`
    pub fn with_autoescape(mut self, suffixes: &[String]) -> Self {
        self.autoescape = suffixes.to_vec();
        self
    }

    /// Directory templates are looked up in
    pub fn search_dir(&self) -> &Path {
        &self.search_dir
    }

    /// Read and parse the template `name` from the search directory
    pub fn load(&mut self, name: &str) -> Result<()> {
        let path = self.search_dir.join(name);
        tracing::debug!("Loading template {} from {}", name, path.display());

        if path.is_dir() {
            return Err(Error::TemplateNotFound(path));
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::TemplateNotFound(path));
            }
            Err(e) => {
                return Err(Error::Io(e).context(format!("reading {}", path.display())));
            }
        };

        self.tera
            .add_raw_template(name, &content)
            .map_err(|e| Error::syntax(name, &e))?;

        tracing::info!("Loaded template {} ({} bytes)", name, content.len());
        Ok(())
    }

    /// Render a previously loaded template
    pub fn render(&mut self, name: &str, context: &RenderContext) -> Result<String> {
        // Tera only decides escaping by suffix; an empty suffix matches everything.
        if self.autoescape.iter().any(|suffix| name.ends_with(suffix.as_str())) {
            self.tera.autoescape_on(vec![""]);
        } else {
            self.tera.autoescape_on(vec![]);
        }

        let rendered = self
            .tera
            .render(name, &context.to_tera())
            .map_err(|e| Error::render(name, &e))?;

        tracing::info!("Rendered {} ({} bytes)", name, rendered.len());
        Ok(rendered)
    }
}
