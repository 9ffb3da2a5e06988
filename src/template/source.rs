//! Splitting a template path into search directory and template name

use crate::error::{Error, Result};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Where a template lives: the directory the loader searches and the name
/// looked up inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    /// Search directory (the template's parent, or `.`)
    pub directory: PathBuf,
    /// File name inside the search directory
    pub name: String,
}

impl TemplateSource {
    /// Split `path` into parent directory and base name
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = path.as_os_str().to_string_lossy();

        // "conf/" and "conf/t.j2/." name directories, never a template
        let trailing_dot =
            raw == "." || raw.ends_with("/.") || raw.ends_with(&format!("{}.", MAIN_SEPARATOR));
        if raw.is_empty() || raw.ends_with('/') || raw.ends_with(MAIN_SEPARATOR) || trailing_dot {
            return Err(Error::TemplateNotFound(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::TemplateNotFound(path.to_path_buf()))?
            .to_string();

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self { directory, name })
    }

    /// Full path of the template file
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.name)
    }
}
