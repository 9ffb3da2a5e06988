//! Error types for load-template
//!
//! Every failure is fatal: the first error aborts the render and the process
//! exits non-zero with the error's display text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for load-template operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for load-template
#[derive(Error, Debug)]
pub enum Error {
    /// Wrong number of positional arguments
    #[error("{0}")]
    Usage(String),

    /// Template file missing or unreadable
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    /// Template failed to parse
    #[error("Template syntax error in {template}: {message}")]
    TemplateSyntax {
        /// Template name
        template: String,
        /// Engine error chain
        message: String,
    },

    /// Template parsed but could not be rendered
    #[error("Template render failed for {template}: {message}")]
    TemplateRender {
        /// Template name
        template: String,
        /// Engine error chain
        message: String,
    },

    /// Destination could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        /// Error context
        context: String,
        /// Source error
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error
    pub fn context<S: Into<String>>(self, context: S) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Create a template syntax error from a Tera error
    pub fn syntax<S: Into<String>>(template: S, err: &tera::Error) -> Self {
        Error::TemplateSyntax {
            template: template.into(),
            message: error_chain(err),
        }
    }

    /// Create a template render error from a Tera error
    pub fn render<S: Into<String>>(template: S, err: &tera::Error) -> Self {
        Error::TemplateRender {
            template: template.into(),
            message: error_chain(err),
        }
    }

    /// Check if the error was raised before any file I/O
    pub fn is_usage(&self) -> bool {
        match self {
            Error::Usage(_) => true,
            Error::WithContext { source, .. } => source.is_usage(),
            _ => false,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Flatten a Tera error and its sources into one line.
///
/// Tera's top-level message is usually just "Failed to render 'x'"; the
/// useful part (missing variable, bad token) lives further down the chain.
pub fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Trait for adding context to results
pub trait ResultExt<T> {
    /// Add context to the error
    fn context<C: Into<String>>(self, context: C) -> Result<T>;

    /// Add context using a closure (only called on error)
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_context() {
        let err = Error::config("bad suffix");
        let err_with_context = err.context("loading render.yaml");
        assert!(matches!(err_with_context, Error::WithContext { .. }));
        assert_eq!(
            err_with_context.to_string(),
            "loading render.yaml: Configuration error: bad suffix"
        );
    }

    #[test]
    fn test_usage_passes_through_context() {
        let err = Error::Usage("Usage: x".to_string()).context("parsing arguments");
        assert!(err.is_usage());
        assert!(!Error::config("x").is_usage());
    }

    #[test]
    fn test_every_error_is_fatal() {
        assert_eq!(Error::Usage(String::new()).exit_code(), 1);
        assert_eq!(
            Error::TemplateNotFound(PathBuf::from("missing.yaml")).exit_code(),
            1
        );
    }

    #[test]
    fn test_error_chain_includes_cause() {
        let mut tera = tera::Tera::default();
        let err = tera.add_raw_template("bad", "{{ unclosed").unwrap_err();
        let message = error_chain(&err);
        assert!(message.contains("bad"));
        assert!(message.len() > err.to_string().len());
    }

    #[test]
    fn test_template_not_found_display() {
        let err = Error::TemplateNotFound(PathBuf::from("conf/app.yaml.j2"));
        assert_eq!(err.to_string(), "Template not found: conf/app.yaml.j2");
    }
}
