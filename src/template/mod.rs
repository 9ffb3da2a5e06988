//! Template system for load-template
//!
//! Resolves a template path into a search directory and name, builds the
//! variable bindings, and renders through Tera.

mod context;
mod engine;
mod source;

pub use context::RenderContext;
pub use engine::TemplateEngine;
pub use source::TemplateSource;
