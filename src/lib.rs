// load-template: deploy-time configuration renderer
// Copyright (c) 2024 CERT-X-GEN Core Team

//! # load-template
//!
//! Renders a service configuration file from a Tera template, binding the
//! certificate directory and HTTP port supplied on the command line.
//!
//! ```no_run
//! load_template::render_config("conf/app.yaml.j2", "conf/app.yaml", "/etc/certs", "8443")?;
//! # Ok::<(), load_template::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_qualifications,
    missing_debug_implementations
)]
#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod template;

// Re-exports for convenience
pub use crate::config::{Config, RenderConfig};
pub use crate::core::{render_config, ConfigRenderer, RenderJob, REQUIRED_ARGS, USAGE};
pub use crate::error::{Error, Result};
pub use crate::template::{RenderContext, TemplateEngine, TemplateSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
