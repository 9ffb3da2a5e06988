//! Core render pipeline for load-template

use crate::config::Config;
use crate::error::{Error, Result};
use crate::template::{RenderContext, TemplateEngine, TemplateSource};
use std::path::{Path, PathBuf};

/// Usage line printed when positional arguments are missing
pub const USAGE: &str = "Usage: load_template.py <src> <dest> <cert_dir> <port>";

/// Number of positional arguments a render needs
pub const REQUIRED_ARGS: usize = 4;

/// One render request: template in, config file out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    /// Template path
    pub src: PathBuf,
    /// Destination file path
    pub dest: PathBuf,
    /// Value bound to `cert_dir`
    pub cert_dir: String,
    /// Value bound to `http_port`
    pub http_port: String,
}

impl RenderJob {
    /// Create a new render job
    pub fn new(
        src: impl Into<PathBuf>,
        dest: impl Into<PathBuf>,
        cert_dir: impl Into<String>,
        http_port: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
            cert_dir: cert_dir.into(),
            http_port: http_port.into(),
        }
    }

    /// Build a job from positional arguments (program name excluded).
    ///
    /// Anything past the fourth argument is ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [src, dest, cert_dir, http_port, ..] => Ok(Self::new(
                src.as_ref(),
                dest.as_ref(),
                cert_dir.as_ref(),
                http_port.as_ref(),
            )),
            _ => Err(Error::Usage(USAGE.to_string())),
        }
    }
}

/// Renders templates into config files
#[derive(Debug, Clone, Default)]
pub struct ConfigRenderer {
    config: Config,
}

impl ConfigRenderer {
    /// Create a renderer with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load and render the job's template without touching the destination
    pub fn render(&self, job: &RenderJob) -> Result<String> {
        let source = TemplateSource::from_path(&job.src)?;
        let mut engine =
            TemplateEngine::for_source(&source).with_autoescape(&self.config.render.autoescape);
        tracing::debug!(
            "Resolved template {} in {}",
            source.name,
            engine.search_dir().display()
        );
        engine.load(&source.name)?;

        let context = RenderContext::new(job.cert_dir.as_str(), job.http_port.as_str())
            .with_extra(self.config.render.variables.clone());
        engine.render(&source.name, &context)
    }

    /// Render the job and write the result to its destination.
    ///
    /// The destination is opened only after rendering succeeds. Returns the
    /// number of bytes written.
    pub fn run(&self, job: &RenderJob) -> Result<usize> {
        let rendered = self.render(job)?;
        write_output(&job.dest, &rendered)?;
        tracing::info!("Wrote {} bytes to {}", rendered.len(), job.dest.display());
        Ok(rendered.len())
    }
}

fn write_output(dest: &Path, content: &str) -> Result<()> {
    std::fs::write(dest, content).map_err(|source| Error::Write {
        path: dest.to_path_buf(),
        source,
    })
}

/// Render `src` with `cert_dir` and `http_port` and write it to `dest`
pub fn render_config<S, D>(src: S, dest: D, cert_dir: &str, http_port: &str) -> Result<()>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let job = RenderJob::new(src.as_ref(), dest.as_ref(), cert_dir, http_port);
    ConfigRenderer::default().run(&job).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_job_from_args() {
        let job = RenderJob::from_args(&["a.j2", "a.yaml", "/certs", "8443"]).unwrap();
        assert_eq!(job, RenderJob::new("a.j2", "a.yaml", "/certs", "8443"));
    }

    #[test]
    fn test_job_ignores_extra_args() {
        let job = RenderJob::from_args(&["a.j2", "a.yaml", "/certs", "8443", "extra"]).unwrap();
        assert_eq!(job.http_port, "8443");
    }

    #[test]
    fn test_job_requires_four_args() {
        for n in 0..REQUIRED_ARGS {
            let args = vec!["x"; n];
            let err = RenderJob::from_args(&args).unwrap_err();
            assert!(err.is_usage());
            assert_eq!(err.to_string(), USAGE);
        }
    }

    #[test]
    fn test_run_writes_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("app.yaml.j2");
        let dest = dir.path().join("app.yaml");
        std::fs::write(&src, "cert: {{ cert_dir }}\nport: {{ http_port }}\n").unwrap();

        let written = ConfigRenderer::default()
            .run(&RenderJob::new(&src, &dest, "/etc/certs", "8443"))
            .unwrap();

        let out = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(out, "cert: /etc/certs\nport: 8443\n");
        assert_eq!(written, out.len());
    }

    #[test]
    fn test_run_truncates_existing_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("t");
        let dest = dir.path().join("out");
        std::fs::write(&src, "{{ http_port }}").unwrap();
        std::fs::write(&dest, "a much longer previous content").unwrap();

        render_config(&src, &dest, "", "80").unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "80");
    }

    #[test]
    fn test_configured_variables() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("t");
        std::fs::write(&src, "{{ region }}:{{ http_port }}").unwrap();

        let mut config = Config::default();
        config
            .render
            .variables
            .insert("region".to_string(), "eu-west-1".to_string());
        let renderer = ConfigRenderer::new(config).unwrap();

        let out = renderer
            .render(&RenderJob::new(&src, dir.path().join("out"), "", "443"))
            .unwrap();
        assert_eq!(out, "eu-west-1:443");
    }

    #[test]
    fn test_render_failure_leaves_destination() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("t");
        let dest = dir.path().join("out");
        std::fs::write(&src, "{{ undefined_name }}").unwrap();
        std::fs::write(&dest, "previous").unwrap();

        let err = render_config(&src, &dest, "/c", "1").unwrap_err();
        assert!(matches!(err, Error::TemplateRender { .. }));
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "previous");
    }

    #[test]
    fn test_missing_dest_dir() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("t");
        let dest = dir.path().join("missing").join("out");
        std::fs::write(&src, "x").unwrap();

        let err = render_config(&src, &dest, "/c", "1").unwrap_err();
        assert!(matches!(err, Error::Write { ref path, .. } if *path == dest));
        assert!(!dest.exists());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config
            .render
            .variables
            .insert("not valid".to_string(), String::new());
        assert!(ConfigRenderer::new(config).is_err());
    }
}
