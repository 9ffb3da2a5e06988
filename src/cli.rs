//! Command-line interface for load-template

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "load-template",
    version,
    about = "Render a service configuration file from a template",
    long_about = "Loads SRC from its parent directory, renders it with the Tera template engine \
                  (Jinja2-style {{ var }} placeholders), binding `cert_dir` and `http_port` to \
                  the given values, and writes the result to DEST.",
    override_usage = "load-template [OPTIONS] <SRC> <DEST> <CERT_DIR> <HTTP_PORT>",
    after_help = "EXAMPLES:
  load-template conf/server.yaml.j2 conf/server.yaml /etc/certs 8443
  load-template -v --config render.yaml conf/app.toml.j2 app.toml /certs 9000
  load-template --stdout conf/server.yaml.j2 - /etc/certs 8443"
)]
pub struct Cli {
    /// Template file
    #[arg(value_name = "SRC")]
    pub src: Option<String>,

    /// Destination file (created or truncated)
    #[arg(value_name = "DEST")]
    pub dest: Option<String>,

    /// Value for `cert_dir`
    #[arg(value_name = "CERT_DIR", allow_hyphen_values = true)]
    pub cert_dir: Option<String>,

    /// Value for `http_port`
    #[arg(value_name = "HTTP_PORT", allow_hyphen_values = true)]
    pub http_port: Option<String>,

    /// Ignored trailing arguments
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Enable verbose output (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (yaml, toml or json)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Write the rendered template to stdout instead of DEST
    #[arg(long)]
    pub stdout: bool,
}

impl Cli {
    /// Positional arguments in order, stopping at the first missing one
    pub fn positionals(&self) -> Vec<String> {
        [&self.src, &self.dest, &self.cert_dir, &self.http_port]
            .into_iter()
            .map_while(|arg| arg.clone())
            .chain(self.extra.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_four_positionals() {
        let cli = Cli::parse_from(["load-template", "a.j2", "a.yaml", "/certs", "8443"]);
        assert_eq!(cli.positionals(), vec!["a.j2", "a.yaml", "/certs", "8443"]);
        assert!(cli.extra.is_empty());
    }

    #[test]
    fn test_missing_positionals_parse() {
        let cli = Cli::parse_from(["load-template", "a.j2", "a.yaml"]);
        assert_eq!(cli.positionals().len(), 2);
    }

    #[test]
    fn test_extra_positionals_collected() {
        let cli = Cli::parse_from(["load-template", "a", "b", "c", "d", "e", "f"]);
        assert_eq!(cli.extra, vec!["e", "f"]);
        assert_eq!(cli.positionals().len(), 6);
    }

    #[test]
    fn test_hyphen_values() {
        let cli = Cli::parse_from(["load-template", "a", "b", "-certs", "-1"]);
        assert_eq!(cli.cert_dir.as_deref(), Some("-certs"));
        assert_eq!(cli.http_port.as_deref(), Some("-1"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "load-template",
            "-vv",
            "--config",
            "render.yaml",
            "--stdout",
            "a",
            "b",
            "c",
            "d",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("render.yaml")));
        assert!(cli.stdout);
        assert!(!cli.print_config);
    }
}
