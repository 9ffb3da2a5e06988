// load-template: deploy-time configuration renderer
// Copyright (c) 2024 CERT-X-GEN Core Team

use clap::{error::ErrorKind, Parser};
use load_template::{
    config::Config,
    core::{ConfigRenderer, RenderJob, REQUIRED_ARGS, USAGE},
    error::{Error, Result, ResultExt},
    logging,
};
use std::io::Write;

mod cli;
use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        // Unknown flags count as arguments; a short invocation is a usage error
        Err(_) => {
            let err = Error::Usage(USAGE.to_string());
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(cli) {
        if e.is_usage() {
            eprintln!("{}", e);
        } else {
            tracing::debug!("Render failed: {:?}", e);
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}

/// Run the CLI command
fn run(cli: Cli) -> Result<()> {
    if cli.print_config {
        let config = load_config(&cli)?;
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    // Argument count is checked before any file is touched
    let args = cli.positionals();
    let job = RenderJob::from_args(&args)?;
    if args.len() > REQUIRED_ARGS {
        tracing::warn!(
            "Ignoring {} extra argument(s): {:?}",
            args.len() - REQUIRED_ARGS,
            &args[REQUIRED_ARGS..]
        );
    }

    let renderer = ConfigRenderer::new(load_config(&cli)?)?;

    if cli.stdout {
        let rendered = renderer.render(&job)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
    } else {
        renderer.run(&job)?;
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            Config::from_file(path).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}
