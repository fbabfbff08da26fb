//! Course-registration validator.
//!
//! Builds the rule list from `registrar.toml` (or the stock floor, ceiling,
//! prerequisite rules) and runs the demo scenarios through it. Diagnostics go
//! to stderr through `tracing`; verdicts go to stdout.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use registrar::core::service::RegistrationService;
use registrar::demo::{run_demo, scenario_records};
use registrar::io::config::{DEFAULT_CONFIG_FILE, RegistrarConfig, load_config, write_config};
use registrar::io::tracing_sink::TracingSink;
use registrar::logging;

#[derive(Parser)]
#[command(
    name = "registrar",
    version,
    about = "Validate course registrations against credit and prerequisite rules"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in registration scenarios and print each verdict.
    Demo {
        /// Rule configuration file; stock rules are used when it is missing.
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// Write the stock rule configuration.
    Init {
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Demo { config } => cmd_demo(&config),
        Command::Init { config, force } => cmd_init(&config, force),
    }
}

fn cmd_demo(config_path: &Path) -> Result<()> {
    let cfg = load_config(config_path)?;
    let service = RegistrationService::new(cfg.build_rules(), TracingSink);
    debug!(rules = ?service.rule_names(), "service ready");

    let records = scenario_records()?;
    for line in run_demo(&service, &records) {
        println!("{}: {}", line.name, line.verdict());
    }
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &RegistrarConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_demo_defaults_config_path() {
        let cli = Cli::parse_from(["registrar", "demo"]);
        match cli.command {
            Command::Demo { config } => assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_FILE)),
            Command::Init { .. } => panic!("expected demo"),
        }
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["registrar", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        cmd_init(&path, false).expect("first init");
        let err = cmd_init(&path, false).expect_err("second init");
        assert!(err.to_string().contains("already exists"));
        cmd_init(&path, true).expect("forced init");
    }
}
