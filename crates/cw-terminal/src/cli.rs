//! Command line surface.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::bootstrap::{init_tracing_subscriber, resolve_config, wire_dependencies, TracingOptions};
use crate::commands::{self, wizard::WizardExit};
use crate::views::Prompter;

#[derive(Debug, Parser)]
#[command(name = "churn-wizard")]
#[command(about = "Collect customer details step by step and ask the churn model for a prediction")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to <config_dir>/churn-wizard/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive three-step wizard
    Wizard,

    /// Submit a saved wizard form (JSON) and print the result
    Predict {
        /// Path to the form file
        #[arg(short, long)]
        form: PathBuf,

        /// Override one field of the file, e.g. `--set tenure=24` (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<String>,
    },

    /// Print the encoded model record for a saved wizard form
    Encode {
        /// Path to the form file
        #[arg(short, long)]
        form: PathBuf,

        /// Override one field of the file, e.g. `--set tenure=24` (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        overrides: Vec<String>,
    },

    /// Submit a single-page form record (JSON) verbatim
    Legacy {
        /// Path to the record file
        #[arg(short, long)]
        form: PathBuf,
    },

    /// Check that the prediction service is up
    Health,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config).context("Failed to load configuration")?;

    if let Err(err) = init_tracing_subscriber(TracingOptions {
        verbose: cli.verbose,
        file_logging: config.file_logging.unwrap_or(true),
    }) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }
    debug!(config = ?config, "configuration resolved");

    let mut stdout = io::stdout();
    match cli.command {
        Commands::Encode { form, overrides } => commands::encode::run(&form, &overrides, &mut stdout),
        Commands::Wizard => {
            let deps = wire_dependencies(&config)?;
            let orchestrator = deps.wizard();
            let mut prompter = Prompter::new(io::stdin().lock(), stdout);
            match commands::wizard::run(&orchestrator, &mut prompter).await? {
                WizardExit::Finished | WizardExit::Quit => Ok(()),
                WizardExit::InputClosed => {
                    debug!("input closed, leaving the wizard");
                    Ok(())
                }
            }
        }
        Commands::Predict { form, overrides } => {
            let deps = wire_dependencies(&config)?;
            commands::predict::run(&deps, &form, &overrides, &mut stdout).await
        }
        Commands::Legacy { form } => {
            let deps = wire_dependencies(&config)?;
            commands::legacy::run(&deps, &form, &mut stdout).await
        }
        Commands::Health => {
            let deps = wire_dependencies(&config)?;
            commands::health::run(&deps, &mut stdout).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "churn-wizard",
            "predict",
            "--form",
            "form.json",
            "-v",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(
            cli.command,
            Commands::Predict { ref form, ref overrides }
                if form == &PathBuf::from("form.json") && overrides.is_empty()
        ));
    }

    #[test]
    fn set_flag_collects_overrides_in_order() {
        let cli = Cli::try_parse_from([
            "churn-wizard",
            "encode",
            "-f",
            "form.json",
            "--set",
            "tenure=24",
            "--set",
            "contract=One year",
        ])
        .unwrap();

        match cli.command {
            Commands::Encode { overrides, .. } => {
                assert_eq!(overrides, vec!["tenure=24", "contract=One year"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["churn-wizard"]).is_err());
    }
}
