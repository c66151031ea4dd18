//! CLI for the smile redirector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use smile_core::config;
use smile_core::host::TabId;

use commands::{
    run_check, run_completions, run_config, run_icons, run_man, run_serve, run_tab,
};

/// Top-level CLI for the smile redirector.
#[derive(Debug, Parser)]
#[command(name = "smile")]
#[command(about = "smile: send retail product pages to the charity subdomain", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decide whether a navigation request would be redirected.
    Check {
        /// Target URL of the request.
        url: String,
        /// HTTP method of the request.
        #[arg(long, default_value = "GET")]
        method: String,
        /// Resource type as reported by the browser.
        #[arg(long = "type", default_value = "main_frame", value_name = "TYPE")]
        resource_type: String,
        /// Evaluate with redirection switched off.
        #[arg(long)]
        disabled: bool,
    },

    /// Show the icon actions for a tab navigating to a URL.
    Tab {
        /// New location of the tab.
        url: String,
        /// Tab identifier to report in the actions.
        #[arg(long, default_value = "0", value_name = "ID")]
        tab_id: TabId,
        /// Evaluate with redirection switched off.
        #[arg(long)]
        disabled: bool,
    },

    /// Print the icon dictionary for the enabled (or disabled) state.
    Icons {
        #[arg(long)]
        disabled: bool,
    },

    /// Answer JSON-line host events from stdin on stdout until EOF.
    Serve,

    /// Print the config file path and the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print a roff man page.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                url,
                method,
                resource_type,
                disabled,
            } => run_check(&cfg, &url, &method, &resource_type, disabled)?,
            CliCommand::Tab {
                url,
                tab_id,
                disabled,
            } => run_tab(&cfg, &url, tab_id, disabled)?,
            CliCommand::Icons { disabled } => run_icons(&cfg, disabled)?,
            CliCommand::Serve => run_serve(&cfg).await?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
