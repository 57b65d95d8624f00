//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod run;

use clap::{Args, Subcommand};

/// Arguments for the run command.
#[derive(Args, Default)]
pub struct RunArgs {
    /// Read register commands from a file instead of stdin.
    #[arg(short, long)]
    pub script: Option<String>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Print the product list as HTML.
    #[arg(long)]
    pub html: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Terminal name to write into the file.
        #[arg(short, long, default_value = "till-1")]
        name: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
