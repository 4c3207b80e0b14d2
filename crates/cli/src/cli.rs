use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{check_command, init_command, watch_command};

#[derive(Parser, Debug)]
#[command(name = "hotcopy")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch configured plugin projects and refresh build output on save
    #[command(visible_alias = "w")]
    Watch {
        /// Directory to start config discovery from (defaults to the
        /// current directory)
        path: Option<String>,

        /// Explicit path to a hotcopy config file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Explain what a save of the given file would do
    #[command(visible_alias = "c")]
    Check {
        /// Path to the file to check
        filepath: String,

        /// Perform the copy instead of only reporting the decision
        #[arg(long)]
        copy: bool,

        /// Show the loaded configuration
        #[arg(short = 'c', long = "config")]
        config: bool,
    },
    /// Discover plugin projects and write a starter configuration
    Init {
        /// Custom working directory (defaults to current directory)
        #[arg(long = "cwd")]
        cwd: Option<String>,

        /// Force overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Watch { path, config } => watch_command(path.as_deref(), config.as_deref()),
            Commands::Check {
                filepath,
                copy,
                config,
            } => check_command(&filepath, copy, config),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
