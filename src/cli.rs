use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{run, show};

#[derive(Debug, Parser)]
#[command(name = "dlb")]
#[command(about = "Dual list box: move items between an available and a selected list", long_about = None)]
pub struct Cli {
    /// Write logs to this file (level from DLB_LOG, default info)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick items interactively and print the submitted values
    Run(run::Args),

    /// Print both lists without interaction
    Show(show::Args),
}
