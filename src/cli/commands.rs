use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "listo", about = concat!("listo v", env!("CARGO_PKG_VERSION"), " - a todo list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a script of list operations and print the resulting list
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, one command per line (stdin when omitted or "-")
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
    /// Stop at the first failing line and exit with an error
    #[arg(long)]
    pub strict: bool,
}
