use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "media-triage")]
#[command(
    about = "Import media from removable drives and purge emptied folders",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a full triage pass over attached removable drives
    Run,
    /// Print configuration values
    PrintConfig,
}
