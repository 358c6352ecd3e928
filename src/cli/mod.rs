pub mod locate;
pub mod select;
pub mod tree;

use crate::errors::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "testsift",
    version,
    about = "Selects UI tests impacted by changed Java/Kotlin sources"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Map changed source files to the UI tests that depend on them
    Select(select::SelectArgs),
    /// List UI tests depending on a single source file
    Locate(locate::LocateArgs),
    /// Render the transitive-importer tree for a source file
    Tree(tree::TreeArgs),
}

/// Dispatch to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Select(args) => select::run(&args),
        Commands::Locate(args) => locate::run(&args),
        Commands::Tree(args) => tree::run(&args),
    }
}
