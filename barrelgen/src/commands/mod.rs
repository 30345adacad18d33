mod completions;
mod generate;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

#[derive(Parser)]
#[command(name = "barrelgen")]
#[command(version)]
#[command(about = "Regenerate TypeScript barrel files across a source tree")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the subdirectory and root barrel files
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
