mod add;
mod completions;
mod create;
mod help;

use std::path::PathBuf;

use add::AddCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use create::CreateCommand;
use eyre::{Context, Result};
use help::{HelpCommand, HelpTopic};

use crate::reports::{Output, Report, TerminalOutput};

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for mcp_maker_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "mcp-maker")]
#[command(version)]
#[command(about = "Create and grow TypeScript MCP servers")]
#[command(disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in <PATH>
    #[arg(short = 'C', long, global = true, value_name = "PATH")]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let directory = self.directory()?;
        match &self.command {
            Some(Commands::Create(cmd)) => cmd.run(&directory),
            Some(Commands::Add(cmd)) => cmd.run(&directory),
            Some(Commands::Help(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => {
                welcome(&mut TerminalOutput::new());
                Ok(())
            }
        }
    }

    fn directory(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().wrap_err("Failed to read the current directory"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new MCP server project
    Create(CreateCommand),

    /// Add a tool, service, prompt or auth module to a project
    Add(AddCommand),

    /// Show detailed help for a command
    Help(HelpCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

fn welcome(out: &mut dyn Output) {
    out.preformatted("Welcome to mcp-maker!");
    out.newline();
    HelpTopic::Main.page().render(out);
}
