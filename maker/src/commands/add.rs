use std::path::Path;

use clap::{Args, Subcommand};
use eyre::Result;
use mcp_maker_codegen::{Component, ComponentKind};
use mcp_maker_core::{ComponentName, NameVariants, validate_project};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops, prompt,
    reports::{AddReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct AddCommand {
    #[command(subcommand)]
    command: AddSubcommand,
}

#[derive(Subcommand)]
enum AddSubcommand {
    /// Add a new tool and register it with the tool handler
    Tool(AddComponentArgs),

    /// Add a new service
    Service(AddComponentArgs),

    /// Add a new prompt
    Prompt(AddComponentArgs),

    /// Add basic, token and OAuth authentication providers
    Auth,
}

#[derive(Args)]
struct AddComponentArgs {
    /// Component name (prompted for when omitted)
    name: Option<String>,

    /// Component description (prompted for when omitted)
    #[arg(short, long)]
    description: Option<String>,
}

impl AddCommand {
    pub fn run(&self, root: &Path) -> Result<()> {
        validate_project(root).unwrap_or_exit();
        debug!(root = %root.display(), "project layout recognized");

        let report = match &self.command {
            AddSubcommand::Tool(args) => Self::add_component(ComponentKind::Tool, args, root)?,
            AddSubcommand::Service(args) => {
                Self::add_component(ComponentKind::Service, args, root)?
            }
            AddSubcommand::Prompt(args) => Self::add_component(ComponentKind::Prompt, args, root)?,
            AddSubcommand::Auth => ops::add_auth(root).unwrap_or_exit(),
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    fn add_component(
        kind: ComponentKind,
        args: &AddComponentArgs,
        root: &Path,
    ) -> Result<AddReport> {
        let raw = match &args.name {
            Some(name) => name.clone(),
            None => prompt::name(kind.as_str(), kind.as_str())?,
        };
        let name = ComponentName::parse(kind.as_str(), &raw).unwrap_or_exit();

        let description = match &args.description {
            Some(description) => description.clone(),
            None => prompt::description(
                kind.as_str(),
                Component::default_description(kind, &NameVariants::new(&name)),
            )?,
        };

        let component = Component::new(kind, &name, Some(description));
        Ok(ops::add(root, &component).unwrap_or_exit())
    }
}
