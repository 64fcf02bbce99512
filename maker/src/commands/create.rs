use std::path::Path;

use clap::{Args, Subcommand};
use eyre::Result;
use mcp_maker_codegen::{CreateOptions, SystemToolchain, scaffold::DEFAULT_PORT};
use mcp_maker_core::ComponentName;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops, prompt,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CreateCommand {
    #[command(subcommand)]
    command: CreateSubcommand,
}

#[derive(Subcommand)]
enum CreateSubcommand {
    /// Create a new MCP server project
    Server(CreateServerArgs),
}

#[derive(Args)]
struct CreateServerArgs {
    /// Project name (prompted for when omitted)
    name: Option<String>,

    /// Serve over streamable HTTP instead of stdio
    #[arg(long)]
    http: bool,

    /// Enable CORS with wildcard (*) access, HTTP only
    #[arg(long)]
    cors: bool,

    /// Port the HTTP server listens on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Skip npm install and the TypeScript build
    #[arg(long)]
    no_install: bool,
}

impl CreateServerArgs {
    fn options(&self) -> CreateOptions {
        CreateOptions {
            use_http_transport: self.http,
            enable_cors: self.cors,
            port: self.port,
            install_dependencies: !self.no_install,
        }
    }
}

impl CreateCommand {
    pub fn run(&self, directory: &Path) -> Result<()> {
        match &self.command {
            CreateSubcommand::Server(args) => Self::create_server(args, directory),
        }
    }

    fn create_server(args: &CreateServerArgs, directory: &Path) -> Result<()> {
        let raw = match &args.name {
            Some(name) => name.clone(),
            None => prompt::name("project", "MCP server project")?,
        };
        let name = ComponentName::parse("project", &raw).unwrap_or_exit();
        debug!(parent = %directory.display(), project = %name, "creating project");

        let report =
            ops::create(directory, &name, &args.options(), &SystemToolchain).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        command: CreateSubcommand,
    }

    fn parse(args: &[&str]) -> CreateServerArgs {
        let argv = ["create"].iter().chain(args).copied();
        match Harness::try_parse_from(argv).unwrap().command {
            CreateSubcommand::Server(args) => args,
        }
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["server", "weather"]);
        assert_eq!(args.name.as_deref(), Some("weather"));
        assert_eq!(args.options(), CreateOptions::default());
    }

    #[test]
    fn test_http_flags() {
        let options = parse(&[
            "server",
            "weather",
            "--http",
            "--cors",
            "--port",
            "3000",
            "--no-install",
        ])
        .options();
        assert!(options.use_http_transport);
        assert!(options.enable_cors);
        assert_eq!(options.port, 3000);
        assert!(!options.install_dependencies);
    }

    #[test]
    fn test_name_is_optional() {
        assert!(parse(&["server"]).name.is_none());
    }

    #[test]
    fn test_port_must_be_a_number() {
        assert!(Harness::try_parse_from(["create", "server", "--port", "http"]).is_err());
    }
}
