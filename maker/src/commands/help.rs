use clap::Args;
use eyre::Result;

use crate::reports::{HelpPage, Report, TerminalOutput};

#[derive(Args)]
pub struct HelpCommand {
    /// Command and subcommand to describe, e.g. `create server`
    #[arg(num_args = 0..=2, value_name = "COMMAND")]
    topic: Vec<String>,
}

impl HelpCommand {
    pub fn run(&self) -> Result<()> {
        HelpTopic::lookup(&self.topic)
            .page()
            .render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HelpTopic {
    Main,
    Create,
    CreateServer,
    Add,
    AddTool,
    AddService,
    AddPrompt,
    AddAuth,
    Help,
}

impl HelpTopic {
    /// Resolve `help [command] [subcommand]`; unknown commands fall back to
    /// the main page and unknown subcommands to their command's page.
    pub fn lookup(words: &[String]) -> Self {
        let command = words.first().map(String::as_str);
        let subcommand = words.get(1).map(String::as_str);
        match (command, subcommand) {
            (Some("create"), Some("server")) => Self::CreateServer,
            (Some("create"), _) => Self::Create,
            (Some("add"), Some("tool")) => Self::AddTool,
            (Some("add"), Some("service")) => Self::AddService,
            (Some("add"), Some("prompt")) => Self::AddPrompt,
            (Some("add"), Some("auth")) => Self::AddAuth,
            (Some("add"), _) => Self::Add,
            (Some("help"), _) => Self::Help,
            _ => Self::Main,
        }
    }

    pub fn page(self) -> &'static HelpPage {
        match self {
            Self::Main => &MAIN,
            Self::Create => &CREATE,
            Self::CreateServer => &CREATE_SERVER,
            Self::Add => &ADD,
            Self::AddTool => &ADD_TOOL,
            Self::AddService => &ADD_SERVICE,
            Self::AddPrompt => &ADD_PROMPT,
            Self::AddAuth => &ADD_AUTH,
            Self::Help => &HELP,
        }
    }
}

const GLOBAL_OPTIONS: &[(&str, &str)] = &[
    ("-C, --directory <PATH>", "Run as if started in <PATH>"),
    ("-v, --verbose", "Print debug logs to stderr"),
    ("-h, --help", "Print a short usage summary"),
];

const MAIN: HelpPage = HelpPage {
    name: "mcp-maker - create and grow TypeScript MCP servers",
    synopsis: &["mcp-maker [OPTIONS] <COMMAND> [SUBCOMMAND] [ARGS]"],
    description: "Scaffolds Model Context Protocol servers written in TypeScript and adds
tools, services, prompts and authentication to them. Added components are
registered in the project's index files and tool handler automatically.",
    arguments: &[],
    options: &[
        ("-C, --directory <PATH>", "Run as if started in <PATH>"),
        ("-v, --verbose", "Print debug logs to stderr"),
        ("-h, --help", "Print a short usage summary"),
        ("-V, --version", "Print version"),
    ],
    commands: &[
        ("create", "Create new MCP server projects"),
        ("add", "Add components to an existing MCP server"),
        ("help", "Display help for a specific command"),
        ("completions", "Generate shell completions"),
    ],
    examples: &[
        ("mcp-maker create server my-server", "Create a new MCP server project"),
        ("mcp-maker add tool my-tool", "Add a new tool to an existing MCP server"),
        ("mcp-maker add service my-service", "Add a new service to an existing MCP server"),
        ("mcp-maker help create server", "Display help for the create server command"),
    ],
};

const CREATE: HelpPage = HelpPage {
    name: "mcp-maker create - create new MCP server projects",
    synopsis: &["mcp-maker create <SUBCOMMAND> [OPTIONS]"],
    description: "Run 'mcp-maker help create server' for the options of each subcommand.",
    arguments: &[],
    options: GLOBAL_OPTIONS,
    commands: &[("server", "Create a new MCP server project")],
    examples: &[
        ("mcp-maker create server my-server", "Create a new MCP server project"),
        (
            "mcp-maker create server my-server --http --port 3000",
            "Create a server with HTTP transport",
        ),
    ],
};

const CREATE_SERVER: HelpPage = HelpPage {
    name: "mcp-maker create server - create a new MCP server project",
    synopsis: &["mcp-maker create server [NAME] [--http] [--cors] [--port <N>] [--no-install]"],
    description: "Creates the directory NAME with this structure:

  NAME/
    src/
      server/      toolHandler.ts, promptHandler.ts, resourceHandler.ts
      tools/       index.ts, utils.ts
      services/    index.ts
      prompts/     index.ts, types.ts
      resources/   index.ts
      utils/       logger.ts, serverUtils.ts
      config/      index.ts
      index.ts
    package.json
    tsconfig.json
    .gitignore
    README.md

The directory must not exist yet. A git repository is initialized, then the
dependencies are installed and the project is built. Failures of these steps
are reported as warnings; the files stay in place.",
    arguments: &[(
        "NAME",
        "Project name: lowercase letters, numbers and hyphens (prompted for when omitted)",
    )],
    options: &[
        ("--http", "Use streamable HTTP transport instead of stdio"),
        ("--cors", "Enable CORS with wildcard (*) access, HTTP only"),
        ("--port <N>", "Port of the HTTP server [default: 8080], HTTP only"),
        ("--no-install", "Skip npm install and the build"),
        ("-C, --directory <PATH>", "Create the project inside <PATH>"),
    ],
    commands: &[],
    examples: &[
        ("mcp-maker create server my-server", "Create a server with stdio transport"),
        (
            "mcp-maker create server my-server --http --port 3000",
            "Create with HTTP transport on port 3000",
        ),
        (
            "mcp-maker create server my-server --http --cors",
            "Create with HTTP transport and CORS enabled",
        ),
        (
            "mcp-maker create server my-server --no-install",
            "Create without installing dependencies",
        ),
    ],
};

const ADD: HelpPage = HelpPage {
    name: "mcp-maker add - add components to an existing MCP server",
    synopsis: &["mcp-maker add <SUBCOMMAND> [NAME] [OPTIONS]"],
    description: "Must be run from the root of a project created with 'mcp-maker create server'
(or pointed at one with -C).",
    arguments: &[],
    options: GLOBAL_OPTIONS,
    commands: &[
        ("tool", "Add a new tool"),
        ("service", "Add a new service"),
        ("prompt", "Add a new prompt"),
        ("auth", "Add basic, token and OAuth authentication providers"),
    ],
    examples: &[
        ("mcp-maker add tool my-tool", "Add a new tool to an existing MCP server"),
        ("mcp-maker add service my-service", "Add a new service to an existing MCP server"),
        ("mcp-maker add prompt my-prompt", "Add a new prompt to an existing MCP server"),
        ("mcp-maker add auth", "Add the authentication module"),
    ],
};

const ADD_TOOL: HelpPage = HelpPage {
    name: "mcp-maker add tool - add a new tool to an existing MCP server",
    synopsis: &["mcp-maker add tool [NAME] [-d <TEXT>]"],
    description: "1. Creates src/tools/NAME/ with the tool implementation and an index file
2. Registers the tool in src/tools/index.ts
3. Adds a dispatch case to src/server/toolHandler.ts

Running it again with the same name rewrites the tool files and leaves the
registrations as they are.",
    arguments: &[(
        "NAME",
        "Tool name: lowercase letters, numbers and hyphens, starting with a letter so \
         the generated identifiers are valid TypeScript (prompted for when omitted)",
    )],
    options: &[
        ("-d, --description <TEXT>", "Tool description (prompted for when omitted)"),
        ("-C, --directory <PATH>", "Project root"),
    ],
    commands: &[],
    examples: &[("mcp-maker add tool my-tool", "Add a new tool named \"my-tool\"")],
};

const ADD_SERVICE: HelpPage = HelpPage {
    name: "mcp-maker add service - add a new service to an existing MCP server",
    synopsis: &["mcp-maker add service [NAME] [-d <TEXT>]"],
    description: "1. Creates src/services/NAME/ with the service class and an index file
2. Re-exports the service from src/services/index.ts",
    arguments: &[(
        "NAME",
        "Service name: lowercase letters, numbers and hyphens, starting with a letter so \
         the generated identifiers are valid TypeScript (prompted for when omitted)",
    )],
    options: &[
        ("-d, --description <TEXT>", "Service description (prompted for when omitted)"),
        ("-C, --directory <PATH>", "Project root"),
    ],
    commands: &[],
    examples: &[(
        "mcp-maker add service my-service",
        "Add a new service named \"my-service\"",
    )],
};

const ADD_PROMPT: HelpPage = HelpPage {
    name: "mcp-maker add prompt - add a new prompt to an existing MCP server",
    synopsis: &["mcp-maker add prompt [NAME] [-d <TEXT>]"],
    description: "1. Creates src/prompts/NAME/ with the prompt, an index file and a README
2. Registers the prompt in src/prompts/index.ts
3. Writes src/prompts/README.md unless it already exists",
    arguments: &[(
        "NAME",
        "Prompt name: lowercase letters, numbers and hyphens, starting with a letter so \
         the generated identifiers are valid TypeScript (prompted for when omitted)",
    )],
    options: &[
        ("-d, --description <TEXT>", "Prompt description (prompted for when omitted)"),
        ("-C, --directory <PATH>", "Project root"),
    ],
    commands: &[],
    examples: &[(
        "mcp-maker add prompt code-review",
        "Add a new prompt named \"code-review\"",
    )],
};

const ADD_AUTH: HelpPage = HelpPage {
    name: "mcp-maker add auth - add authentication providers",
    synopsis: &["mcp-maker add auth"],
    description: "Writes src/auth/ with provider interfaces, basic, token and OAuth
implementations, an AuthFactory and an AuthService. Existing files with the
same paths are overwritten.",
    arguments: &[],
    options: &[("-C, --directory <PATH>", "Project root")],
    commands: &[],
    examples: &[("mcp-maker add auth", "Add the authentication module")],
};

const HELP: HelpPage = HelpPage {
    name: "mcp-maker help - display help for a command",
    synopsis: &["mcp-maker help [COMMAND] [SUBCOMMAND]"],
    description: "Unknown commands show the main page.",
    arguments: &[
        ("COMMAND", "create, add or help"),
        ("SUBCOMMAND", "server, tool, service, prompt or auth"),
    ],
    options: &[],
    commands: &[],
    examples: &[
        ("mcp-maker help", "Show the main page"),
        ("mcp-maker help add tool", "Show help for adding tools"),
    ],
};
