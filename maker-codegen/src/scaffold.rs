//! Creation of a brand-new MCP server project.

use std::{
    fs,
    path::{Path, PathBuf},
};

use mcp_maker_core::{ComponentName, Error, File, GeneratedFile, ProjectLayout, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    Renderer,
    files::{GitIgnore, PackageJson, TsConfig},
    toolchain::{Step, Toolchain},
};

pub const DEFAULT_PORT: u16 = 8080;

/// Options of `create server`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    /// Serve over streamable HTTP instead of stdio
    pub use_http_transport: bool,
    /// Enable CORS (HTTP transport only)
    pub enable_cors: bool,
    /// Listening port (HTTP transport only)
    pub port: u16,
    /// Run `npm install` and the TypeScript build after writing files
    pub install_dependencies: bool,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            use_http_transport: false,
            enable_cors: false,
            port: DEFAULT_PORT,
            install_dependencies: true,
        }
    }
}

#[derive(Serialize)]
struct ProjectContext<'a> {
    name: &'a str,
    http: bool,
    cors: bool,
    port: u16,
}

/// Project files rendered from templates, by path relative to the project root.
const PROJECT_TEMPLATES: [(&str, &str); 14] = [
    ("src/index.ts", "project/index.ts"),
    ("src/server/toolHandler.ts", "project/server/toolHandler.ts"),
    ("src/server/promptHandler.ts", "project/server/promptHandler.ts"),
    ("src/server/resourceHandler.ts", "project/server/resourceHandler.ts"),
    ("src/tools/index.ts", "project/tools/index.ts"),
    ("src/tools/utils.ts", "project/tools/utils.ts"),
    ("src/services/index.ts", "project/services/index.ts"),
    ("src/prompts/index.ts", "project/prompts/index.ts"),
    ("src/prompts/types.ts", "project/prompts/types.ts"),
    ("src/resources/index.ts", "project/resources/index.ts"),
    ("src/utils/logger.ts", "project/utils/logger.ts"),
    ("src/utils/serverUtils.ts", "project/utils/serverUtils.ts"),
    ("src/config/index.ts", "project/config/index.ts"),
    ("README.md", "project/README.md"),
];

/// A post-create step that failed; the project itself is still usable.
#[derive(Debug)]
pub struct StepWarning {
    pub step: Step,
    pub error: Box<Error>,
}

/// Result of creating a project.
#[derive(Debug)]
pub struct ScaffoldReport {
    pub name: String,
    pub root: PathBuf,
    pub options: CreateOptions,
    /// Written files, relative to `root`
    pub files: Vec<PathBuf>,
    /// Steps that ran successfully
    pub completed_steps: Vec<Step>,
    pub warnings: Vec<StepWarning>,
}

impl ScaffoldReport {
    /// Whether the install and build steps both ran and succeeded.
    pub fn built(&self) -> bool {
        self.completed_steps
            .iter()
            .any(|step| step.program == Step::BUILD.program)
    }
}

/// Every file of a new project, relative to its root.
pub fn project_files(
    name: &ComponentName,
    options: &CreateOptions,
    renderer: &Renderer,
) -> Result<Vec<File>> {
    let http = options.use_http_transport;
    let ctx = ProjectContext {
        name: name.as_str(),
        http,
        cors: http && options.enable_cors,
        port: options.port,
    };

    let mut package = PackageJson::new(name.as_str());
    if http {
        package = package.with_http(ctx.cors);
    }

    let base = Path::new("");
    let mut files = vec![
        File::new(ProjectLayout::MANIFEST, package.render()?),
        File::new(TsConfig.path(base), TsConfig.render()?),
        File::new(GitIgnore.path(base), GitIgnore.render()?),
    ];
    for (path, template) in PROJECT_TEMPLATES {
        files.push(File::new(path, renderer.render(template, &ctx)?));
    }
    Ok(files)
}

/// Create project `name` inside `parent`.
///
/// Fails if the project directory already exists. Failures of the optional
/// git and npm steps are collected as warnings, never returned as errors.
pub fn create_project(
    parent: &Path,
    name: &ComponentName,
    options: &CreateOptions,
    renderer: &Renderer,
    toolchain: &dyn Toolchain,
) -> Result<ScaffoldReport> {
    let root = parent.join(name.as_str());
    if root.exists() {
        return Err(Error::already_exists(root));
    }
    if !options.use_http_transport && (options.enable_cors || options.port != DEFAULT_PORT) {
        warn!("--cors and --port only apply to the HTTP transport; ignoring them");
    }

    let files = project_files(name, options, renderer)?;

    fs::create_dir(&root).map_err(|e| Error::io("create directory", &root, e))?;
    for dir in ProjectLayout::SOURCE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|e| Error::io("create directory", &path, e))?;
    }
    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        file.write(&root)?;
        written.push(file.path().to_path_buf());
    }
    info!(project = %name, files = written.len(), "project files written");

    let mut report = ScaffoldReport {
        name: name.to_string(),
        root,
        options: options.clone(),
        files: written,
        completed_steps: Vec::new(),
        warnings: Vec::new(),
    };

    run_step(&mut report, Step::GIT_INIT, toolchain);
    if options.install_dependencies && run_step(&mut report, Step::NPM_INSTALL, toolchain) {
        run_step(&mut report, Step::BUILD, toolchain);
    }

    Ok(report)
}

fn run_step(report: &mut ScaffoldReport, step: Step, toolchain: &dyn Toolchain) -> bool {
    match step.run(toolchain, &report.root) {
        Ok(()) => {
            report.completed_steps.push(step);
            true
        }
        Err(failure) => {
            let error = Error::subprocess(step.command_line(), failure.describe(), step.hint);
            warn!("{error}");
            report.warnings.push(StepWarning { step, error });
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files_for(options: &CreateOptions) -> Vec<File> {
        let name = ComponentName::parse("project", "weather").unwrap();
        project_files(&name, options, &Renderer::new()).unwrap()
    }

    fn content<'a>(files: &'a [File], path: &str) -> &'a str {
        files
            .iter()
            .find(|f| f.path() == Path::new(path))
            .map(|f| f.content())
            .unwrap()
    }

    #[test]
    fn test_stdio_entry_point() {
        let files = files_for(&CreateOptions::default());
        let index = content(&files, "src/index.ts");
        assert!(index.contains("StdioServerTransport"));
        assert!(!index.contains("StreamableHTTPServerTransport"));
        assert!(!index.contains("config.port"));
        assert!(!content(&files, "src/config/index.ts").contains("8080"));
    }

    #[test]
    fn test_http_entry_point() {
        let options = CreateOptions {
            use_http_transport: true,
            enable_cors: true,
            port: 3000,
            ..CreateOptions::default()
        };
        let files = files_for(&options);
        let index = content(&files, "src/index.ts");
        assert!(index.contains("StreamableHTTPServerTransport"));
        assert!(index.contains("app.use(cors("));
        assert!(!index.contains("StdioServerTransport"));
        assert!(content(&files, "src/config/index.ts").contains("process.env.PORT ?? 3000"));
        assert!(content(&files, "package.json").contains("\"express\""));
    }

    #[test]
    fn test_cors_requires_http() {
        let options = CreateOptions {
            enable_cors: true,
            ..CreateOptions::default()
        };
        let files = files_for(&options);
        assert!(!content(&files, "src/index.ts").contains("cors"));
        assert!(!content(&files, "package.json").contains("\"cors\""));
    }

    #[test]
    fn test_barrels_are_registrable() {
        let files = files_for(&CreateOptions::default());
        assert!(content(&files, "src/tools/index.ts").contains("export const serverTools: Tool[] = ["));
        assert!(content(&files, "src/prompts/index.ts").contains("export const serverPrompts: McpPrompt[] = ["));
        let handler = content(&files, "src/server/toolHandler.ts");
        assert!(handler.contains("switch (name) {"));
        assert!(handler.contains("default:"));
    }
}
