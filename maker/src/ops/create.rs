//! Create operation - scaffold a new MCP server project.

use std::path::Path;

use mcp_maker_codegen::{CreateOptions, Renderer, Toolchain, create_project, toolchain::Step};
use mcp_maker_core::{ComponentName, Result};

use crate::reports::CreateReport;

/// Create project `name` inside `parent` and run the post-create steps.
pub fn create(
    parent: &Path,
    name: &ComponentName,
    options: &CreateOptions,
    toolchain: &dyn Toolchain,
) -> Result<CreateReport> {
    let scaffold = create_project(parent, name, options, &Renderer::new(), toolchain)?;

    let installed = scaffold
        .completed_steps
        .iter()
        .any(|step| step.program == Step::NPM_INSTALL.program);
    let warnings = scaffold
        .warnings
        .iter()
        .map(|warning| format!("{}. {}", warning.error, warning.step.hint))
        .collect();

    Ok(CreateReport {
        name: scaffold.name.clone(),
        files: scaffold
            .files
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
        warnings,
        install_requested: options.install_dependencies,
        installed,
        built: scaffold.built(),
    })
}
