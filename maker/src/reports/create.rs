//! Create command report data structures.

use super::output::{Output, Report};

/// Report data from creating a project.
#[derive(Debug)]
pub struct CreateReport {
    /// Project name, also its directory
    pub name: String,
    /// Written files, relative to the project root
    pub files: Vec<String>,
    /// Failed post-create steps
    pub warnings: Vec<String>,
    /// Whether dependencies were requested
    pub install_requested: bool,
    /// Whether `npm install` succeeded
    pub installed: bool,
    /// Whether the TypeScript build succeeded
    pub built: bool,
}

impl CreateReport {
    fn headline(&self) -> String {
        if self.built {
            format!("Project {} created and built successfully!", self.name)
        } else if !self.install_requested {
            format!("Project {} created successfully (without dependencies)!", self.name)
        } else {
            format!("Project {} created successfully!", self.name)
        }
    }

    /// What the user can do next, in order.
    pub fn next_steps(&self) -> Vec<String> {
        let mut steps = vec![format!("cd {}", self.name)];
        if !self.installed {
            steps.push("Run 'npm install' to install dependencies".to_string());
        }
        if !self.built {
            steps.push("Run 'npm run build' to build the project".to_string());
        }
        steps.push("Add tools using: mcp-maker add tool <tool-name>".to_string());
        steps.push("Add services using: mcp-maker add service <service-name>".to_string());
        steps.push("Add prompts using: mcp-maker add prompt <prompt-name>".to_string());
        steps
    }
}

impl Report for CreateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.preformatted(&self.headline());
        out.newline();

        out.section("Files created");
        for path in &self.files {
            out.added_item(path);
        }
        out.newline();

        out.section("You can now");
        for (i, step) in self.next_steps().iter().enumerate() {
            out.numbered_item(i + 1, step);
        }
    }
}
