//! Generators for the components `add` creates inside an existing project.

mod auth;
mod kind;

use std::path::{Path, PathBuf};

pub use auth::{AUTH_SCHEMES, AuthScheme, auth_files};
pub use kind::ComponentKind;
use mcp_maker_core::{
    ComponentName, File, GeneratedFile, NameVariants, ProjectLayout, Result, WriteResult,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    Renderer,
    register::{TargetUpdate, register_in_project},
};

/// A tool, service or prompt about to be added to a project.
#[derive(Debug, Clone)]
pub struct Component {
    pub kind: ComponentKind,
    pub names: NameVariants,
    pub description: String,
}

#[derive(Serialize)]
struct ComponentContext<'a> {
    #[serde(flatten)]
    names: &'a NameVariants,
    /// Plain text, for Markdown
    description: &'a str,
    /// Escaped for `'...'` and template literals
    description_literal: String,
    /// Safe inside a `/** ... */` block
    description_comment: String,
}

/// Escape `text` for the inside of a single-quoted or backtick TypeScript string.
fn ts_string_content(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '`' => out.push_str("\\`"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            c => out.push(c),
        }
    }
    out
}

/// Keep `text` from closing a doc comment early.
fn doc_comment_text(text: &str) -> String {
    text.replace("*/", "*\\/").replace('\n', "\n * ")
}

impl Component {
    /// Blank descriptions fall back to [`Component::default_description`].
    pub fn new(kind: ComponentKind, name: &ComponentName, description: Option<String>) -> Self {
        let names = NameVariants::new(name);
        if names.raw.starts_with(|c: char| c.is_ascii_digit()) {
            warn!(
                name = %names.raw,
                "{kind} names starting with a digit produce invalid TypeScript identifiers"
            );
        }
        let description = description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| Self::default_description(kind, &names));
        Self {
            kind,
            names,
            description,
        }
    }

    /// e.g. "GetForecast tool"
    pub fn default_description(kind: ComponentKind, names: &NameVariants) -> String {
        format!("{} {}", names.pascal, kind)
    }

    /// Directory of this component's own files, relative to the project root.
    pub fn dir(&self) -> String {
        format!("{}/{}", self.kind.dir(), self.names.slug)
    }

    /// Render the component's own files.
    pub fn files(&self, renderer: &Renderer) -> Result<Vec<File>> {
        let ctx = ComponentContext {
            names: &self.names,
            description: &self.description,
            description_literal: ts_string_content(&self.description),
            description_comment: doc_comment_text(&self.description),
        };
        let dir = self.dir();
        let slug = &self.names.slug;

        let files = match self.kind {
            ComponentKind::Tool => vec![
                File::new(
                    format!("{dir}/{slug}.ts"),
                    renderer.render("tool/tool.ts", &ctx)?,
                ),
                File::new(
                    format!("{dir}/index.ts"),
                    renderer.render("tool/index.ts", &ctx)?,
                ),
            ],
            ComponentKind::Service => vec![
                File::new(
                    format!("{dir}/{slug}.ts"),
                    renderer.render("service/service.ts", &ctx)?,
                ),
                File::new(
                    format!("{dir}/index.ts"),
                    renderer.render("service/index.ts", &ctx)?,
                ),
            ],
            ComponentKind::Prompt => vec![
                File::new(
                    format!("{dir}/{slug}Prompt.ts"),
                    renderer.render("prompt/prompt.ts", &ctx)?,
                ),
                File::new(
                    format!("{dir}/index.ts"),
                    renderer.render("prompt/index.ts", &ctx)?,
                ),
                File::new(
                    format!("{dir}/README.md"),
                    renderer.render("prompt/README.md", &ctx)?,
                ),
                File::new(
                    format!("{}/README.md", ProjectLayout::PROMPTS),
                    renderer.render("prompt/prompts-README.md", &ctx)?,
                )
                .if_missing(),
            ],
        };
        Ok(files)
    }
}

/// A file written (or kept) by an `add` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Everything an `add` command did to the project.
#[derive(Debug, Default)]
pub struct ComponentReport {
    pub files: Vec<FileChange>,
    pub updates: Vec<TargetUpdate>,
}

fn write_all(root: &Path, files: &[File], report: &mut ComponentReport) -> Result<()> {
    for file in files {
        let result = file.write(root)?;
        report.files.push(FileChange {
            path: file.path().to_path_buf(),
            result,
        });
    }
    Ok(())
}

/// Write a component's files and register it in every shared file it needs.
///
/// The project root must already have passed validation. Each shared file is
/// updated independently; a handler whose dispatch cannot be found is
/// reported in the update list while the other updates still happen.
pub fn add_component(
    root: &Path,
    component: &Component,
    renderer: &Renderer,
) -> Result<ComponentReport> {
    let mut report = ComponentReport::default();
    write_all(root, &component.files(renderer)?, &mut report)?;

    for &target in component.kind.targets() {
        report
            .updates
            .push(register_in_project(root, target, &component.names)?);
    }

    info!(kind = %component.kind, name = %component.names.raw, "component added");
    Ok(report)
}

/// Write the authentication module.
pub fn add_auth(root: &Path, renderer: &Renderer) -> Result<ComponentReport> {
    let mut report = ComponentReport::default();
    write_all(root, &auth_files(renderer)?, &mut report)?;
    info!(schemes = ?AUTH_SCHEMES.map(|scheme| scheme.name), "authentication added");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(kind: ComponentKind, raw: &str) -> Component {
        let name = ComponentName::parse(kind.as_str(), raw).unwrap();
        Component::new(kind, &name, None)
    }

    fn paths(files: &[File]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.path().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_default_description() {
        assert_eq!(
            component(ComponentKind::Tool, "get-forecast").description,
            "GetForecast tool"
        );
        let name = ComponentName::parse("service", "cache").unwrap();
        let blank = Component::new(ComponentKind::Service, &name, Some("  ".to_string()));
        assert_eq!(blank.description, "Cache service");
    }

    #[test]
    fn test_tool_files() {
        let renderer = Renderer::new();
        let files = component(ComponentKind::Tool, "get-forecast")
            .files(&renderer)
            .unwrap();
        assert_eq!(
            paths(&files),
            [
                "src/tools/get-forecast/get-forecast.ts",
                "src/tools/get-forecast/index.ts"
            ]
        );
        assert!(files[0].content().contains("export async function handleGetForecast("));
        assert!(files[0].content().contains("name: 'get-forecast',"));
        assert!(
            files[1]
                .content()
                .contains("export const getForecastTools: Tool[] = [getForecastTool];")
        );
        assert!(
            files[1]
                .content()
                .contains("export { handleGetForecast } from './get-forecast.js';")
        );
    }

    #[test]
    fn test_quoted_description_stays_a_valid_string() {
        let name = ComponentName::parse("tool", "weather").unwrap();
        let tool = Component::new(
            ComponentKind::Tool,
            &name,
            Some("Get the user's `forecast` for ${city} */".to_string()),
        );
        let files = tool.files(&Renderer::new()).unwrap();
        let source = files[0].content();

        assert!(source.contains(
            r"  description: 'Get the user\'s \`forecast\` for \${city} */',"
        ));
        assert!(source.contains(r" * Get the user's `forecast` for ${city} *\/"));
        assert!(!source.contains("user's `forecast` for ${city} */\n */"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(ts_string_content(r"a\b"), r"a\\b");
        assert_eq!(ts_string_content("two\nlines"), r"two\nlines");
        assert_eq!(ts_string_content("cost: $5"), "cost: $5");
        assert_eq!(doc_comment_text("a\nb"), "a\n * b");
    }

    #[test]
    fn test_prompt_description_in_template_literal() {
        let name = ComponentName::parse("prompt", "review").unwrap();
        let prompt = Component::new(
            ComponentKind::Prompt,
            &name,
            Some("Review the `diff`".to_string()),
        );
        let files = prompt.files(&Renderer::new()).unwrap();

        assert!(files[0].content().contains(r"text: `Review the \`diff\`\n\nTopic:"));
        assert!(files[2].content().contains("Review the `diff`"));
    }

    #[test]
    fn test_service_files() {
        let renderer = Renderer::new();
        let files = component(ComponentKind::Service, "weather-api")
            .files(&renderer)
            .unwrap();
        assert_eq!(
            paths(&files),
            [
                "src/services/weather-api/weather-api.ts",
                "src/services/weather-api/index.ts"
            ]
        );
        assert!(files[0].content().contains("export class WeatherApiService {"));
        assert!(files[0].content().contains("WeatherApi service"));
    }

    #[test]
    fn test_prompt_files() {
        let renderer = Renderer::new();
        let files = component(ComponentKind::Prompt, "code-review")
            .files(&renderer)
            .unwrap();
        assert_eq!(
            paths(&files),
            [
                "src/prompts/code-review/code-reviewPrompt.ts",
                "src/prompts/code-review/index.ts",
                "src/prompts/code-review/README.md",
                "src/prompts/README.md"
            ]
        );
        assert!(
            files[1]
                .content()
                .contains("export const codeReviewPromptMcp = codeReviewPrompt;")
        );
        assert!(
            files[1]
                .content()
                .contains("from './code-reviewPrompt.js';")
        );
    }
}
