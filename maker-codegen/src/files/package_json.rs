//! package.json generator for MCP server projects.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use mcp_maker_core::{Error, GeneratedFile, ProjectLayout, Result};
use serde::Serialize;

const DEFAULT_VERSION: &str = "0.1.0";
const NODE_ENGINE: &str = ">=18.19.0";

/// The package.json manifest of a generated project.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(rename = "type")]
    pub module_type: &'static str,
    pub scripts: Scripts,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
    pub engines: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scripts {
    pub build: &'static str,
    pub watch: &'static str,
    pub start: &'static str,
}

impl PackageJson {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("{name} MCP server"),
            name,
            version: DEFAULT_VERSION.to_string(),
            module_type: "module",
            scripts: Scripts {
                build: "tsc",
                watch: "tsc --watch",
                start: "node dist/index.js",
            },
            dependencies: deps([
                ("@modelcontextprotocol/sdk", "^1.17.5"),
                ("pino", "^8.18.0"),
                ("pino-pretty", "^10.3.1"),
            ]),
            dev_dependencies: deps([("@types/node", "^20.11.24"), ("typescript", "^5.3.3")]),
            engines: deps([("node", NODE_ENGINE)]),
        }
    }

    /// Add the Express stack used by the HTTP transport.
    pub fn with_http(mut self, cors: bool) -> Self {
        self.dependencies
            .insert("express".to_string(), "^4.21.2".to_string());
        self.dev_dependencies
            .insert("@types/express".to_string(), "^4.17.21".to_string());
        if cors {
            self.dependencies
                .insert("cors".to_string(), "^2.8.5".to_string());
            self.dev_dependencies
                .insert("@types/cors".to_string(), "^2.8.17".to_string());
        }
        self
    }
}

fn deps<const N: usize>(pairs: [(&str, &str); N]) -> IndexMap<String, String> {
    pairs
        .into_iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(ProjectLayout::MANIFEST)
    }

    fn render(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::template(ProjectLayout::MANIFEST, e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}
