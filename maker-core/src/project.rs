//! Layout of a generated MCP server project and the check that a directory
//! is one.

use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Fixed paths inside a generated project, relative to its root.
pub struct ProjectLayout;

impl ProjectLayout {
    pub const MANIFEST: &'static str = "package.json";
    pub const SRC: &'static str = "src";
    pub const SERVER: &'static str = "src/server";
    pub const TOOLS: &'static str = "src/tools";
    pub const SERVICES: &'static str = "src/services";
    pub const PROMPTS: &'static str = "src/prompts";
    pub const RESOURCES: &'static str = "src/resources";
    pub const UTILS: &'static str = "src/utils";
    pub const CONFIG: &'static str = "src/config";
    pub const AUTH: &'static str = "src/auth";

    pub const TOOL_INDEX: &'static str = "src/tools/index.ts";
    pub const SERVICE_INDEX: &'static str = "src/services/index.ts";
    pub const PROMPT_INDEX: &'static str = "src/prompts/index.ts";
    pub const TOOL_HANDLER: &'static str = "src/server/toolHandler.ts";

    /// Every source directory a freshly created project contains.
    pub const SOURCE_DIRS: [&'static str; 7] = [
        Self::SERVER,
        Self::TOOLS,
        Self::SERVICES,
        Self::PROMPTS,
        Self::RESOURCES,
        Self::UTILS,
        Self::CONFIG,
    ];
}

/// A path whose presence marks a directory as a project root.
struct Marker {
    path: &'static str,
    is_dir: bool,
}

/// Checked in this order; the first missing one is reported.
const MARKERS: [Marker; 5] = [
    Marker {
        path: ProjectLayout::MANIFEST,
        is_dir: false,
    },
    Marker {
        path: ProjectLayout::SRC,
        is_dir: true,
    },
    Marker {
        path: ProjectLayout::SERVER,
        is_dir: true,
    },
    Marker {
        path: ProjectLayout::TOOLS,
        is_dir: true,
    },
    Marker {
        path: ProjectLayout::SERVICES,
        is_dir: true,
    },
];

/// Check that `root` is the root of a generated MCP server project.
///
/// Has no side effects. Fails with [`Error::NotAProject`] naming the first
/// missing marker.
pub fn validate_project(root: &Path) -> Result<()> {
    for marker in &MARKERS {
        let path = root.join(marker.path);
        let present = if marker.is_dir {
            path.is_dir()
        } else {
            path.is_file()
        };
        if !present {
            let described = if marker.is_dir {
                format!("{} directory", marker.path)
            } else {
                marker.path.to_string()
            };
            return Err(Error::not_a_project(root, described));
        }
    }
    debug!(root = %root.display(), "project layout validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn missing_marker(root: &Path) -> String {
        match *validate_project(root).unwrap_err() {
            Error::NotAProject { marker, .. } => marker,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        for dir in ["src/server", "src/tools", "src/services"] {
            fs::create_dir_all(temp.path().join(dir)).unwrap();
        }

        assert!(validate_project(temp.path()).is_ok());
    }

    #[test]
    fn test_markers_checked_in_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        assert_eq!(missing_marker(root), "package.json");

        fs::write(root.join("package.json"), "{}").unwrap();
        assert_eq!(missing_marker(root), "src directory");

        fs::create_dir(root.join("src")).unwrap();
        assert_eq!(missing_marker(root), "src/server directory");

        fs::create_dir(root.join("src/server")).unwrap();
        assert_eq!(missing_marker(root), "src/tools directory");

        fs::create_dir(root.join("src/tools")).unwrap();
        assert_eq!(missing_marker(root), "src/services directory");
    }

    #[test]
    fn test_manifest_must_be_a_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("package.json")).unwrap();

        assert_eq!(missing_marker(temp.path()), "package.json");
    }
}
