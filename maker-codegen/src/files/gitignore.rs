use std::path::{Path, PathBuf};

use mcp_maker_core::{GeneratedFile, Result};

/// The .gitignore file for Node.js projects.
pub struct GitIgnore;

impl GeneratedFile for GitIgnore {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(".gitignore")
    }

    fn render(&self) -> Result<String> {
        Ok("node_modules\ndist\n.env\nlogs\n.DS_Store\n.idea\n.vscode\n".to_string())
    }
}
