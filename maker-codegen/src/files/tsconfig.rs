//! tsconfig.json generator for MCP server projects.

use std::path::{Path, PathBuf};

use mcp_maker_core::{GeneratedFile, Result};

/// The tsconfig.json compiler configuration.
pub struct TsConfig;

impl GeneratedFile for TsConfig {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("tsconfig.json")
    }

    fn render(&self) -> Result<String> {
        Ok(r#"{
  "compilerOptions": {
    "target": "ESNext",
    "module": "ESNext",
    "moduleResolution": "node",
    "outDir": "./dist",
    "rootDir": "./src",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "forceConsistentCasingInFileNames": true
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules"]
}
"#
        .to_string())
    }
}
