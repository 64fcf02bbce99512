//! Static project files written by `create server`.

mod gitignore;
mod package_json;
mod tsconfig;

pub use gitignore::GitIgnore;
pub use package_json::{PackageJson, Scripts};
pub use tsconfig::TsConfig;
