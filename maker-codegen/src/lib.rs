//! Code generation for mcp-maker.
//!
//! This crate renders project and component templates, writes new MCP
//! server projects, and registers added components in the shared barrel and
//! handler files of an existing project.

pub mod components;
pub mod files;
pub mod register;
pub mod scaffold;
pub mod template;
pub mod toolchain;

pub use components::{Component, ComponentKind, ComponentReport, add_auth, add_component};
pub use register::{Registration, RegistrationTarget, register_component};
pub use scaffold::{CreateOptions, ScaffoldReport, create_project};
pub use template::{BuiltinTemplates, Renderer, TemplateSource};
pub use toolchain::{SystemToolchain, Toolchain};
