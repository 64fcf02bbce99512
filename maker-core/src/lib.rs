//! Core types and utilities for the mcp-maker project generator.
//!
//! This crate provides name handling, error types, file-writing primitives
//! and the project layout shared by the code generator and the CLI.

#![allow(unused_assignments)] // Fields used by miette derive macros

mod error;
mod file;
mod naming;
mod project;

pub use error::{Error, Result};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult, read_optional, write_file};
// Names
pub use naming::{
    ComponentName, NameVariants, is_valid_name, to_camel_case, to_pascal_case, to_slug,
};
pub use project::{ProjectLayout, validate_project};
