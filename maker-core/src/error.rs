use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for mcp-maker operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid {kind} name '{name}'")]
    #[diagnostic(
        code(mcp_maker::invalid_name),
        help("{kind} names can only contain lowercase letters, numbers, and hyphens")
    )]
    InvalidName { kind: String, name: String },

    #[error("not in an MCP server project: no {marker} found in '{root}'")]
    #[diagnostic(
        code(mcp_maker::not_a_project),
        help("run this command from the root of a project created with 'mcp-maker create server'")
    )]
    NotAProject { root: PathBuf, marker: String },

    #[error("'{path}' already exists")]
    #[diagnostic(
        code(mcp_maker::already_exists),
        help("choose a different project name or remove the existing directory")
    )]
    AlreadyExists { path: PathBuf },

    #[error("{what} not found in '{path}'")]
    #[diagnostic(
        code(mcp_maker::not_found),
        help("register the component by hand, the file was left unchanged")
    )]
    NotFound { what: String, path: PathBuf },

    #[error("failed to {action} '{path}'")]
    #[diagnostic(code(mcp_maker::io_error))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render template '{name}': {message}")]
    #[diagnostic(code(mcp_maker::template_error))]
    Template { name: String, message: String },

    #[error("'{command}' {outcome}")]
    #[diagnostic(code(mcp_maker::subprocess), help("{hint}"))]
    Subprocess {
        command: String,
        outcome: String,
        hint: String,
    },
}

impl Error {
    /// Create an invalid name error
    pub fn invalid_name(kind: impl Into<String>, name: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidName {
            kind: kind.into(),
            name: name.into(),
        })
    }

    /// Create a missing project marker error
    pub fn not_a_project(root: impl Into<PathBuf>, marker: impl Into<String>) -> Box<Self> {
        Box::new(Error::NotAProject {
            root: root.into(),
            marker: marker.into(),
        })
    }

    /// Create an already exists error
    pub fn already_exists(path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::AlreadyExists { path: path.into() })
    }

    /// Create a not found error
    pub fn not_found(what: impl Into<String>, path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::NotFound {
            what: what.into(),
            path: path.into(),
        })
    }

    /// Create an I/O error for the given action and path
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Box<Self> {
        Box::new(Error::Io {
            action,
            path: path.into(),
            source,
        })
    }

    /// Create a template error
    pub fn template(name: impl Into<String>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Template {
            name: name.into(),
            message: message.into(),
        })
    }

    /// Create a subprocess warning
    pub fn subprocess(
        command: impl Into<String>,
        outcome: impl Into<String>,
        hint: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Subprocess {
            command: command.into(),
            outcome: outcome.into(),
            hint: hint.into(),
        })
    }

    /// Whether this error aborts the current command.
    ///
    /// Missing dispatch constructs and failed toolchain steps are reported
    /// as notes while the rest of the command carries on.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::NotFound { .. } | Error::Subprocess { .. })
    }
}
