//! External tools run after a project is scaffolded.

use std::{path::Path, process::Command};

use tracing::debug;

/// Why an external step did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepFailure {
    /// The program could not be started (e.g. not on PATH)
    Spawn(String),
    /// The program ran and exited unsuccessfully
    Exit(Option<i32>),
}

impl StepFailure {
    pub fn describe(&self) -> String {
        match self {
            StepFailure::Spawn(message) => format!("could not be started: {message}"),
            StepFailure::Exit(Some(code)) => format!("exited with status {code}"),
            StepFailure::Exit(None) => "was terminated by a signal".to_string(),
        }
    }
}

/// Runs a program to completion in a directory.
pub trait Toolchain {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<(), StepFailure>;
}

/// Runs programs found on PATH, inheriting the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> Result<(), StepFailure> {
        debug!(program, ?args, dir = %dir.display(), "running");
        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .status()
            .map_err(|e| StepFailure::Spawn(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(StepFailure::Exit(status.code()))
        }
    }
}

/// A post-create step and the advice shown when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub program: &'static str,
    pub args: &'static [&'static str],
    pub hint: &'static str,
}

impl Step {
    pub const GIT_INIT: Step = Step {
        program: "git",
        args: &["init"],
        hint: "You may want to initialize the git repository manually.",
    };
    pub const NPM_INSTALL: Step = Step {
        program: "npm",
        args: &["install"],
        hint: "You may want to run npm install manually.",
    };
    pub const BUILD: Step = Step {
        program: "npx",
        args: &["tsc"],
        hint: "You may want to run npm run build manually.",
    };

    pub fn command_line(&self) -> String {
        let mut line = self.program.to_string();
        for arg in self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    pub fn run(&self, toolchain: &dyn Toolchain, dir: &Path) -> Result<(), StepFailure> {
        toolchain.run(dir, self.program, self.args)
    }
}
