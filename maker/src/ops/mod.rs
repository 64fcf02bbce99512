//! Core operations.
//!
//! This module runs the generators for each command and turns their results
//! into reports, separated from argument parsing and prompting.

pub mod add;
pub mod create;

pub use add::{add, add_auth};
pub use create::create;
