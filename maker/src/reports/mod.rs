//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod add;
mod create;
mod help;
mod output;

pub use add::AddReport;
pub use create::CreateReport;
pub use help::HelpPage;
#[cfg(test)]
pub use output::RecordedOutput;
pub use output::{Output, Report, TerminalOutput};
