//! Manual-style help pages.

use super::output::{Output, Report};

/// A help page; empty sections are left out.
#[derive(Debug)]
pub struct HelpPage {
    /// Command path and one-line summary
    pub name: &'static str,
    pub synopsis: &'static [&'static str],
    pub description: &'static str,
    pub arguments: &'static [(&'static str, &'static str)],
    pub options: &'static [(&'static str, &'static str)],
    pub commands: &'static [(&'static str, &'static str)],
    pub examples: &'static [(&'static str, &'static str)],
}

impl HelpPage {
    fn definitions(out: &mut dyn Output, heading: &str, entries: &[(&str, &str)]) {
        if entries.is_empty() {
            return;
        }
        out.section(heading);
        for (term, description) in entries {
            out.definition(term, description);
        }
        out.newline();
    }
}

impl Report for HelpPage {
    fn render(&self, out: &mut dyn Output) {
        out.section("NAME");
        out.preformatted(&format!("  {}", self.name));
        out.newline();

        out.section("SYNOPSIS");
        for usage in self.synopsis {
            out.preformatted(&format!("  {}", usage));
        }
        out.newline();

        if !self.description.is_empty() {
            out.section("DESCRIPTION");
            for line in self.description.lines() {
                if line.is_empty() {
                    out.newline();
                } else {
                    out.preformatted(&format!("  {}", line));
                }
            }
            out.newline();
        }

        Self::definitions(out, "ARGUMENTS", self.arguments);
        Self::definitions(out, "OPTIONS", self.options);
        Self::definitions(out, "COMMANDS", self.commands);
        Self::definitions(out, "EXAMPLES", self.examples);
    }
}
