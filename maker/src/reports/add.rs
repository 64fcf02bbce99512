//! Add command report data structures.

use super::output::{Output, Report};

/// Report data from adding a component to a project.
#[derive(Debug, Default)]
pub struct AddReport {
    /// Success line, e.g. "Tool weather created successfully!"
    pub headline: String,
    /// Files written
    pub written: Vec<String>,
    /// Files left as they were because they already existed
    pub kept: Vec<String>,
    /// Shared files the component was registered in
    pub registered: Vec<String>,
    /// Shared files that already registered the component
    pub unchanged: Vec<String>,
    /// Registrations that must be done by hand
    pub manual: Vec<String>,
    pub next_steps: Vec<&'static str>,
}

impl Report for AddReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&self.headline);

        out.section("Files created");
        for path in &self.written {
            out.added_item(path);
        }
        for path in &self.kept {
            out.list_item(&format!("{} (kept existing)", path));
        }

        if !self.registered.is_empty() {
            out.section("Updated");
            for path in &self.registered {
                out.list_item(path);
            }
        }

        if !self.unchanged.is_empty() {
            out.section("Already registered");
            for path in &self.unchanged {
                out.list_item(path);
            }
        }

        for note in &self.manual {
            out.warning(note);
        }

        if !self.next_steps.is_empty() {
            out.newline();
            out.section("Next steps");
            for (i, step) in self.next_steps.iter().enumerate() {
                out.numbered_item(i + 1, step);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordedOutput;

    #[test]
    fn test_render_sections() {
        let report = AddReport {
            headline: "Prompt summarize created successfully!".to_string(),
            written: vec!["src/prompts/summarize/summarizePrompt.ts".to_string()],
            kept: vec!["src/prompts/README.md".to_string()],
            registered: vec!["src/prompts/index.ts".to_string()],
            ..AddReport::default()
        };
        let mut out = RecordedOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Prompt summarize created successfully!",
                "Files created:",
                "  + src/prompts/summarize/summarizePrompt.ts",
                "  - src/prompts/README.md (kept existing)",
                "Updated:",
                "  - src/prompts/index.ts",
            ]
        );
    }

    #[test]
    fn test_manual_edits_are_warnings() {
        let report = AddReport {
            headline: "Tool weather created successfully!".to_string(),
            manual: vec!["register weather by hand".to_string()],
            next_steps: vec!["Implement the tool"],
            ..AddReport::default()
        };
        let mut out = RecordedOutput::default();
        report.render(&mut out);

        assert!(out.lines.contains(&"warning: register weather by hand".to_string()));
        assert_eq!(out.lines.last().unwrap(), "  1. Implement the tool");
    }
}
