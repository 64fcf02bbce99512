//! Registration into the tool handler's `switch (name)` dispatch.

use std::sync::LazyLock;

use regex::Regex;

use super::{
    barrel::add_import,
    lines::{SourceLines, contains_fragment},
    target::{DispatchCase, RegistrationEntry},
};

static SWITCH_ON_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"switch\s*\(\s*name\s*\)\s*\{").expect("valid regex"));
static DEFAULT_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bdefault\s*:").expect("valid regex"));

/// Why a dispatch could not be patched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDispatch {
    /// No `switch (name) {` in the file
    Switch,
    /// A switch without a `default:` clause after it
    DefaultClause,
}

impl MissingDispatch {
    pub fn describe(self) -> &'static str {
        match self {
            MissingDispatch::Switch => "dispatch construct `switch (name)`",
            MissingDispatch::DefaultClause => "`default:` clause of `switch (name)`",
        }
    }
}

/// Byte offset of the `default:` clause belonging to the name switch.
fn find_default_clause(source: &str) -> Result<usize, MissingDispatch> {
    let switch = SWITCH_ON_NAME.find(source).ok_or(MissingDispatch::Switch)?;
    DEFAULT_CLAUSE
        .find(&source[switch.end()..])
        .map(|m| switch.end() + m.start())
        .ok_or(MissingDispatch::DefaultClause)
}

/// Register a tool in an existing handler file.
///
/// The file is returned untouched (no import either) when the dispatch
/// cannot be located, so it is never left half-registered.
pub fn patch(source: &str, entry: &RegistrationEntry) -> Result<String, MissingDispatch> {
    let mut text = source.to_string();
    if let Some(case) = &entry.case {
        // Validate before touching anything.
        find_default_clause(&text)?;
        if let Some(import) = &entry.import {
            text = add_import(&text, import);
        }
        text = add_case(&text, case)?;
    } else if let Some(import) = &entry.import {
        text = add_import(&text, import);
    }
    Ok(text)
}

/// Insert `case` immediately before the `default:` clause.
pub fn add_case(source: &str, case: &DispatchCase) -> Result<String, MissingDispatch> {
    if contains_fragment(source, &case.label) {
        return Ok(source.to_string());
    }
    let at = find_default_clause(source)?;
    let indent = SourceLines::parse(source).indent_at(at);
    Ok(format!(
        "{}{}\n{indent}  {}\n{indent}{}",
        &source[..at],
        case.label,
        case.body,
        &source[at..]
    ))
}

#[cfg(test)]
mod tests {
    use mcp_maker_core::NameVariants;

    use super::*;
    use crate::register::RegistrationTarget;

    const HANDLER: &str = r#"import { McpError, ErrorCode } from '@modelcontextprotocol/sdk/types.js';
import { handleWeather } from '../tools/weather/index.js';

export async function handleToolCall(name: string, args: Record<string, unknown> | undefined) {
  switch (name) {
    case "weather":
      return await handleWeather(args);
    default:
      throw new McpError(ErrorCode.MethodNotFound, `Unknown tool: ${name}`);
  }
}
"#;

    fn entry(raw: &str) -> RegistrationEntry {
        RegistrationTarget::ToolHandler.entry(&NameVariants::from_raw(raw))
    }

    #[test]
    fn test_case_inserted_before_default() {
        let out = patch(HANDLER, &entry("forecast")).unwrap();
        assert!(out.contains(
            "    case \"weather\":\n      return await handleWeather(args);\n    case \"forecast\":\n      return await handleForecast(args);\n    default:\n"
        ));
        assert!(out.contains(
            "import { handleWeather } from '../tools/weather/index.js';\nimport { handleForecast } from '../tools/forecast/index.js';\n"
        ));
    }

    #[test]
    fn test_existing_case_is_kept() {
        let out = patch(HANDLER, &entry("weather")).unwrap();
        assert_eq!(out, HANDLER);
    }

    #[test]
    fn test_case_on_one_line_with_body_is_kept() {
        let src = "switch (name) {\n    case \"weather\": return await handleWeather(args);\n    default:\n      break;\n}\n";
        let out = add_case(src, entry("weather").case.as_ref().unwrap()).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_missing_switch_leaves_file_untouched() {
        let src = "export function handle(name: string) {\n  return name;\n}\n";
        assert_eq!(
            patch(src, &entry("forecast")).unwrap_err(),
            MissingDispatch::Switch
        );
    }

    #[test]
    fn test_missing_default_clause() {
        let src = "switch (name) {\n  case \"a\":\n    break;\n}\n";
        assert_eq!(
            patch(src, &entry("forecast")).unwrap_err(),
            MissingDispatch::DefaultClause
        );
    }

    #[test]
    fn test_default_before_switch_is_ignored() {
        let src = "export default {};\nswitch (name) {\n  default:\n    break;\n}\n";
        let out = add_case(src, entry("x").case.as_ref().unwrap()).unwrap();
        assert!(out.starts_with("export default {};\nswitch (name) {\n  case \"x\":\n"));
    }
}
