//! Behaviour of the registrar against barrel and handler sources.

use mcp_maker_codegen::{Registration, RegistrationTarget, register_component};
use mcp_maker_core::{Error, NameVariants};

fn names(raw: &str) -> NameVariants {
    NameVariants::from_raw(raw)
}

/// Register and return the resulting text, whatever the outcome.
fn apply(target: RegistrationTarget, text: Option<&str>, raw: &str) -> String {
    match register_component(target, text, &names(raw)).unwrap() {
        Registration::Created(text) | Registration::Patched(text) => text,
        Registration::Unchanged => text.unwrap_or_default().to_string(),
        Registration::Skipped(reason) => panic!("skipped: {reason}"),
    }
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

const HEADER_ONLY: &str = "/**\n * Tools exports and definitions\n */\n";

const HANDLER: &str = r#"import { Server } from '@modelcontextprotocol/sdk/server/index.js';
import { handleWeather } from '../tools/weather/index.js';

export async function handleToolCall(name: string, args: Record<string, unknown> | undefined) {
  switch (name) {
    case "weather":
      return await handleWeather(args);
    default:
      throw new Error(`Unknown tool: ${name}`);
  }
}
"#;

#[test]
fn add_tool_to_header_only_barrel() {
    let text = apply(RegistrationTarget::ToolIndex, Some(HEADER_ONLY), "weather");

    assert!(text.contains("import { weatherTools } from './weather/index.js';"));
    assert!(text.contains("export * from './weather/index.js';"));
    assert!(text.contains("export const serverTools = [\n  ...weatherTools,\n];"));
    assert!(text.contains(" * Tools exports and definitions\n"));
}

#[test]
fn add_second_tool_keeps_first() {
    let first = apply(RegistrationTarget::ToolIndex, Some(HEADER_ONLY), "weather");
    let second = apply(RegistrationTarget::ToolIndex, Some(&first), "forecast");

    assert!(second.contains("...weatherTools,"));
    assert!(second.contains("...forecastTools,"));
    assert!(second.contains(
        "export const serverTools = [\n  ...forecastTools,\n  ...weatherTools,\n];"
    ));
    assert!(second.contains(
        "import { weatherTools } from './weather/index.js';\nimport { forecastTools } from './forecast/index.js';\n"
    ));
    assert!(second.contains(
        "export * from './weather/index.js';\nexport * from './forecast/index.js';\n"
    ));
}

#[test]
fn registering_twice_is_idempotent() {
    let starts = [
        None,
        Some(HEADER_ONLY),
        Some("import { Tool } from '@modelcontextprotocol/sdk/types.js';\n\nexport * from './utils.js';\n\nexport const serverTools: Tool[] = [\n];\n"),
    ];
    for target in [
        RegistrationTarget::ToolIndex,
        RegistrationTarget::ServiceIndex,
        RegistrationTarget::PromptIndex,
    ] {
        for start in starts {
            let once = apply(target, start, "weather");
            let twice = apply(target, Some(&once), "weather");
            assert_eq!(once, twice, "{target} from {start:?}");
            assert_eq!(
                register_component(target, Some(&once), &names("weather")).unwrap(),
                Registration::Unchanged
            );
        }
    }

    let once = apply(RegistrationTarget::ToolHandler, Some(HANDLER), "forecast");
    let twice = apply(RegistrationTarget::ToolHandler, Some(&once), "forecast");
    assert_eq!(once, twice);
}

#[test]
fn fresh_tool_index_has_exactly_one_of_each() {
    let text = apply(RegistrationTarget::ToolIndex, None, "weather");

    assert_eq!(count(&text, "import "), 1);
    assert_eq!(count(&text, "export * from "), 1);
    assert_eq!(count(&text, "export const serverTools = ["), 1);
    assert_eq!(count(&text, "..."), 1);
}

#[test]
fn fresh_service_index_only_exports() {
    let text = apply(RegistrationTarget::ServiceIndex, None, "weather");

    assert_eq!(count(&text, "import "), 0);
    assert_eq!(count(&text, "export * from './weather/index.js';"), 1);
}

#[test]
fn service_export_appended_after_last_export() {
    let start = "/**\n * Services exports\n */\nexport * from './cache/index.js';\n\n// trailing note\n";
    let text = apply(RegistrationTarget::ServiceIndex, Some(start), "weather");

    assert_eq!(
        text,
        "/**\n * Services exports\n */\nexport * from './cache/index.js';\nexport * from './weather/index.js';\n\n// trailing note\n"
    );
}

#[test]
fn prompt_registration_fills_collection() {
    let start = "import { McpPrompt } from './types.js';\n\nexport const serverPrompts: McpPrompt[] = [\n];\n";
    let text = apply(RegistrationTarget::PromptIndex, Some(start), "code-review");

    assert_eq!(
        text,
        "import { McpPrompt } from './types.js';\nimport { codeReviewPromptMcp } from './code-review/index.js';\n\nexport const serverPrompts: McpPrompt[] = [\n  codeReviewPromptMcp,\n];\n"
    );
}

#[test]
fn dispatch_case_goes_before_default() {
    let text = apply(RegistrationTarget::ToolHandler, Some(HANDLER), "forecast");

    let weather = text.find("case \"weather\":").unwrap();
    let forecast = text.find("case \"forecast\":").unwrap();
    let default = text.find("default:").unwrap();
    assert!(weather < forecast && forecast < default);
    assert!(text.contains(
        "    case \"weather\":\n      return await handleWeather(args);\n"
    ));
    assert!(text.contains(
        "    case \"forecast\":\n      return await handleForecast(args);\n    default:\n"
    ));
}

#[test]
fn order_is_preserved_across_components() {
    let a = apply(RegistrationTarget::ToolHandler, Some(HANDLER), "alpha");
    let b = apply(RegistrationTarget::ToolHandler, Some(&a), "beta");

    let alpha_import = b.find("import { handleAlpha }").unwrap();
    let beta_import = b.find("import { handleBeta }").unwrap();
    assert!(alpha_import < beta_import);

    let alpha_case = b.find("case \"alpha\":").unwrap();
    let beta_case = b.find("case \"beta\":").unwrap();
    assert!(alpha_case < beta_case);
    assert!(b.contains("case \"alpha\":\n      return await handleAlpha(args);\n"));
}

#[test]
fn missing_dispatch_leaves_handler_untouched() {
    let handler = "import { Server } from '@modelcontextprotocol/sdk/server/index.js';\n\nexport const handlers = {};\n";
    let err = register_component(
        RegistrationTarget::ToolHandler,
        Some(handler),
        &names("forecast"),
    )
    .unwrap_err();

    assert!(matches!(*err, Error::NotFound { .. }));
    assert!(!err.is_fatal());
}

#[test]
fn missing_handler_is_not_authored() {
    assert!(matches!(
        register_component(RegistrationTarget::ToolHandler, None, &names("weather")).unwrap(),
        Registration::Skipped(_)
    ));
}

#[test]
fn entry_followed_by_comment_counts_as_registered() {
    let start = "import { weatherTools } from './weather/index.js';\n\nexport * from './weather/index.js';\n\nexport const serverTools: Tool[] = [\n  ...weatherTools, // current conditions\n];\n";

    assert_eq!(
        register_component(RegistrationTarget::ToolIndex, Some(start), &names("weather")).unwrap(),
        Registration::Unchanged
    );
}

#[test]
fn similar_names_are_registered_separately() {
    let first = apply(RegistrationTarget::PromptIndex, None, "xweather");
    let second = apply(RegistrationTarget::PromptIndex, Some(&first), "weather");

    assert_eq!(count(&second, "  weatherPromptMcp,\n"), 1);
    assert_eq!(count(&second, "  xweatherPromptMcp,\n"), 1);
}

#[test]
fn cosmetic_differences_are_not_detected() {
    let start = "import {weatherTools} from './weather/index.js';\n";
    let text = apply(RegistrationTarget::ToolIndex, Some(start), "weather");

    assert_eq!(count(&text, "weatherTools } from"), 1);
    assert_eq!(count(&text, "{weatherTools} from"), 1);
}
