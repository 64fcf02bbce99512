//! Registration into index barrels.

use std::sync::LazyLock;

use regex::Regex;

use super::{
    lines::{LineKind, append_block, contains_fragment, insert_after_last, prepend_line},
    target::{CollectionEntry, RegistrationEntry, RegistrationTarget},
};

/// `export const <name>[: Type] = [` at the start of a line.
static COLLECTION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*export\s+const\s+(\w+)\b[^=\n]*=\s*\[").expect("valid regex")
});

/// Apply every fragment of `entry` to an existing barrel.
///
/// Import, export and collection insertions are independent: each one is
/// skipped when its exact text already occurs in the file.
pub fn patch(source: &str, entry: &RegistrationEntry) -> String {
    let mut text = source.to_string();
    if let Some(import) = &entry.import {
        text = add_import(&text, import);
    }
    if let Some(export) = &entry.export {
        text = add_export(&text, export);
    }
    if let Some(collection) = &entry.collection {
        text = add_collection_entry(&text, collection);
    }
    text
}

/// Insert an import after the last import line, or at the very top.
pub fn add_import(source: &str, import: &str) -> String {
    if contains_fragment(source, import) {
        return source.to_string();
    }
    insert_after_last(source, LineKind::Import, import)
        .unwrap_or_else(|| prepend_line(source, import))
}

/// Insert a re-export after the last `export * from` line, or at the end.
pub fn add_export(source: &str, export: &str) -> String {
    if contains_fragment(source, export) {
        return source.to_string();
    }
    insert_after_last(source, LineKind::ExportStar, export)
        .unwrap_or_else(|| append_block(source, &format!("{export}\n")))
}

/// Insert an entry right after the collection's opening bracket, or append
/// a declaration holding only this entry.
pub fn add_collection_entry(source: &str, collection: &CollectionEntry) -> String {
    if contains_fragment(source, &collection.item) {
        return source.to_string();
    }
    let Some(open) = find_collection_open(source, collection.name) else {
        return append_block(source, &format!("\n{}", collection.declaration()));
    };

    let rest = &source[open..];
    let mut out = String::with_capacity(source.len() + collection.item.len() + 4);
    out.push_str(&source[..open]);
    out.push_str("\n  ");
    out.push_str(&collection.item);
    if rest.starts_with(']') {
        out.push('\n');
    }
    out.push_str(rest);
    out
}

/// Byte offset just past the `[` opening the named collection.
fn find_collection_open(source: &str, name: &str) -> Option<usize> {
    COLLECTION_DECL
        .captures_iter(source)
        .find(|caps| &caps[1] == name)
        .and_then(|caps| caps.get(0))
        .map(|m| m.end())
}

/// Canonical content of a barrel authored for its first component.
pub fn skeleton(target: RegistrationTarget, entry: &RegistrationEntry) -> String {
    let mut out = String::from(header(target));
    if let Some(import) = &entry.import {
        out.push_str(import);
        out.push('\n');
    }
    if let Some(export) = &entry.export {
        if entry.import.is_some() {
            out.push('\n');
        }
        out.push_str(export);
        out.push('\n');
    }
    if let Some(collection) = &entry.collection {
        out.push('\n');
        out.push_str(&collection.declaration());
    }
    if target == RegistrationTarget::PromptIndex {
        out.push_str(PROMPT_LOOKUP);
    }
    out
}

fn header(target: RegistrationTarget) -> &'static str {
    match target {
        RegistrationTarget::ToolIndex => {
            "/**\n * Tools exports and definitions\n * This file re-exports all tools and handlers from the modular structure\n */\n"
        }
        RegistrationTarget::ServiceIndex => {
            "/**\n * Services exports\n * This file re-exports all services from the modular structure\n */\n"
        }
        RegistrationTarget::PromptIndex => {
            "/**\n * MCP Prompts Index\n * This file collects and exports all MCP-compatible prompts\n */\n"
        }
        RegistrationTarget::ToolHandler => "",
    }
}

const PROMPT_LOOKUP: &str = r#"
/**
 * Get all available MCP prompts
 */
export function getAllMcpPrompts() {
  return serverPrompts;
}

/**
 * Get a specific MCP prompt by name
 */
export function getMcpPrompt(name: string) {
  return serverPrompts.find((prompt) => prompt.name === name);
}
"#;
