//! Interactive questions for values left off the command line.

use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result};
use mcp_maker_core::is_valid_name;

/// Ask for the name of a new `kind` ("project", "tool", ...).
///
/// Only names made of lowercase letters, numbers and hyphens are accepted.
pub fn name(kind: &str, noun: &str) -> Result<String> {
    let rule = invalid_name_message(kind);
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("What is the name of your {noun}?"))
        .validate_with(|value: &String| -> std::result::Result<(), &str> {
            if is_valid_name(value) {
                Ok(())
            } else {
                Err(rule.as_str())
            }
        })
        .interact_text()
        .wrap_err(format!("{} creation cancelled", capitalized(kind)))
}

/// Ask for a description, offering `default` when the answer is left empty.
pub fn description(kind: &str, default: String) -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Enter a description for your {kind}"))
        .default(default)
        .interact_text()
        .wrap_err(format!("{} creation cancelled", capitalized(kind)))
}

fn invalid_name_message(kind: &str) -> String {
    format!(
        "{} name can only contain lowercase letters, numbers, and hyphens",
        capitalized(kind)
    )
}

fn capitalized(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
