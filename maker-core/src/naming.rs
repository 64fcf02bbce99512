//! Identifier casing for component names.

use std::fmt;

use serde::Serialize;

use crate::{Error, Result};

/// Split a name on every run of non-alphanumeric characters.
fn segments(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to PascalCase (e.g., "hello-world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    segments(s).map(capitalize).collect()
}

/// Convert a string to camelCase (e.g., "hello-world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    let mut parts = segments(s);
    let Some(first) = parts.next() else {
        return String::new();
    };
    let mut result = first.to_lowercase();
    result.extend(parts.map(capitalize));
    result
}

/// Convert a string to a file slug (e.g., "Hello_World" -> "hello-world")
pub fn to_slug(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// A validated, user-supplied component or project name.
///
/// Only lowercase ASCII letters, digits and hyphens are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName(String);

impl ComponentName {
    /// Validate `raw` as a name for the given kind of component
    /// (`"tool"`, `"service"`, `"project"`, ...).
    pub fn parse(kind: &str, raw: &str) -> Result<Self> {
        if is_valid_name(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(Error::invalid_name(kind, raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check a raw name against `[a-z0-9-]+`.
pub fn is_valid_name(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Every casing of a component name needed by templates and the registrar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameVariants {
    /// The name exactly as the user typed it
    pub raw: String,
    /// PascalCase (types, classes, handler functions)
    pub pascal: String,
    /// camelCase (values and collection entries)
    pub camel: String,
    /// Directory and file name
    pub slug: String,
}

impl NameVariants {
    pub fn new(name: &ComponentName) -> Self {
        Self::from_raw(name.as_str())
    }

    /// Derive variants without validation.
    pub fn from_raw(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            pascal: to_pascal_case(raw),
            camel: to_camel_case(raw),
            slug: to_slug(raw),
        }
    }
}
