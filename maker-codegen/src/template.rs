//! Template rendering backed by Handlebars.
//!
//! Templates are plain text with `{{placeholder}}`, `{{#if flag}}` and
//! `{{#each items}}` blocks. Unknown placeholders render as empty text and
//! nothing is HTML-escaped, since the output is source code.

use handlebars::Handlebars;
use mcp_maker_core::{Error, Result};
use serde::Serialize;

/// Lookup of template text by name.
pub trait TemplateSource {
    fn lookup(&self, name: &str) -> Option<&str>;
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

macro_rules! builtin_templates {
    ($($name:literal),* $(,)?) => {
        const BUILTIN: &[(&str, &str)] = &[
            $(($name, include_str!(concat!("../templates/", $name, ".hbs")))),*
        ];
    };
}

builtin_templates![
    "project/index.ts",
    "project/server/toolHandler.ts",
    "project/server/promptHandler.ts",
    "project/server/resourceHandler.ts",
    "project/tools/index.ts",
    "project/tools/utils.ts",
    "project/services/index.ts",
    "project/prompts/index.ts",
    "project/prompts/types.ts",
    "project/resources/index.ts",
    "project/utils/logger.ts",
    "project/utils/serverUtils.ts",
    "project/config/index.ts",
    "project/README.md",
    "tool/tool.ts",
    "tool/index.ts",
    "service/service.ts",
    "service/index.ts",
    "prompt/prompt.ts",
    "prompt/index.ts",
    "prompt/README.md",
    "prompt/prompts-README.md",
    "auth/interfaces/IAuthProvider.ts",
    "auth/interfaces/IBasicAuthProvider.ts",
    "auth/interfaces/ITokenAuthProvider.ts",
    "auth/interfaces/IOAuthProvider.ts",
    "auth/methods/BasicAuthProvider.ts",
    "auth/methods/TokenAuthProvider.ts",
    "auth/methods/OAuthProvider.ts",
    "auth/AuthFactory.ts",
    "auth/AuthService.ts",
    "auth/index.ts",
];

impl BuiltinTemplates {
    pub fn names() -> impl Iterator<Item = &'static str> {
        BUILTIN.iter().map(|(name, _)| *name)
    }
}

impl TemplateSource for BuiltinTemplates {
    fn lookup(&self, name: &str) -> Option<&str> {
        BUILTIN
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, text)| *text)
    }
}

/// Renders named templates from a [`TemplateSource`].
#[derive(Debug)]
pub struct Renderer<S = BuiltinTemplates> {
    handlebars: Handlebars<'static>,
    source: S,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_source(BuiltinTemplates)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TemplateSource> Renderer<S> {
    pub fn with_source(source: S) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_escape_fn(handlebars::no_escape);
        Self {
            handlebars: registry,
            source,
        }
    }

    /// Render the template registered under `name`.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let text = self
            .source
            .lookup(name)
            .ok_or_else(|| Error::template(name, "no such template"))?;
        self.render_named(name, text, data)
    }

    /// Render ad-hoc template text.
    pub fn render_str<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.render_named("<inline>", template, data)
    }

    fn render_named<T: Serialize>(&self, name: &str, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(|e| Error::template(name, e.to_string()))
    }
}
