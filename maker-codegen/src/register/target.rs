use std::fmt;

use mcp_maker_core::{NameVariants, ProjectLayout};

/// A shared source file that components are registered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationTarget {
    ToolIndex,
    ServiceIndex,
    PromptIndex,
    ToolHandler,
}

impl RegistrationTarget {
    /// Path relative to the project root.
    pub fn path(self) -> &'static str {
        match self {
            RegistrationTarget::ToolIndex => ProjectLayout::TOOL_INDEX,
            RegistrationTarget::ServiceIndex => ProjectLayout::SERVICE_INDEX,
            RegistrationTarget::PromptIndex => ProjectLayout::PROMPT_INDEX,
            RegistrationTarget::ToolHandler => ProjectLayout::TOOL_HANDLER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationTarget::ToolIndex => "tool-index",
            RegistrationTarget::ServiceIndex => "service-index",
            RegistrationTarget::PromptIndex => "prompt-index",
            RegistrationTarget::ToolHandler => "tool-handler",
        }
    }

    /// Barrels are authored from scratch when missing; handlers never are.
    pub fn is_barrel(self) -> bool {
        !matches!(self, RegistrationTarget::ToolHandler)
    }

    /// The fragments registering `name` into this target.
    pub fn entry(self, name: &NameVariants) -> RegistrationEntry {
        let NameVariants {
            raw,
            pascal,
            camel,
            slug,
        } = name;
        match self {
            RegistrationTarget::ToolIndex => RegistrationEntry {
                import: Some(format!("import {{ {camel}Tools }} from './{slug}/index.js';")),
                export: Some(format!("export * from './{slug}/index.js';")),
                collection: Some(CollectionEntry {
                    name: "serverTools",
                    item: format!("...{camel}Tools,"),
                    comment: "// Export all tools combined",
                }),
                case: None,
            },
            RegistrationTarget::ServiceIndex => RegistrationEntry {
                export: Some(format!("export * from './{slug}/index.js';")),
                ..RegistrationEntry::default()
            },
            RegistrationTarget::PromptIndex => RegistrationEntry {
                import: Some(format!(
                    "import {{ {camel}PromptMcp }} from './{slug}/index.js';"
                )),
                collection: Some(CollectionEntry {
                    name: "serverPrompts",
                    item: format!("{camel}PromptMcp,"),
                    comment: "// Export all prompts combined",
                }),
                ..RegistrationEntry::default()
            },
            RegistrationTarget::ToolHandler => RegistrationEntry {
                import: Some(format!(
                    "import {{ handle{pascal} }} from '../tools/{slug}/index.js';"
                )),
                case: Some(DispatchCase {
                    label: format!("case \"{raw}\":"),
                    body: format!("return await handle{pascal}(args);"),
                }),
                ..RegistrationEntry::default()
            },
        }
    }
}

impl fmt::Display for RegistrationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual fragments inserted into one target for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationEntry {
    pub import: Option<String>,
    pub export: Option<String>,
    pub collection: Option<CollectionEntry>,
    pub case: Option<DispatchCase>,
}

/// An entry in a declared aggregate array, e.g. `export const serverTools = [`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
    pub name: &'static str,
    pub item: String,
    /// Comment line placed above a freshly appended declaration
    pub comment: &'static str,
}

impl CollectionEntry {
    /// A full declaration holding only this entry.
    pub fn declaration(&self) -> String {
        format!(
            "{}\nexport const {} = [\n  {}\n];\n",
            self.comment, self.name, self.item
        )
    }
}

/// A `case` clause of the `switch (name)` dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchCase {
    pub label: String,
    pub body: String,
}
