use std::fmt;

use mcp_maker_core::ProjectLayout;

use crate::register::RegistrationTarget;

/// A component type that `add` can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Tool,
    Service,
    Prompt,
}

impl ComponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Tool => "tool",
            ComponentKind::Service => "service",
            ComponentKind::Prompt => "prompt",
        }
    }

    /// Shared files the component is registered into, in update order.
    pub fn targets(self) -> &'static [RegistrationTarget] {
        match self {
            ComponentKind::Tool => &[
                RegistrationTarget::ToolIndex,
                RegistrationTarget::ToolHandler,
            ],
            ComponentKind::Service => &[RegistrationTarget::ServiceIndex],
            ComponentKind::Prompt => &[RegistrationTarget::PromptIndex],
        }
    }

    /// Directory holding components of this kind, relative to the project root.
    pub fn dir(self) -> &'static str {
        match self {
            ComponentKind::Tool => ProjectLayout::TOOLS,
            ComponentKind::Service => ProjectLayout::SERVICES,
            ComponentKind::Prompt => ProjectLayout::PROMPTS,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
