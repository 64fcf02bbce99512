//! Add operations - new components inside an existing project.

use std::path::Path;

use mcp_maker_codegen::{
    Component, ComponentKind, ComponentReport, Renderer, components,
    register::{TargetUpdate, UpdateStatus},
};
use mcp_maker_core::{Result, WriteResult};

use crate::reports::AddReport;

/// Add `component` to the project at `root`.
pub fn add(root: &Path, component: &Component) -> Result<AddReport> {
    let result = components::add_component(root, component, &Renderer::new())?;
    let headline = format!(
        "{} {} created successfully!",
        title(component.kind),
        component.names.raw
    );
    Ok(collect(headline, result, &component.names.raw))
}

/// Add the authentication module to the project at `root`.
pub fn add_auth(root: &Path) -> Result<AddReport> {
    let result = components::add_auth(root, &Renderer::new())?;
    let mut report = collect(
        "Authentication setup completed successfully!".to_string(),
        result,
        "auth",
    );
    report.next_steps = vec![
        "Configure your authentication in your application",
        "Use the auth providers in your services or tools",
    ];
    Ok(report)
}

fn title(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Tool => "Tool",
        ComponentKind::Service => "Service",
        ComponentKind::Prompt => "Prompt",
    }
}

fn collect(headline: String, result: ComponentReport, name: &str) -> AddReport {
    let mut report = AddReport {
        headline,
        ..AddReport::default()
    };

    for file in result.files {
        let path = file.path.display().to_string();
        match file.result {
            WriteResult::Written => report.written.push(path),
            WriteResult::Skipped => report.kept.push(path),
        }
    }

    for TargetUpdate { target, status } in result.updates {
        let path = target.path().to_string();
        match status {
            UpdateStatus::Created | UpdateStatus::Patched => report.registered.push(path),
            UpdateStatus::Unchanged => report.unchanged.push(path),
            UpdateStatus::Skipped(reason) => report.manual.push(format!(
                "{path} was not updated ({reason}); register {name} there by hand"
            )),
            UpdateStatus::NeedsManualEdit(error) => report
                .manual
                .push(format!("{error}; register {name} there by hand")),
        }
    }

    report
}
