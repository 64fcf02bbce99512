//! Incremental registration of components into shared project files.
//!
//! Given the current text of a barrel or handler file (or nothing, when the
//! file does not exist yet), [`register_component`] computes the text that
//! registers one more component. Registering the same component twice is a
//! no-op, and entries already in the file are never moved or rewritten.

mod barrel;
mod dispatch;
mod lines;
mod target;

use std::path::Path;

use mcp_maker_core::{Error, NameVariants, Result, read_optional, write_file};
pub use target::{CollectionEntry, DispatchCase, RegistrationEntry, RegistrationTarget};
use tracing::{debug, warn};

/// Outcome of registering a component into one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The target did not exist and was authored from its skeleton
    Created(String),
    /// The target was modified
    Patched(String),
    /// Every fragment was already present
    Unchanged,
    /// The target does not exist and is not authored from scratch
    Skipped(&'static str),
}

impl Registration {
    /// The new file text, if anything needs writing.
    pub fn text(&self) -> Option<&str> {
        match self {
            Registration::Created(text) | Registration::Patched(text) => Some(text),
            Registration::Unchanged | Registration::Skipped(_) => None,
        }
    }
}

/// Register `name` into `target`, whose current content is `existing`.
///
/// Fails with a non-fatal [`Error::NotFound`] when the handler's dispatch
/// cannot be located; the file must then be edited by hand.
pub fn register_component(
    target: RegistrationTarget,
    existing: Option<&str>,
    name: &NameVariants,
) -> Result<Registration> {
    let entry = target.entry(name);

    let Some(source) = existing else {
        if !target.is_barrel() {
            debug!(%target, "target missing, not authored from scratch");
            return Ok(Registration::Skipped("file does not exist"));
        }
        debug!(%target, component = %name.raw, "authoring skeleton");
        return Ok(Registration::Created(barrel::skeleton(target, &entry)));
    };

    let patched = if target.is_barrel() {
        barrel::patch(source, &entry)
    } else {
        dispatch::patch(source, &entry).map_err(|missing| {
            warn!(%target, component = %name.raw, "{} not found", missing.describe());
            Error::not_found(missing.describe(), target.path())
        })?
    };

    if patched == source {
        Ok(Registration::Unchanged)
    } else {
        debug!(%target, component = %name.raw, "patched");
        Ok(Registration::Patched(patched))
    }
}

/// What happened to one shared file of a project.
#[derive(Debug)]
pub enum UpdateStatus {
    Created,
    Patched,
    Unchanged,
    Skipped(&'static str),
    /// Left untouched; the component must be registered by hand
    NeedsManualEdit(Box<Error>),
}

#[derive(Debug)]
pub struct TargetUpdate {
    pub target: RegistrationTarget,
    pub status: UpdateStatus,
}

/// Read `target` under `root`, register `name` and write the result back.
///
/// Read and write failures abort; a missing dispatch construct becomes
/// [`UpdateStatus::NeedsManualEdit`].
pub fn register_in_project(
    root: &Path,
    target: RegistrationTarget,
    name: &NameVariants,
) -> Result<TargetUpdate> {
    let path = root.join(target.path());
    let existing = read_optional(&path)?;

    let status = match register_component(target, existing.as_deref(), name) {
        Ok(registration) => {
            if let Some(text) = registration.text() {
                write_file(&path, text)?;
            }
            match registration {
                Registration::Created(_) => UpdateStatus::Created,
                Registration::Patched(_) => UpdateStatus::Patched,
                Registration::Unchanged => UpdateStatus::Unchanged,
                Registration::Skipped(reason) => UpdateStatus::Skipped(reason),
            }
        }
        Err(e) if !e.is_fatal() => UpdateStatus::NeedsManualEdit(e),
        Err(e) => return Err(e),
    };
    Ok(TargetUpdate { target, status })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(raw: &str) -> NameVariants {
        NameVariants::from_raw(raw)
    }

    #[test]
    fn test_missing_handler_is_skipped() {
        let result =
            register_component(RegistrationTarget::ToolHandler, None, &variants("weather")).unwrap();
        assert!(matches!(result, Registration::Skipped(_)));
        assert_eq!(result.text(), None);
    }

    #[test]
    fn test_missing_barrel_is_created() {
        let result =
            register_component(RegistrationTarget::ServiceIndex, None, &variants("weather")).unwrap();
        assert!(matches!(result, Registration::Created(_)));
    }

    #[test]
    fn test_missing_dispatch_is_not_found() {
        let err = register_component(
            RegistrationTarget::ToolHandler,
            Some("export {};\n"),
            &variants("weather"),
        )
        .unwrap_err();
        assert!(matches!(*err, Error::NotFound { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_second_registration_is_unchanged() {
        let first =
            register_component(RegistrationTarget::ToolIndex, Some("// tools\n"), &variants("a"))
                .unwrap();
        let text = first.text().unwrap();
        let second =
            register_component(RegistrationTarget::ToolIndex, Some(text), &variants("a")).unwrap();
        assert_eq!(second, Registration::Unchanged);
    }
}
