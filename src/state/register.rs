#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use super::mcp::{McpType, NewMcp};

/// Local editable state for the registration form.
///
/// Held in a page-local `RwSignal`; nothing here outlives the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub location: String,
    pub kind: McpType,
}

/// Tagged per-field update for [`RegisterForm`].
///
/// One message per field instead of a generic key/value setter, so an
/// edit can never touch a field it was not aimed at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPatch {
    Name(String),
    Location(String),
    Kind(McpType),
}

impl RegisterForm {
    /// Apply a single-field patch, leaving the other fields untouched.
    pub fn apply(&mut self, patch: FormPatch) {
        match patch {
            FormPatch::Name(name) => self.name = name,
            FormPatch::Location(location) => self.location = location,
            FormPatch::Kind(kind) => self.kind = kind,
        }
    }

    /// Snapshot the current field values into a registration record.
    pub fn record(&self) -> NewMcp {
        NewMcp {
            name: self.name.clone(),
            location: self.location.clone(),
            kind: self.kind,
        }
    }
}
