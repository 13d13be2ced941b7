//! Code-fix result shapes.

use serde::{Deserialize, Serialize};
use sift_common::TextChange;

/// A single code fix offered for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixAction {
    /// The internal name of the fix (e.g. "spelling", "addInferredQueryProperty").
    pub fix_name: String,
    /// Human-readable description of the fix.
    pub description: String,
    /// The file changes to apply.
    pub changes: Vec<FileTextChanges>,
}

impl CodeFixAction {
    pub fn new(
        fix_name: impl Into<String>,
        description: impl Into<String>,
        changes: Vec<FileTextChanges>,
    ) -> Self {
        Self {
            fix_name: fix_name.into(),
            description: description.into(),
            changes,
        }
    }
}

/// Edits to a single file within a code fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTextChanges {
    pub file_name: String,
    /// The edits, in application order.
    pub text_changes: Vec<TextChange>,
}

impl FileTextChanges {
    pub fn new(file_name: impl Into<String>, text_changes: Vec<TextChange>) -> Self {
        Self {
            file_name: file_name.into(),
            text_changes,
        }
    }
}
