//! Navigation shapes: definitions, document symbols, highlights, rename.
//! All of these operations are forwarded to the wrapped engine untouched.

use serde::{Deserialize, Serialize};
use sift_common::TextSpan;

use crate::completions::CompletionItemKind;

/// A go-to-definition target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionEntry {
    pub file: String,
    pub span: TextSpan,
    pub name: String,
    pub kind: CompletionItemKind,
}

/// A document-symbol (outline) entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub name: String,
    pub kind: CompletionItemKind,
    pub span: TextSpan,
    /// Name of the enclosing container, if any (class, namespace, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
}

/// An occurrence highlighted by document-highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHighlight {
    pub span: TextSpan,
    pub is_write_access: bool,
}

/// A location to edit when renaming the symbol under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameLocationEntry {
    pub file: String,
    pub span: TextSpan,
}
