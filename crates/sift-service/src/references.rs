//! Reference-lookup result shapes.
//!
//! A reference result groups locations by symbol. Each location carries the
//! engine-supplied `is_write_access` and `is_definition` flags; the
//! middleware filters on `is_definition` and never re-derives either flag.

use serde::{Deserialize, Serialize};
use sift_common::TextSpan;

use crate::completions::CompletionItemKind;

/// Display information for the symbol a reference group belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDisplay {
    pub name: String,
    pub kind: CompletionItemKind,
}

/// A single reference to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    /// The file containing this reference.
    pub file: String,
    /// The range of the referencing identifier.
    pub span: TextSpan,
    /// Whether this reference writes to the symbol.
    pub is_write_access: bool,
    /// Whether this reference is the defining declaration.
    pub is_definition: bool,
}

impl ReferenceEntry {
    pub fn new(file: impl Into<String>, span: TextSpan, is_write_access: bool, is_definition: bool) -> Self {
        Self {
            file: file.into(),
            span,
            is_write_access,
            is_definition,
        }
    }
}

/// All references to one symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencedSymbol {
    pub symbol: SymbolDisplay,
    /// The reference locations, in engine order.
    pub references: Vec<ReferenceEntry>,
}

impl ReferencedSymbol {
    pub fn new(name: impl Into<String>, kind: CompletionItemKind, references: Vec<ReferenceEntry>) -> Self {
        Self {
            symbol: SymbolDisplay {
                name: name.into(),
                kind,
            },
            references,
        }
    }
}
