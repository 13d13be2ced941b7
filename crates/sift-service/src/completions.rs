//! Completion result and entry shapes.
//!
//! Field names and semantics align with tsserver's `CompletionInfo` /
//! `CompletionEntry`: a result carries the completion-context flags alongside
//! an ordered entry list, and ordering within the editor is driven by
//! sort-text strings rather than list position.

use serde::{Deserialize, Serialize};

/// The kind tag of a completion entry.
///
/// Serialized in kebab-case, so the synthesized entries produced by the
/// query-shape inferencer appear on the wire as `"interface-field"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionItemKind {
    /// A variable or constant
    Variable,
    /// A function
    Function,
    /// A class
    Class,
    /// A method
    Method,
    /// A property
    Property,
    /// A keyword
    Keyword,
    /// An interface
    Interface,
    /// An enum
    Enum,
    /// A module or namespace
    Module,
    /// A field inferred from a sibling interface type
    InterfaceField,
}

/// Sort priority categories matching tsserver's sort text conventions.
/// Lower strings appear first in the completion list.
pub mod sort_priority {
    /// Entries the middleware recommends; sorts before everything else.
    pub const RECOMMENDED: &str = "0";
    /// Local variables, parameters, and function-scoped identifiers.
    pub const LOCAL_DECLARATION: &str = "10";
    /// Properties, methods, and other location-based completions.
    pub const LOCATION_PRIORITY: &str = "11";
    /// Properties and methods on a member completion.
    pub const MEMBER: &str = "11";
    /// Global variables and keywords.
    pub const GLOBALS_OR_KEYWORDS: &str = "15";
}

/// Options accompanying a completion request; forwarded verbatim to the
/// wrapped engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompletionRequestOptions {
    /// The character that triggered the request, if any (e.g. `.`).
    pub trigger_character: Option<char>,
}

/// Result of a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    /// Whether this is a global (file-scope) completion.
    pub is_global_completion: bool,
    /// Whether this is a member completion (after a dot).
    pub is_member_completion: bool,
    /// Whether the cursor is at a location where a new identifier can be
    /// typed; editors use this to avoid auto-committing entries.
    pub is_new_identifier_location: bool,
    /// The completion entries, in engine order.
    pub entries: Vec<CompletionItem>,
}

impl CompletionResult {
    /// An empty non-global member completion, used as the base when the
    /// middleware synthesizes entries and the engine offered nothing.
    pub fn empty_member_completion() -> Self {
        Self {
            is_global_completion: false,
            is_member_completion: true,
            is_new_identifier_location: false,
            entries: Vec::new(),
        }
    }

    /// Whether an entry with the given name is present.
    pub fn has_entry(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }
}

/// A single completion entry.
///
/// Fields align with tsserver's `CompletionEntry`: name, kind, kindModifiers,
/// sortText, insertText, isRecommended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// The identifier shown in the completion list.
    pub name: String,
    /// The kind of completion entry.
    pub kind: CompletionItemKind,
    /// Text inserted on accept, if different from `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    /// Ordering string; lower strings appear first. See [`sort_priority`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,
    /// Whether the editor should preselect this entry.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recommended: bool,
    /// Comma-separated modifier flags such as `optional`, `declare`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_modifiers: Option<String>,
}

impl CompletionItem {
    /// Create a new completion entry with only the required fields.
    pub fn new(name: impl Into<String>, kind: CompletionItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
            insert_text: None,
            sort_text: None,
            recommended: false,
            kind_modifiers: None,
        }
    }

    /// Set the insert text.
    pub fn with_insert_text(mut self, insert_text: impl Into<String>) -> Self {
        self.insert_text = Some(insert_text.into());
        self
    }

    /// Set the sort text (controls ordering in the list).
    pub fn with_sort_text(mut self, sort_text: impl Into<String>) -> Self {
        self.sort_text = Some(sort_text.into());
        self
    }

    /// Mark this entry as recommended (preselected by the editor).
    pub fn recommended(mut self) -> Self {
        self.recommended = true;
        self
    }

    /// Set the kind modifiers string.
    pub fn with_kind_modifiers(mut self, modifiers: impl Into<String>) -> Self {
        self.kind_modifiers = Some(modifiers.into());
        self
    }

    /// The effective sort text: the explicit value, or a default derived
    /// from the entry kind.
    pub fn effective_sort_text(&self) -> &str {
        match &self.sort_text {
            Some(s) => s.as_str(),
            None => default_sort_text(self.kind),
        }
    }
}

/// Derive a default sort text from the entry kind, following tsserver
/// conventions.
pub fn default_sort_text(kind: CompletionItemKind) -> &'static str {
    match kind {
        CompletionItemKind::Variable | CompletionItemKind::Function => {
            sort_priority::LOCATION_PRIORITY
        }
        CompletionItemKind::Property | CompletionItemKind::Method => sort_priority::MEMBER,
        CompletionItemKind::Class
        | CompletionItemKind::Interface
        | CompletionItemKind::Enum
        | CompletionItemKind::Module => sort_priority::LOCATION_PRIORITY,
        CompletionItemKind::Keyword => sort_priority::GLOBALS_OR_KEYWORDS,
        CompletionItemKind::InterfaceField => sort_priority::RECOMMENDED,
    }
}

/// Detail payload for a single completion entry, resolved on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntryDetails {
    pub name: String,
    pub kind: CompletionItemKind,
    /// Rendered type/signature text shown in the detail pane.
    pub display_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}
