//! Language-service contract and engine query surface for sift.
//!
//! This crate defines the two seams the middleware sits between:
//!
//! - [`LanguageService`]: the full operation set a host invokes per
//!   project/session: completions, references, diagnostics, code fixes,
//!   navigation. The middleware implements this trait by wrapping another
//!   implementation of it.
//! - [`SemanticQueries`]: the read-only syntax/type queries the wrapped
//!   engine exposes, used by the query-shape inferencer.
//!
//! The data interchange shapes follow tsserver protocol conventions
//! (camelCase wire names, sort-text ordering strings, start/length spans).

pub mod code_fixes;
pub mod completions;
pub mod hover;
pub mod navigation;
pub mod queries;
pub mod references;
pub mod service;
pub mod syntax;
pub mod types;

pub use code_fixes::{CodeFixAction, FileTextChanges};
pub use completions::{
    CompletionItem, CompletionItemKind, CompletionRequestOptions, CompletionResult,
};
pub use hover::{QuickInfo, SignatureHelp};
pub use queries::SemanticQueries;
pub use references::{ReferenceEntry, ReferencedSymbol, SymbolDisplay};
pub use service::LanguageService;
pub use syntax::{NodeId, NodeShape, PropertyEntry};
pub use types::{PropertySymbol, TypeFlavor, TypeId};
