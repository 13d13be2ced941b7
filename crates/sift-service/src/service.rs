//! The language-service operation set.

use sift_common::{Diagnostic, TextChange, TextSpan};

use crate::code_fixes::CodeFixAction;
use crate::completions::{CompletionEntryDetails, CompletionRequestOptions, CompletionResult};
use crate::hover::{QuickInfo, SignatureHelp};
use crate::navigation::{DefinitionEntry, DocumentHighlight, NavigationItem, RenameLocationEntry};
use crate::references::ReferencedSymbol;

/// The full per-project query interface a host invokes.
///
/// The wrapped engine implements this trait; the middleware implements it
/// again by forwarding to the engine and rewriting the results of
/// `completions_at`, `references_at`, and `code_fixes_at`. Operations that
/// find nothing return `None` or an empty collection; absence is not an
/// error anywhere in this interface.
///
/// All positions are byte offsets into the file's current text.
pub trait LanguageService {
    /// Parse-level diagnostics for a file.
    fn syntactic_diagnostics(&self, file: &str) -> Vec<Diagnostic>;

    /// Type-level diagnostics for a file.
    fn semantic_diagnostics(&self, file: &str) -> Vec<Diagnostic>;

    /// Completion suggestions at a position.
    fn completions_at(
        &self,
        file: &str,
        offset: u32,
        options: &CompletionRequestOptions,
    ) -> Option<CompletionResult>;

    /// On-demand details for a single completion entry.
    fn completion_entry_details(
        &self,
        file: &str,
        offset: u32,
        entry_name: &str,
    ) -> Option<CompletionEntryDetails>;

    /// Hover information at a position.
    fn quick_info_at(&self, file: &str, offset: u32) -> Option<QuickInfo>;

    /// Go-to-definition targets for the symbol at a position.
    fn definitions_at(&self, file: &str, offset: u32) -> Option<Vec<DefinitionEntry>>;

    /// All references to the symbol at a position, grouped by symbol.
    fn references_at(&self, file: &str, offset: u32) -> Option<Vec<ReferencedSymbol>>;

    /// Occurrence highlights for the symbol at a position, within one file.
    fn document_highlights(&self, file: &str, offset: u32) -> Option<Vec<DocumentHighlight>>;

    /// The outline (document symbols) of a file.
    fn document_symbols(&self, file: &str) -> Vec<NavigationItem>;

    /// Signature help for the call expression enclosing a position.
    fn signature_help_at(&self, file: &str, offset: u32) -> Option<SignatureHelp>;

    /// The locations to edit when renaming the symbol at a position.
    fn rename_locations(&self, file: &str, offset: u32) -> Option<Vec<RenameLocationEntry>>;

    /// Whole-file formatting edits.
    fn formatting_edits(&self, file: &str) -> Vec<TextChange>;

    /// Code fixes for the diagnostics with `error_codes` at `span`.
    fn code_fixes_at(&self, file: &str, span: TextSpan, error_codes: &[u32])
    -> Vec<CodeFixAction>;
}
