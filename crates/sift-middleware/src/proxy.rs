//! The delegating proxy.
//!
//! [`FilteredService`] wraps a full language service and implements the same
//! interface. The method table is enumerated once, below, as explicit
//! per-method trampolines generated by `forward_ops!`; only completions,
//! references, and code fixes carry extra logic. The proxy adds no error
//! handling of its own: whatever the wrapped service does, including
//! panicking, propagates to the host unchanged.

use tracing::trace;

use sift_common::{Diagnostic, TextChange, TextSpan};
use sift_service::completions::CompletionEntryDetails;
use sift_service::hover::{QuickInfo, SignatureHelp};
use sift_service::navigation::{
    DefinitionEntry, DocumentHighlight, NavigationItem, RenameLocationEntry,
};
use sift_service::{
    CodeFixAction, CompletionRequestOptions, CompletionResult, LanguageService, ReferencedSymbol,
    SemanticQueries,
};

use crate::config::{ExclusionSets, FilterConfig};
use crate::{filters, infer};

/// Generate pass-through trampolines for the operations the middleware does
/// not override. Each generated method forwards its arguments unchanged to
/// the wrapped service and returns its result unchanged.
macro_rules! forward_ops {
    ($( fn $name:ident(&self $(, $arg:ident : $ty:ty)* ) -> $ret:ty; )*) => {
        $(
            fn $name(&self $(, $arg: $ty)*) -> $ret {
                self.inner.$name($($arg),*)
            }
        )*
    };
}

/// A language service wrapping another, with filtered completions and
/// references and an extra inferred-property code fix.
///
/// Owns the wrapped service and the compiled exclusion sets; holds no other
/// state, so a single instance is safe to share across calls for as long as
/// the wrapped service itself is.
pub struct FilteredService<S> {
    inner: S,
    exclusions: ExclusionSets,
}

impl<S> FilteredService<S> {
    /// Wrap `inner` with the given exclusion sets.
    pub fn new(inner: S, exclusions: ExclusionSets) -> Self {
        Self { inner, exclusions }
    }

    /// The wrapped service.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap, returning the original service.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// The factory the host calls once per project/session: wrap the engine's
/// query interface, returning a replacement with identical operations.
pub fn wrap<S>(inner: S, config: &FilterConfig) -> FilteredService<S>
where
    S: LanguageService + SemanticQueries,
{
    FilteredService::new(inner, ExclusionSets::from_config(config))
}

impl<S> LanguageService for FilteredService<S>
where
    S: LanguageService + SemanticQueries,
{
    forward_ops! {
        fn syntactic_diagnostics(&self, file: &str) -> Vec<Diagnostic>;
        fn semantic_diagnostics(&self, file: &str) -> Vec<Diagnostic>;
        fn completion_entry_details(&self, file: &str, offset: u32, entry_name: &str) -> Option<CompletionEntryDetails>;
        fn quick_info_at(&self, file: &str, offset: u32) -> Option<QuickInfo>;
        fn definitions_at(&self, file: &str, offset: u32) -> Option<Vec<DefinitionEntry>>;
        fn document_highlights(&self, file: &str, offset: u32) -> Option<Vec<DocumentHighlight>>;
        fn document_symbols(&self, file: &str) -> Vec<NavigationItem>;
        fn signature_help_at(&self, file: &str, offset: u32) -> Option<SignatureHelp>;
        fn rename_locations(&self, file: &str, offset: u32) -> Option<Vec<RenameLocationEntry>>;
        fn formatting_edits(&self, file: &str) -> Vec<TextChange>;
    }

    fn completions_at(
        &self,
        file: &str,
        offset: u32,
        options: &CompletionRequestOptions,
    ) -> Option<CompletionResult> {
        trace!(file, offset, "completions via middleware");
        let prior = self.inner.completions_at(file, offset, options);
        let filtered = filters::filter_completions(prior, &self.exclusions);
        infer::augment_completions(&self.inner, file, offset, filtered)
    }

    fn references_at(&self, file: &str, offset: u32) -> Option<Vec<ReferencedSymbol>> {
        trace!(file, offset, "references via middleware");
        filters::strip_definition_sites(self.inner.references_at(file, offset))
    }

    fn code_fixes_at(
        &self,
        file: &str,
        span: TextSpan,
        error_codes: &[u32],
    ) -> Vec<CodeFixAction> {
        trace!(file, start = span.start, ?error_codes, "code fixes via middleware");
        let mut fixes = self.inner.code_fixes_at(file, span, error_codes);
        if let Some(fix) = infer::missing_property_fix(&self.inner, file, span, error_codes) {
            fixes.push(fix);
        }
        fixes
    }
}
