//! Scripted in-memory language service for sift tests.
//!
//! [`ScriptedService`] implements both [`LanguageService`] and
//! [`SemanticQueries`] from explicit tables. Tests sketch the syntax
//! neighborhood they need (a few nodes, parents, types) and stub canned
//! results for the forwarded operations, then wrap the service in the
//! middleware and assert on what comes out the other side.
//!
//! Every `LanguageService` call is recorded with its arguments so proxy
//! tests can assert that forwarding happened verbatim. The service is
//! single-threaded by construction (interior mutability via `RefCell`),
//! which matches the middleware's synchronous request-response model.

use std::cell::RefCell;

use rustc_hash::{FxHashMap, FxHashSet};

use sift_common::{Diagnostic, TextChange, TextSpan};
use sift_service::completions::CompletionEntryDetails;
use sift_service::hover::{QuickInfo, SignatureHelp};
use sift_service::navigation::{
    DefinitionEntry, DocumentHighlight, NavigationItem, RenameLocationEntry,
};
use sift_service::{
    CodeFixAction, CompletionRequestOptions, CompletionResult, LanguageService, NodeId, NodeShape,
    PropertySymbol, ReferencedSymbol, SemanticQueries, TypeFlavor, TypeId,
};

/// A language service whose every answer is scripted by the test.
#[derive(Default)]
pub struct ScriptedService {
    next_node: u32,
    next_type: u32,

    // Syntax/type tables consulted by SemanticQueries.
    shapes: FxHashMap<NodeId, NodeShape>,
    parents: FxHashMap<NodeId, NodeId>,
    tokens: FxHashMap<(String, u32), NodeId>,
    types_at: FxHashMap<NodeId, TypeId>,
    contextual: FxHashMap<NodeId, TypeId>,
    declarations: FxHashMap<TypeId, NodeId>,
    unions: FxHashMap<TypeId, Vec<TypeId>>,
    properties: FxHashMap<TypeId, Vec<PropertySymbol>>,
    flavors: FxHashMap<TypeId, TypeFlavor>,
    array_like: FxHashSet<TypeId>,

    // Canned results for LanguageService operations.
    completions: FxHashMap<(String, u32), CompletionResult>,
    references: FxHashMap<(String, u32), Vec<ReferencedSymbol>>,
    code_fixes: FxHashMap<(String, u32), Vec<CodeFixAction>>,
    quick_infos: FxHashMap<(String, u32), QuickInfo>,
    semantic_diags: FxHashMap<String, Vec<Diagnostic>>,

    calls: RefCell<Vec<String>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- syntax/type sketching -------------------------------------------

    /// Add a node with the given shape, returning its handle.
    pub fn add_node(&mut self, shape: NodeShape) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.shapes.insert(id, shape);
        id
    }

    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.parents.insert(child, parent);
    }

    /// Place `node` as the token found at `file`/`offset`.
    pub fn place_token(&mut self, file: &str, offset: u32, node: NodeId) {
        self.tokens.insert((file.to_string(), offset), node);
    }

    /// Mint a fresh type with the given flavor.
    pub fn add_type(&mut self, flavor: TypeFlavor) -> TypeId {
        let id = TypeId(self.next_type);
        self.next_type += 1;
        self.flavors.insert(id, flavor);
        id
    }

    pub fn set_type_at(&mut self, node: NodeId, ty: TypeId) {
        self.types_at.insert(node, ty);
    }

    pub fn set_contextual_type(&mut self, node: NodeId, ty: TypeId) {
        self.contextual.insert(node, ty);
    }

    pub fn set_declaration(&mut self, ty: TypeId, decl: NodeId) {
        self.declarations.insert(ty, decl);
    }

    pub fn set_union(&mut self, ty: TypeId, members: Vec<TypeId>) {
        self.unions.insert(ty, members);
    }

    pub fn set_properties(&mut self, ty: TypeId, properties: Vec<PropertySymbol>) {
        self.properties.insert(ty, properties);
    }

    pub fn mark_array_like(&mut self, ty: TypeId) {
        self.array_like.insert(ty);
    }

    // ---- canned operation results ----------------------------------------

    pub fn stub_completions(&mut self, file: &str, offset: u32, result: CompletionResult) {
        self.completions.insert((file.to_string(), offset), result);
    }

    pub fn stub_references(&mut self, file: &str, offset: u32, groups: Vec<ReferencedSymbol>) {
        self.references.insert((file.to_string(), offset), groups);
    }

    pub fn stub_code_fixes(&mut self, file: &str, start: u32, fixes: Vec<CodeFixAction>) {
        self.code_fixes.insert((file.to_string(), start), fixes);
    }

    pub fn stub_quick_info(&mut self, file: &str, offset: u32, info: QuickInfo) {
        self.quick_infos.insert((file.to_string(), offset), info);
    }

    pub fn stub_semantic_diagnostics(&mut self, file: &str, diags: Vec<Diagnostic>) {
        self.semantic_diags.insert(file.to_string(), diags);
    }

    // ---- call recording ---------------------------------------------------

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    /// Every `LanguageService` call made so far, with arguments rendered.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl SemanticQueries for ScriptedService {
    fn token_at(&self, file: &str, offset: u32) -> Option<NodeId> {
        self.tokens.get(&(file.to_string(), offset)).copied()
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    fn shape_of(&self, node: NodeId) -> NodeShape {
        self.shapes.get(&node).cloned().unwrap_or(NodeShape::Other)
    }

    fn type_at(&self, node: NodeId) -> Option<TypeId> {
        self.types_at.get(&node).copied()
    }

    fn contextual_type_of(&self, node: NodeId) -> Option<TypeId> {
        self.contextual.get(&node).copied()
    }

    fn declaration_of(&self, ty: TypeId) -> Option<NodeId> {
        self.declarations.get(&ty).copied()
    }

    fn union_members_of(&self, ty: TypeId) -> Vec<TypeId> {
        self.unions.get(&ty).cloned().unwrap_or_default()
    }

    fn properties_of(&self, ty: TypeId) -> Vec<PropertySymbol> {
        self.properties.get(&ty).cloned().unwrap_or_default()
    }

    fn flavor_of(&self, ty: TypeId) -> TypeFlavor {
        self.flavors.get(&ty).copied().unwrap_or(TypeFlavor::Other)
    }

    fn is_array_like(&self, ty: TypeId) -> bool {
        self.array_like.contains(&ty)
    }
}

impl LanguageService for ScriptedService {
    fn syntactic_diagnostics(&self, file: &str) -> Vec<Diagnostic> {
        self.record(format!("syntactic_diagnostics({file})"));
        Vec::new()
    }

    fn semantic_diagnostics(&self, file: &str) -> Vec<Diagnostic> {
        self.record(format!("semantic_diagnostics({file})"));
        self.semantic_diags.get(file).cloned().unwrap_or_default()
    }

    fn completions_at(
        &self,
        file: &str,
        offset: u32,
        _options: &CompletionRequestOptions,
    ) -> Option<CompletionResult> {
        self.record(format!("completions_at({file}@{offset})"));
        self.completions.get(&(file.to_string(), offset)).cloned()
    }

    fn completion_entry_details(
        &self,
        file: &str,
        offset: u32,
        entry_name: &str,
    ) -> Option<CompletionEntryDetails> {
        self.record(format!("completion_entry_details({file}@{offset}, {entry_name})"));
        None
    }

    fn quick_info_at(&self, file: &str, offset: u32) -> Option<QuickInfo> {
        self.record(format!("quick_info_at({file}@{offset})"));
        self.quick_infos.get(&(file.to_string(), offset)).cloned()
    }

    fn definitions_at(&self, file: &str, offset: u32) -> Option<Vec<DefinitionEntry>> {
        self.record(format!("definitions_at({file}@{offset})"));
        None
    }

    fn references_at(&self, file: &str, offset: u32) -> Option<Vec<ReferencedSymbol>> {
        self.record(format!("references_at({file}@{offset})"));
        self.references.get(&(file.to_string(), offset)).cloned()
    }

    fn document_highlights(&self, file: &str, offset: u32) -> Option<Vec<DocumentHighlight>> {
        self.record(format!("document_highlights({file}@{offset})"));
        None
    }

    fn document_symbols(&self, file: &str) -> Vec<NavigationItem> {
        self.record(format!("document_symbols({file})"));
        Vec::new()
    }

    fn signature_help_at(&self, file: &str, offset: u32) -> Option<SignatureHelp> {
        self.record(format!("signature_help_at({file}@{offset})"));
        None
    }

    fn rename_locations(&self, file: &str, offset: u32) -> Option<Vec<RenameLocationEntry>> {
        self.record(format!("rename_locations({file}@{offset})"));
        None
    }

    fn formatting_edits(&self, file: &str) -> Vec<TextChange> {
        self.record(format!("formatting_edits({file})"));
        Vec::new()
    }

    fn code_fixes_at(
        &self,
        file: &str,
        span: TextSpan,
        error_codes: &[u32],
    ) -> Vec<CodeFixAction> {
        self.record(format!(
            "code_fixes_at({file}@{}+{}, {error_codes:?})",
            span.start, span.length
        ));
        self.code_fixes
            .get(&(file.to_string(), span.start))
            .cloned()
            .unwrap_or_default()
    }
}
