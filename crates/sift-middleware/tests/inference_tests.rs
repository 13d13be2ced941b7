//! End-to-end tests for query-shape inference: completion augmentation and
//! the inferred-property code fix, driven through the full middleware.

use sift_common::{TextSpan, diagnostic_codes};
use sift_middleware::{FilterConfig, wrap};
use sift_service::{
    CodeFixAction, CompletionItem, CompletionItemKind, CompletionRequestOptions, CompletionResult,
    FileTextChanges, LanguageService, NodeShape, PropertyEntry, PropertySymbol, TypeFlavor,
};
use sift_testing::ScriptedService;

const FILE: &str = "queries.ts";
/// The position a completion request arrives at; the inferencer anchors one
/// byte earlier.
const POS: u32 = 120;
const ANCHOR: u32 = POS - 1;

/// Span of the query object literal in the fixture source.
const LIT_START: u32 = 40;
/// `name: 'a'` occupying bytes 45..55 inside the literal.
const NAME_PROP: (&str, u32, u32) = ("name", 45, 10);

enum Container {
    /// The literal is the first element of an array literal.
    Array,
    /// The literal is the value of `find: {...}`.
    NamedAssignment,
    /// The literal hangs off an unclassified parent; no inference possible.
    Bare,
}

enum Sibling {
    /// Contextual type is a union of the literal's own shape and an
    /// interface declared elsewhere.
    Interface,
    /// Union collapses to the literal's own shape; nothing to borrow from.
    SelfOnly,
    /// Contextual type is not a union at all.
    NotAUnion,
}

/// Sketch the syntax neighborhood of `query.<prop>` where `query` refers to
/// an object literal with `existing` properties, contained per `container`,
/// with the contextual union per `sibling`.
///
/// The sibling interface exposes: name (string), limit (number),
/// title (string), active (boolean), tags (array-like), filter (object).
fn fixture(
    prop: &str,
    container: Container,
    existing: &[(&str, u32, u32)],
    sibling: Sibling,
) -> ScriptedService {
    let mut s = ScriptedService::new();

    let obj_ref = s.add_node(NodeShape::Other);
    let token = s.add_node(NodeShape::Other);
    let access = s.add_node(NodeShape::PropertyAccess {
        object: obj_ref,
        name: prop.to_string(),
    });
    s.set_parent(token, access);
    s.place_token(FILE, ANCHOR, token);

    let properties: Vec<PropertyEntry> = existing
        .iter()
        .map(|(name, start, len)| PropertyEntry::new(*name, TextSpan::new(*start, *len)))
        .collect();
    let lit_decl = s.add_node(NodeShape::ObjectLiteral {
        span: TextSpan::new(LIT_START, 60),
        properties,
    });

    let t_lit = s.add_type(TypeFlavor::Other);
    s.set_type_at(obj_ref, t_lit);
    s.set_declaration(t_lit, lit_decl);

    let t_ctx = s.add_type(TypeFlavor::Other);
    match container {
        Container::Array => {
            let array = s.add_node(NodeShape::ArrayLiteral {
                elements: vec![lit_decl],
            });
            s.set_parent(lit_decl, array);
            s.set_contextual_type(lit_decl, t_ctx);
        }
        Container::NamedAssignment => {
            let name_node = s.add_node(NodeShape::Other);
            let assignment = s.add_node(NodeShape::PropertyAssignment {
                name: Some("find".to_string()),
                name_node,
                initializer: lit_decl,
            });
            s.set_parent(lit_decl, assignment);
            s.set_contextual_type(name_node, t_ctx);
        }
        Container::Bare => {
            let statement = s.add_node(NodeShape::Other);
            s.set_parent(lit_decl, statement);
            s.set_contextual_type(lit_decl, t_ctx);
        }
    }

    // The literal's own shape as a union member.
    let t_self = s.add_type(TypeFlavor::Other);
    s.set_declaration(t_self, lit_decl);

    match sibling {
        Sibling::Interface => {
            let t_num = s.add_type(TypeFlavor::Number);
            let t_str = s.add_type(TypeFlavor::String);
            let t_bool = s.add_type(TypeFlavor::Boolean);
            let t_tags = s.add_type(TypeFlavor::Other);
            s.mark_array_like(t_tags);
            let t_filter = s.add_type(TypeFlavor::Other);

            let iface_decl = s.add_node(NodeShape::Other);
            let t_iface = s.add_type(TypeFlavor::Other);
            s.set_declaration(t_iface, iface_decl);
            s.set_properties(
                t_iface,
                vec![
                    PropertySymbol::new("name", Some(t_str)),
                    PropertySymbol::new("limit", Some(t_num)),
                    PropertySymbol::new("title", Some(t_str)),
                    PropertySymbol::new("active", Some(t_bool)),
                    PropertySymbol::new("tags", Some(t_tags)),
                    PropertySymbol::new("filter", Some(t_filter)),
                ],
            );
            s.set_union(t_ctx, vec![t_self, t_iface]);
        }
        Sibling::SelfOnly => {
            s.set_union(t_ctx, vec![t_self]);
        }
        Sibling::NotAUnion => {}
    }

    s
}

fn member_completion(names: &[&str]) -> CompletionResult {
    CompletionResult {
        is_global_completion: false,
        is_member_completion: true,
        is_new_identifier_location: false,
        entries: names
            .iter()
            .map(|n| CompletionItem::new(*n, CompletionItemKind::Property))
            .collect(),
    }
}

fn entry_names(result: &CompletionResult) -> Vec<&str> {
    result.entries.iter().map(|e| e.name.as_str()).collect()
}

// ---- completion augmentation ---------------------------------------------

#[test]
fn appends_missing_interface_fields_to_baseline() {
    let mut s = fixture("limit", Container::Array, &[NAME_PROP], Sibling::Interface);
    s.stub_completions(FILE, POS, member_completion(&["name"]));
    let svc = wrap(s, &FilterConfig::default());

    let result = svc
        .completions_at(FILE, POS, &CompletionRequestOptions::default())
        .unwrap();

    // Baseline entry first, inferred fields appended; `name` is both in the
    // baseline and defined on the literal, so it is not re-suggested.
    assert_eq!(
        entry_names(&result),
        ["name", "limit", "title", "active", "tags", "filter"]
    );

    let limit = result.entries.iter().find(|e| e.name == "limit").unwrap();
    assert_eq!(limit.kind, CompletionItemKind::InterfaceField);
    assert!(limit.recommended);
    assert_eq!(limit.sort_text.as_deref(), Some("0"));
    assert_eq!(limit.insert_text.as_deref(), Some("limit"));

    // Inferred fields sort ahead of everything in the baseline.
    let name = &result.entries[0];
    assert!(limit.effective_sort_text() < name.effective_sort_text());
}

#[test]
fn synthesizes_member_completion_when_baseline_absent() {
    let s = fixture("limit", Container::Array, &[NAME_PROP], Sibling::Interface);
    let svc = wrap(s, &FilterConfig::default());

    let result = svc
        .completions_at(FILE, POS, &CompletionRequestOptions::default())
        .unwrap();

    assert!(result.is_member_completion);
    assert!(!result.is_global_completion);
    assert!(!result.is_new_identifier_location);
    assert_eq!(
        entry_names(&result),
        ["limit", "title", "active", "tags", "filter"]
    );
    assert!(result.entries.iter().all(|e| e.recommended));
}

#[test]
fn named_assignment_container_is_recognized() {
    let mut s = fixture(
        "active",
        Container::NamedAssignment,
        &[NAME_PROP],
        Sibling::Interface,
    );
    s.stub_completions(FILE, POS, member_completion(&["name"]));
    let svc = wrap(s, &FilterConfig::default());

    let result = svc
        .completions_at(FILE, POS, &CompletionRequestOptions::default())
        .unwrap();
    assert!(result.has_entry("active"));
    assert!(result.has_entry("filter"));
}

#[test]
fn unclassified_container_leaves_baseline_unchanged() {
    let mut s = fixture("limit", Container::Bare, &[NAME_PROP], Sibling::Interface);
    s.stub_completions(FILE, POS, member_completion(&["name"]));
    let svc = wrap(s, &FilterConfig::default());

    let result = svc
        .completions_at(FILE, POS, &CompletionRequestOptions::default())
        .unwrap();
    assert_eq!(entry_names(&result), ["name"]);
}

#[test]
fn non_union_contextual_type_offers_nothing() {
    let mut s = fixture("limit", Container::Array, &[NAME_PROP], Sibling::NotAUnion);
    s.stub_completions(FILE, POS, member_completion(&["name"]));
    let svc = wrap(s, &FilterConfig::default());

    let result = svc
        .completions_at(FILE, POS, &CompletionRequestOptions::default())
        .unwrap();
    assert_eq!(entry_names(&result), ["name"]);
}

#[test]
fn union_without_distinct_member_offers_nothing() {
    let mut s = fixture("limit", Container::Array, &[NAME_PROP], Sibling::SelfOnly);
    s.stub_completions(FILE, POS, member_completion(&["name"]));
    let svc = wrap(s, &FilterConfig::default());

    let result = svc
        .completions_at(FILE, POS, &CompletionRequestOptions::default())
        .unwrap();
    assert_eq!(entry_names(&result), ["name"]);

    // And no fix either.
    let fixes = svc.code_fixes_at(
        FILE,
        TextSpan::new(ANCHOR, 5),
        &[diagnostic_codes::PROPERTY_DOES_NOT_EXIST],
    );
    assert!(fixes.is_empty());
}

#[test]
fn fields_defined_on_the_literal_are_not_duplicated() {
    // The literal already defines `limit`; the interface exposes it too.
    let s = fixture(
        "title",
        Container::Array,
        &[NAME_PROP, ("limit", 57, 9)],
        Sibling::Interface,
    );
    let svc = wrap(s, &FilterConfig::default());

    let result = svc
        .completions_at(FILE, POS, &CompletionRequestOptions::default())
        .unwrap();
    assert_eq!(entry_names(&result), ["title", "active", "tags", "filter"]);
}

#[test]
fn position_without_source_leaves_baseline_unchanged() {
    // No token placed anywhere near the cursor.
    let mut s = ScriptedService::new();
    s.stub_completions(FILE, POS, member_completion(&["alpha"]));
    let svc = wrap(s, &FilterConfig::default());

    let result = svc
        .completions_at(FILE, POS, &CompletionRequestOptions::default())
        .unwrap();
    assert_eq!(entry_names(&result), ["alpha"]);
}

// ---- code fixes -----------------------------------------------------------

fn request_fix(svc: &impl LanguageService, codes: &[u32]) -> Vec<CodeFixAction> {
    svc.code_fixes_at(FILE, TextSpan::new(ANCHOR, 5), codes)
}

#[test]
fn fix_inserts_after_last_property() {
    let s = fixture("limit", Container::Array, &[NAME_PROP], Sibling::Interface);
    let svc = wrap(s, &FilterConfig::default());

    let fixes = request_fix(&svc, &[diagnostic_codes::PROPERTY_DOES_NOT_EXIST]);
    assert_eq!(fixes.len(), 1);

    let fix = &fixes[0];
    assert_eq!(fix.fix_name, "addInferredQueryProperty");
    assert_eq!(fix.changes.len(), 1);
    assert_eq!(fix.changes[0].file_name, FILE);

    let change = &fix.changes[0].text_changes[0];
    // After `name: 'a'`, which ends at byte 55.
    assert_eq!(change.span.start, NAME_PROP.1 + NAME_PROP.2);
    assert_eq!(change.span.length, 0);
    assert_eq!(change.new_text, ", limit: 0");
}

#[test]
fn fix_placeholder_matches_property_type() {
    let cases = [
        ("limit", ", limit: 0"),
        ("title", ", title: ''"),
        ("active", ", active: true"),
        ("tags", ", tags: [{}]"),
        ("filter", ", filter: {}"),
    ];
    for (prop, expected) in cases {
        let s = fixture(prop, Container::Array, &[NAME_PROP], Sibling::Interface);
        let svc = wrap(s, &FilterConfig::default());
        let fixes = request_fix(&svc, &[diagnostic_codes::PROPERTY_DOES_NOT_EXIST]);
        assert_eq!(fixes.len(), 1, "no fix for {prop}");
        assert_eq!(fixes[0].changes[0].text_changes[0].new_text, expected);
    }
}

#[test]
fn empty_literal_inserts_inside_the_brace() {
    let s = fixture("limit", Container::Array, &[], Sibling::Interface);
    let svc = wrap(s, &FilterConfig::default());

    let fixes = request_fix(&svc, &[diagnostic_codes::PROPERTY_DOES_NOT_EXIST]);
    let change = &fixes[0].changes[0].text_changes[0];
    assert_eq!(change.span.start, LIT_START + 1);
    assert_eq!(change.new_text, "limit: 0");
}

#[test]
fn fix_requires_the_property_does_not_exist_code() {
    let s = fixture("limit", Container::Array, &[NAME_PROP], Sibling::Interface);
    let svc = wrap(s, &FilterConfig::default());

    let fixes = request_fix(&svc, &[diagnostic_codes::PROPERTY_DOES_NOT_EXIST_DID_YOU_MEAN]);
    assert!(fixes.is_empty());
}

#[test]
fn fix_is_appended_to_engine_fixes() {
    let mut s = fixture("limit", Container::Array, &[NAME_PROP], Sibling::Interface);
    s.stub_code_fixes(
        FILE,
        ANCHOR,
        vec![CodeFixAction::new(
            "spelling",
            "Change spelling",
            vec![FileTextChanges::new(FILE, Vec::new())],
        )],
    );
    let svc = wrap(s, &FilterConfig::default());

    let fixes = request_fix(&svc, &[diagnostic_codes::PROPERTY_DOES_NOT_EXIST]);
    assert_eq!(fixes.len(), 2);
    assert_eq!(fixes[0].fix_name, "spelling");
    assert_eq!(fixes[1].fix_name, "addInferredQueryProperty");
}

#[test]
fn no_fix_when_property_is_unknown_to_the_interface() {
    let s = fixture(
        "nonexistent",
        Container::Array,
        &[NAME_PROP],
        Sibling::Interface,
    );
    let svc = wrap(s, &FilterConfig::default());

    let fixes = request_fix(&svc, &[diagnostic_codes::PROPERTY_DOES_NOT_EXIST]);
    assert!(fixes.is_empty());
}
