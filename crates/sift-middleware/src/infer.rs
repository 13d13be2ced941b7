//! Query-shape inference.
//!
//! Detects the "query literal" pattern: a property access on an object whose
//! type was inferred from an object literal, where that literal sits inside
//! an array literal or a named property assignment whose contextual type is a
//! union containing a sibling interface. Fields present on the sibling but
//! missing from the literal are offered as completions and as a code fix
//! inserting the field with a placeholder value.
//!
//! The whole analysis is recomputed from scratch on every call and touches
//! only the immediate syntax neighborhood of the cursor. Every step that
//! fails to resolve ends the analysis with no inference; that is the
//! expected outcome for ordinary completions, not an error.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use sift_common::{TextChange, TextSpan, diagnostic_codes};
use sift_service::completions::sort_priority;
use sift_service::{
    CodeFixAction, CompletionItem, CompletionItemKind, CompletionResult, FileTextChanges,
    NodeShape, PropertyEntry, SemanticQueries, TypeFlavor, TypeId,
};

/// The object literal whose properties may be extended.
#[derive(Debug, Clone)]
pub struct QueryObject {
    /// Full range of the literal, braces included.
    pub span: TextSpan,
    /// Existing properties, in source order.
    pub properties: Vec<PropertyEntry>,
}

/// Result of one query-shape analysis.
///
/// Transient: lives for the duration of a single completion or code-fix
/// request.
#[derive(Debug, Clone)]
pub struct QueryShape {
    /// The property name under the cursor.
    pub prop_name: String,
    /// The literal to extend; `None` when the representative element was not
    /// itself an object literal (completions still work, fixes do not).
    pub query_object: Option<QueryObject>,
    /// The union member the literal is being completed against.
    pub original_interface: TypeId,
    /// The type of `prop_name` on the original interface, when it resolves.
    pub prop_type: Option<TypeId>,
}

/// Run the analysis at a position.
///
/// Steps: token → property access → object type → literal declaration →
/// container classification → union disambiguation → property resolution.
/// Any unresolvable step returns `None`.
pub fn analyze<E: SemanticQueries>(engine: &E, file: &str, offset: u32) -> Option<QueryShape> {
    let token = engine.token_at(file, offset)?;
    let access = engine.parent_of(token)?;

    let NodeShape::PropertyAccess {
        object,
        name: prop_name,
    } = engine.shape_of(access)
    else {
        trace!(?token, "token parent is not a property access");
        return None;
    };

    // The accessed object's type must trace back to an object literal.
    let object_type = engine.type_at(object)?;
    let literal_decl = engine.declaration_of(object_type)?;
    let NodeShape::ObjectLiteral { .. } = engine.shape_of(literal_decl) else {
        return None;
    };
    let container = engine.parent_of(literal_decl)?;

    // Classify the literal's container: only elements of a literal array and
    // named literal values participate in inference.
    let (contextual, query_object) = match engine.shape_of(container) {
        NodeShape::ArrayLiteral { elements } => {
            // The first element stands in for the whole array's shape;
            // heterogeneous arrays are judged by it alone.
            let representative = *elements.first()?;
            let contextual = engine.contextual_type_of(representative)?;
            let query_object = match engine.shape_of(representative) {
                NodeShape::ObjectLiteral { span, properties } => {
                    Some(QueryObject { span, properties })
                }
                _ => None,
            };
            (contextual, query_object)
        }
        NodeShape::PropertyAssignment {
            name,
            name_node,
            initializer,
        } => {
            // Computed property names opt out.
            name.as_ref()?;
            let contextual = engine.contextual_type_of(name_node)?;
            let query_object = match engine.shape_of(initializer) {
                NodeShape::ObjectLiteral { span, properties } => {
                    Some(QueryObject { span, properties })
                }
                _ => None,
            };
            (contextual, query_object)
        }
        NodeShape::PropertyAccess { .. } | NodeShape::ObjectLiteral { .. } | NodeShape::Other => {
            trace!(?container, "literal container shape supports no inference");
            return None;
        }
    };

    // The contextual type must be a union with a member declared somewhere
    // other than the literal itself: the sibling shape that fields are
    // borrowed from.
    let original_interface = engine
        .union_members_of(contextual)
        .into_iter()
        .find(|member| engine.declaration_of(*member) != Some(literal_decl))?;

    let prop_type = engine
        .properties_of(original_interface)
        .into_iter()
        .find(|property| property.name == prop_name)
        .and_then(|property| property.ty);

    trace!(
        prop = %prop_name,
        resolved_type = prop_type.is_some(),
        "query shape matched"
    );

    Some(QueryShape {
        prop_name,
        query_object,
        original_interface,
        prop_type,
    })
}

/// Pick a syntactically valid placeholder literal for a property type.
pub fn placeholder_literal<E: SemanticQueries>(engine: &E, ty: TypeId) -> &'static str {
    match engine.flavor_of(ty) {
        TypeFlavor::Number => "0",
        TypeFlavor::String => "''",
        TypeFlavor::Boolean => "true",
        TypeFlavor::Other => {
            if engine.is_array_like(ty) {
                "[{}]"
            } else {
                "{}"
            }
        }
    }
}

/// Offer a fix for a "property does not exist" diagnostic by inserting the
/// missing property into the query object with a placeholder value.
///
/// Returns at most one fix, and only when the diagnostic code matches and
/// the property name, query object, and property type all resolved.
pub fn missing_property_fix<E: SemanticQueries>(
    engine: &E,
    file: &str,
    span: TextSpan,
    error_codes: &[u32],
) -> Option<CodeFixAction> {
    if !error_codes.contains(&diagnostic_codes::PROPERTY_DOES_NOT_EXIST) {
        return None;
    }

    let shape = analyze(engine, file, span.start)?;
    let object = shape.query_object?;
    let prop_type = shape.prop_type?;
    let placeholder = placeholder_literal(engine, prop_type);

    // Insert after the last existing property, or just inside the opening
    // brace when the literal is empty.
    let change = match object.properties.last() {
        Some(last) => TextChange::insert(
            last.span.end(),
            format!(", {}: {}", shape.prop_name, placeholder),
        ),
        None => TextChange::insert(
            object.span.start + 1,
            format!("{}: {}", shape.prop_name, placeholder),
        ),
    };

    debug!(prop = %shape.prop_name, placeholder, "offering inferred-property fix");

    Some(CodeFixAction::new(
        "addInferredQueryProperty",
        format!("Declare property '{}' on the query object", shape.prop_name),
        vec![FileTextChanges::new(file, vec![change])],
    ))
}

/// Append inferred interface fields to a completion result.
///
/// The analysis is anchored one byte before the request position to catch
/// the in-progress property-access token. When no query shape is found the
/// baseline passes through untouched; when the baseline is absent but a
/// shape is found, an empty member completion is synthesized as the base.
pub fn augment_completions<E: SemanticQueries>(
    engine: &E,
    file: &str,
    offset: u32,
    prior: Option<CompletionResult>,
) -> Option<CompletionResult> {
    let Some(shape) = analyze(engine, file, offset.saturating_sub(1)) else {
        return prior;
    };

    let mut result = prior.unwrap_or_else(CompletionResult::empty_member_completion);

    // Fields the literal already defines are not suggested again.
    let already_defined: FxHashSet<&str> = shape
        .query_object
        .iter()
        .flat_map(|object| object.properties.iter())
        .map(|property| property.name.as_str())
        .collect();

    let mut appended = 0usize;
    for property in engine.properties_of(shape.original_interface) {
        if result.has_entry(&property.name) || already_defined.contains(property.name.as_str()) {
            continue;
        }
        result.entries.push(
            CompletionItem::new(&property.name, CompletionItemKind::InterfaceField)
                .with_insert_text(&property.name)
                .with_sort_text(sort_priority::RECOMMENDED)
                .recommended(),
        );
        appended += 1;
    }

    if appended > 0 {
        debug!(appended, "augmented completions with inferred fields");
    }
    Some(result)
}
