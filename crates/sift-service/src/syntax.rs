//! Syntax-tree surface exposed by the wrapped engine.
//!
//! The middleware never walks the engine's real tree; it asks for a node's
//! classified [`NodeShape`] and pattern-matches on the result. The sum type
//! deliberately carries only the node kinds the query-shape inferencer
//! handles; everything else collapses to [`NodeShape::Other`].

use serde::{Deserialize, Serialize};
use sift_common::TextSpan;

/// Opaque handle to a syntax node owned by the engine.
///
/// Handles are engine-scoped: a node keeps its id regardless of which file
/// it lives in, so declaration sites in other files resolve uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// A property of an object-literal expression, by name and source range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyEntry {
    pub name: String,
    /// The range of the whole property (name through initializer).
    pub span: TextSpan,
}

impl PropertyEntry {
    pub fn new(name: impl Into<String>, span: TextSpan) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// The classified shape of a syntax node.
///
/// One arm per node kind the inferencer's container-context classification
/// distinguishes; matching is exhaustive at every use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeShape {
    /// `obj.prop`, a property access expression.
    PropertyAccess {
        /// The expression being accessed.
        object: NodeId,
        /// The accessed property name.
        name: String,
    },
    /// `{ a: 1, b: 2 }`, an object-literal expression.
    ObjectLiteral {
        /// The full range of the literal, opening brace through closing brace.
        span: TextSpan,
        /// The literal's properties, in source order.
        properties: Vec<PropertyEntry>,
    },
    /// `[x, y, z]`, an array-literal expression.
    ArrayLiteral {
        /// Element nodes, in source order.
        elements: Vec<NodeId>,
    },
    /// `name: value`, a property assignment inside an object literal.
    PropertyAssignment {
        /// The property name, when it is a plain identifier. Computed names
        /// carry `None` and opt out of inference.
        name: Option<String>,
        /// The name node (identifier or computed expression).
        name_node: NodeId,
        /// The assigned value expression.
        initializer: NodeId,
    },
    /// Any node kind the middleware does not distinguish.
    Other,
}
