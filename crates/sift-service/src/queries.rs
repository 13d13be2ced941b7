//! Read-only semantic queries against the wrapped engine.

use crate::syntax::{NodeId, NodeShape};
use crate::types::{PropertySymbol, TypeFlavor, TypeId};

/// The read-only syntax/type queries the query-shape inferencer issues
/// against the wrapped engine.
///
/// Every query is expected to fail often: a `None` or empty answer is the
/// ordinary outcome for positions that do not match the inferencer's
/// patterns, not an error. Implementations must be side-effect free; the
/// middleware may issue these queries on every completion request.
pub trait SemanticQueries {
    /// The token at a byte offset in a file, or `None` when the engine has
    /// no source for the file or no token covers the offset.
    fn token_at(&self, file: &str, offset: u32) -> Option<NodeId>;

    /// The syntactic parent of a node, `None` at the root.
    fn parent_of(&self, node: NodeId) -> Option<NodeId>;

    /// The classified shape of a node.
    fn shape_of(&self, node: NodeId) -> NodeShape;

    /// The static type of an expression node.
    fn type_at(&self, node: NodeId) -> Option<TypeId>;

    /// The contextual type of a node: the type its surrounding usage
    /// expects, e.g. the declared element type at an assignment target.
    fn contextual_type_of(&self, node: NodeId) -> Option<TypeId>;

    /// The declaration site of a type: the node its shape was inferred or
    /// declared from.
    fn declaration_of(&self, ty: TypeId) -> Option<NodeId>;

    /// The members of a union type, in engine order. Empty when `ty` is not
    /// a union.
    fn union_members_of(&self, ty: TypeId) -> Vec<TypeId>;

    /// The named properties of a type.
    fn properties_of(&self, ty: TypeId) -> Vec<PropertySymbol>;

    /// Coarse classification of a type for placeholder synthesis.
    fn flavor_of(&self, ty: TypeId) -> TypeFlavor;

    /// Whether the type is array-like (arrays, tuples, and array subtypes).
    fn is_array_like(&self, ty: TypeId) -> bool;
}
