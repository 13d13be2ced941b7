//! Type surface exposed by the wrapped engine.

use serde::{Deserialize, Serialize};

/// Opaque handle to a type owned by the engine's checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u32);

/// Coarse classification of a type, sufficient to pick a placeholder
/// literal for it.
///
/// A single classification query replaces a scatter of `is_number`-style
/// predicates; array-likeness is a separate capability check because it cuts
/// across the object category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFlavor {
    /// `number`, numeric literals, numeric enums.
    Number,
    /// `string`, string literals, template literal types.
    String,
    /// `boolean` and boolean literals.
    Boolean,
    /// Everything else: objects, unions, callables, type parameters, ...
    Other,
}

/// A named property of a type, with its resolved type when the engine can
/// provide one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySymbol {
    pub name: String,
    /// The property's type; `None` when resolution failed.
    pub ty: Option<TypeId>,
}

impl PropertySymbol {
    pub fn new(name: impl Into<String>, ty: Option<TypeId>) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
