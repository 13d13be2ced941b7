//! Exclusion-set configuration.
//!
//! The sets are plain name lists compiled once into hash sets when the
//! middleware is constructed, then only ever read. There is no module-scope
//! state: the host owns a [`FilterConfig`], the proxy owns the compiled
//! [`ExclusionSets`], and the filters borrow them per call.

use rustc_hash::FxHashSet;
use serde::Deserialize;

/// Names suppressed from every completion result regardless of kind.
/// Legacy `Object.prototype` accessors that leak into member lists and are
/// never what the user is typing toward.
pub const DEFAULT_ALWAYS_EXCLUDES: &[&str] = &[
    "__proto__",
    "__defineGetter__",
    "__defineSetter__",
    "__lookupGetter__",
    "__lookupSetter__",
];

/// Names suppressed from global (file-scope) completions.
/// Window/global-object properties that shadow common identifiers and crowd
/// out project symbols in script-style files.
pub const DEFAULT_GLOBAL_EXCLUDES: &[&str] = &[
    "blur",
    "close",
    "closed",
    "event",
    "external",
    "focus",
    "history",
    "length",
    "location",
    "name",
    "open",
    "origin",
    "parent",
    "print",
    "self",
    "status",
    "stop",
    "top",
];

/// Names suppressed from member completions.
/// `Object.prototype` members present on every value; they bury the members
/// that belong to the type actually under the dot.
pub const DEFAULT_MEMBER_EXCLUDES: &[&str] = &[
    "constructor",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "toLocaleString",
    "toString",
    "valueOf",
];

/// Host-supplied exclusion configuration.
///
/// Deserializable from the host's JSON plugin-configuration blob. A field
/// left out keeps the built-in default for that set; an explicit (possibly
/// empty) list replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Replaces [`DEFAULT_ALWAYS_EXCLUDES`] when present.
    pub exclude_always: Option<Vec<String>>,
    /// Replaces [`DEFAULT_GLOBAL_EXCLUDES`] when present.
    pub exclude_globals: Option<Vec<String>>,
    /// Replaces [`DEFAULT_MEMBER_EXCLUDES`] when present.
    pub exclude_members: Option<Vec<String>>,
}

impl FilterConfig {
    /// Parse a configuration from the host's JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// The compiled, immutable exclusion sets.
///
/// Constructed once per middleware instance and shared by reference with the
/// completion filter; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ExclusionSets {
    all: FxHashSet<String>,
    globals: FxHashSet<String>,
    members: FxHashSet<String>,
}

fn compile(overrides: Option<&[String]>, defaults: &[&str]) -> FxHashSet<String> {
    match overrides {
        Some(names) => names.iter().cloned().collect(),
        None => defaults.iter().map(|s| (*s).to_string()).collect(),
    }
}

impl ExclusionSets {
    /// Compile a host configuration into lookup sets.
    pub fn from_config(config: &FilterConfig) -> Self {
        Self {
            all: compile(config.exclude_always.as_deref(), DEFAULT_ALWAYS_EXCLUDES),
            globals: compile(config.exclude_globals.as_deref(), DEFAULT_GLOBAL_EXCLUDES),
            members: compile(config.exclude_members.as_deref(), DEFAULT_MEMBER_EXCLUDES),
        }
    }

    /// Whether `name` is suppressed regardless of completion kind.
    pub fn excludes_always(&self, name: &str) -> bool {
        self.all.contains(name)
    }

    /// Whether `name` is suppressed from global completions.
    pub fn excludes_global(&self, name: &str) -> bool {
        self.globals.contains(name)
    }

    /// Whether `name` is suppressed from member completions.
    pub fn excludes_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }
}

impl Default for ExclusionSets {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}
