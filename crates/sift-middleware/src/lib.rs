//! Filtering and inference middleware over a wrapped language service.
//!
//! `sift` interposes between an editor host and a language analysis engine.
//! It forwards every operation of the engine's query interface unchanged,
//! except for three:
//!
//! - **Completions** are filtered against configured exclusion sets (noisy
//!   globals, prototype members), then augmented with fields inferred for
//!   query-like object literals from a sibling interface in the contextual
//!   union type.
//! - **References** are stripped of definition sites, leaving usages only.
//! - **Code fixes** gain one extra fix when the diagnostic is "property does
//!   not exist" and the missing property can be inferred: an edit inserting
//!   the property with a type-appropriate placeholder literal.
//!
//! The middleware holds no state beyond the wrapped service and the
//! exclusion sets; every analysis result is recomputed per call. Absence of
//! an answer at any point degrades to "offer nothing extra"; only genuine
//! engine failures surface to the host, unchanged.
//!
//! # Usage
//!
//! ```ignore
//! let service = sift_middleware::wrap(engine_service, &FilterConfig::default());
//! host.register(service); // implements LanguageService
//! ```

pub mod config;
pub mod filters;
pub mod infer;
pub mod proxy;

pub use config::{ExclusionSets, FilterConfig};
pub use proxy::{FilteredService, wrap};
