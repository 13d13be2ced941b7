//! Common types for the sift language-service middleware.
//!
//! This crate provides the foundational types shared by every sift crate:
//! - Source spans and text changes (`TextSpan`, `TextChange`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`)
//! - Well-known engine diagnostic codes

// Span - source location tracking (byte offsets)
pub mod span;
pub use span::{TextChange, TextSpan};

// Diagnostics and the engine's well-known error codes
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, diagnostic_codes};
