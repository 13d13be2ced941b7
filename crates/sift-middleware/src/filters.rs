//! Post-processing filters for completion and reference results.
//!
//! Both filters operate on owned results and return new values; the wrapped
//! engine's own data is never mutated in place. Both pass absence through
//! unchanged: a request the engine answered with nothing stays unanswered.

use tracing::debug;

use sift_service::{CompletionResult, ReferencedSymbol};

use crate::config::ExclusionSets;

/// Drop excluded entries from a completion result.
///
/// Policy, in order:
/// 1. entries named in the always-set are dropped unconditionally;
/// 2. on a global completion, entries named in the global set are dropped;
/// 3. on a member completion, entries named in the member set are dropped.
///
/// Surviving entries keep their relative order; nothing is added, re-sorted,
/// or renamed, and the completion-context flags are untouched.
pub fn filter_completions(
    result: Option<CompletionResult>,
    sets: &ExclusionSets,
) -> Option<CompletionResult> {
    let mut result = result?;
    let before = result.entries.len();
    let is_global = result.is_global_completion;
    let is_member = result.is_member_completion;

    result.entries.retain(|entry| {
        if sets.excludes_always(&entry.name) {
            return false;
        }
        if is_global && sets.excludes_global(&entry.name) {
            return false;
        }
        if is_member && sets.excludes_member(&entry.name) {
            return false;
        }
        true
    });

    if result.entries.len() != before {
        debug!(
            dropped = before - result.entries.len(),
            remaining = result.entries.len(),
            "excluded completion entries"
        );
    }
    Some(result)
}

/// Drop definition sites from a reference result, leaving usages only.
///
/// Each symbol group keeps its identity and position; only its location list
/// shrinks. A group whose references were all definitions stays in the
/// result with an empty list; consumers still learn the symbol exists.
pub fn strip_definition_sites(
    results: Option<Vec<ReferencedSymbol>>,
) -> Option<Vec<ReferencedSymbol>> {
    let mut results = results?;
    for group in &mut results {
        group.references.retain(|reference| !reference.is_definition);
    }
    Some(results)
}
