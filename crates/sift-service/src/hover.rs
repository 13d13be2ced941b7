//! Hover and signature-help shapes, forwarded without modification.

use serde::{Deserialize, Serialize};
use sift_common::TextSpan;

/// Quick-info (hover) payload for a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickInfo {
    /// Rendered type/signature text.
    pub display_text: String,
    /// The range the info applies to.
    pub span: TextSpan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// One callable signature within signature help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInfo {
    /// Rendered signature label, e.g. `find(query: Query): Item[]`.
    pub label: String,
    /// Parameter labels, in declaration order.
    pub parameters: Vec<String>,
}

/// Signature help for a call expression under the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelp {
    pub signatures: Vec<SignatureInfo>,
    /// Index into `signatures` of the best-matching overload.
    pub selected_signature: u32,
    /// Index of the argument the cursor is on.
    pub argument_index: u32,
}
