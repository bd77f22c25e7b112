// Document content helpers: JSON well-formedness check and compact canonical form.
//
// Content is stored as JSON text. Only syntax is checked here; the block
// structure inside is owned by the editor clients.

use serde_json::Value;

/// Default content for new documents: an editor payload with no blocks.
pub const EMPTY_DOCUMENT_CONTENT: &str = r#"{"blocks":[]}"#;

/// Returned by [`canonicalize`] when the input is not valid JSON.
pub const FALLBACK_CONTENT: &str = "{}";

/// Returns `true` if `text` parses as any JSON value (object, array or scalar).
///
/// Empty and whitespace-only input is never valid.
pub fn is_valid_json(text: &str) -> bool {
    parse(text).is_some()
}

/// Re-serialize `text` in compact form with no inserted whitespace.
///
/// Invalid input degrades to [`FALLBACK_CONTENT`] instead of failing.
/// Object keys keep their original order and numbers keep their literal
/// digits, so applying this twice yields the same string as applying it once.
pub fn canonicalize(text: &str) -> String {
    parse(text)
        .and_then(|value| serde_json::to_string(&value).ok())
        .unwrap_or_else(|| FALLBACK_CONTENT.to_owned())
}

/// Owned copy of [`EMPTY_DOCUMENT_CONTENT`].
pub fn empty_document_content() -> String {
    EMPTY_DOCUMENT_CONTENT.to_owned()
}

fn parse(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<Value>(text).ok()
}
