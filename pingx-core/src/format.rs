//! Display formatting for response bodies.

/// Pretty-print a JSON string for display.
///
/// Anything that does not parse as JSON is returned unchanged, so this never
/// fails and is safe to apply to arbitrary response text. Applying it twice
/// yields the same result.
pub fn pretty(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| text.to_string()),
        Err(_) => text.to_string(),
    }
}
