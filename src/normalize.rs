//! Noise removal applied before parsing.

const THUNK_MARKER: &str = "[thunk]:";

/// Remove every `[thunk]:` marker and trim surrounding whitespace.
pub fn normalize(signature: &str) -> String {
    let mut out = signature.to_string();
    // Loop so that markers formed by a removal are stripped too.
    while out.contains(THUNK_MARKER) {
        out = out.replace(THUNK_MARKER, "");
    }
    out.trim().to_string()
}
