//! Deterministic slug derivation for page titles.
//!
//! Matches the backend's expectation for page URLs: lowercase, punctuation
//! stripped outright (not hyphenated), whitespace runs collapsed to a single
//! hyphen. A slug is derived from the title only while a page is being
//! created; existing pages keep their slug when the title changes (see
//! `application::forms::PageForm`).

/// Derive a URL slug from a human-readable title.
///
/// `"Sunday Service"` becomes `sunday-service`; `"Men's Breakfast!!"`
/// becomes `mens-breakfast`.
pub fn derive_slug(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.trim().chars() {
        if ch.is_whitespace() {
            pending_hyphen = !out.is_empty();
            continue;
        }
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen {
                out.push('-');
                pending_hyphen = false;
            }
            out.push(ch);
        } else if ch == '-' {
            // Explicit hyphens survive, but never doubled.
            pending_hyphen = !out.is_empty();
        }
    }

    out
}
