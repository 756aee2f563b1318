//! Title search helpers.
//!
//! These live in `core` so the repository layer and its callers agree on
//! what counts as "no filter" and how a term becomes a `LIKE` pattern.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Term handling
// ---------------------------------------------------------------------------

/// Reduce an optional user-supplied term to the filter actually applied.
///
/// Only an absent or empty term yields `None`, meaning "no filter". Any
/// other term is matched exactly as typed, whitespace included.
pub fn normalize_term(term: Option<&str>) -> Option<&str> {
    term.filter(|t| !t.is_empty())
}

/// Reject terms PostgreSQL cannot bind as text.
pub fn validate_term(term: &str) -> Result<(), CoreError> {
    if term.contains('\0') {
        return Err(CoreError::Validation(
            "search term must not contain NUL characters".into(),
        ));
    }
    Ok(())
}

/// Build a case-insensitive substring pattern (`%term%`) for `ILIKE`.
///
/// `%`, `_` and `\` in the term are escaped with `\` (PostgreSQL's default
/// `LIKE` escape character) so they match literally.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
