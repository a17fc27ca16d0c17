//! Substring search filter.
//!
//! List endpoints accept an optional `searchTerm`; when present, a record
//! matches if any of the configured text fields case-insensitively contains
//! the term as a substring. The filter is applied in storage as
//! `LIKE '%…%' ESCAPE '\'`, so the raw term must be escaped before it ever
//! becomes part of a pattern: a `%` or `_` typed by the user matches
//! literally, never as a wildcard.

/// Escape LIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// A case-insensitive substring filter built from an optional search term.
///
/// Empty and whitespace-only terms are treated as absent, matching everything.
#[derive(Debug, Clone, Default)]
pub struct ContainsFilter {
    term: Option<String>,
}

impl ContainsFilter {
    /// Build a filter from a raw, user-supplied term.
    pub fn new(term: Option<&str>) -> Self {
        let term = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Self { term }
    }

    /// Filter that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// The raw term, if one was supplied.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// The escaped `%…%` pattern to bind into a `LIKE ... ESCAPE '\'` clause,
    /// or `None` when the filter is unconstrained.
    pub fn like_pattern(&self) -> Option<String> {
        self.term.as_deref().map(|t| format!("%{}%", escape_like(t)))
    }
}
