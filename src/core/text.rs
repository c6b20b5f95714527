use std::collections::HashSet;

/// Split a comma-separated free-text field into normalized tokens.
///
/// Tokens are trimmed and lowercased; empty tokens are dropped. Order of first
/// appearance is preserved and duplicates are kept.
pub fn split_tokens(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalized token set of a comma-separated field
pub fn token_set(field: &str) -> HashSet<String> {
    split_tokens(field).into_iter().collect()
}

#[inline]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// First whitespace-separated word of a title, lowercased
pub fn first_word(title: &str) -> Option<String> {
    title.split_whitespace().next().map(str::to_lowercase)
}

/// Region part of a location: everything before the first comma, trimmed
pub fn region_of(location: &str) -> &str {
    location.split(',').next().unwrap_or("").trim()
}
