//! Channel name helpers.
//!
//! Discord lowercases channel names anyway, but the bot relies on the exact shape for
//! the LFG cleanup job, so names are normalised before they are sent.

const MAX_SLUG_LEN: usize = 32;

/// Builds a short dash-separated slug from free text.
///
/// Keeps ASCII letters, digits and whitespace, takes the first five words and caps the
/// result at 32 characters. Returns `fallback` when nothing usable remains.
///
/// # Arguments
/// - `text` - User supplied text
/// - `fallback` - Slug used for empty results
pub fn words(text: &str, fallback: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    let slug = truncate(
        &cleaned.split_whitespace().take(5).collect::<Vec<_>>().join("-"),
        MAX_SLUG_LEN,
    );

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Normalises an already dash-joined name.
///
/// Lowercases, drops everything but ASCII letters, digits and dashes, and caps the
/// result at 32 characters.
pub fn channel_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    truncate(&cleaned, MAX_SLUG_LEN)
}

fn truncate(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}
