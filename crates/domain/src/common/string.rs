//! String conversion utilities.

/// Converts a display name into a strict, lowercase slug.
///
/// Leading/trailing whitespace is trimmed, runs of whitespace and hyphens
/// collapse to a single `-`, and anything outside `[a-z0-9-]` is dropped.
/// Used to key items in roll data so expressions can reference
/// `@items.healing-herb`.
///
/// # Examples
///
/// ```
/// use ryuutama_domain::common::slugify;
///
/// assert_eq!(slugify("Healing Herb"), "healing-herb");
/// assert_eq!(slugify("  Traveler's   Cloak "), "travelers-cloak");
/// assert_eq!(slugify("Rope (10m)"), "rope-10m");
/// ```
pub fn slugify(value: &str) -> String {
    let mut collapsed = String::with_capacity(value.len());
    let mut in_separator = false;
    for c in value.trim().chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            if !in_separator {
                collapsed.push('-');
            }
            in_separator = true;
        } else {
            collapsed.push(c);
            in_separator = false;
        }
    }

    // Strict mode: separators are collapsed before anything else is dropped
    collapsed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}
