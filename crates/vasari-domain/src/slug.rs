//! Slug module - identifier fragments derived from free text

/// Derive an identifier fragment from free text
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen and strips leading and trailing hyphens.
/// Distinct inputs may produce the same slug; uniqueness is checked
/// downstream by the validator.
///
/// # Examples
///
/// ```
/// use vasari_domain::slugify;
///
/// assert_eq!(slugify("Fitts's Law"), "fitts-s-law");
/// assert_eq!(slugify("--Already--Slugged--"), "already-slugged");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
