//! URL slug generation and validation.

/// Maximum slug length accepted for profiles and generated for news.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Converts free text into a lowercase, hyphen-separated slug.
///
/// Non-ASCII letters are transliterated (`é` becomes `e`), the result is cut to
/// [`MAX_SLUG_LENGTH`] without a trailing hyphen. Returns an empty string when nothing
/// usable remains.
pub fn slugify(input: &str) -> String {
    let mut slug = slug::slugify(input);

    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// Whether `slug` is already in canonical form: `[a-z0-9-]`, 1 to 64 characters.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Returns `base` with a numeric suffix: `base-2`, `base-3`, ...
pub fn with_suffix(base: &str, n: u32) -> String {
    format!("{base}-{n}")
}
