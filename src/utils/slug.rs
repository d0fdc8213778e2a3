//! Slug derivation and collision disambiguation.
//!
//! Slugs are URL-safe identifiers derived from human-readable names. When a
//! derived slug collides with an existing one, a short random suffix is
//! appended. The suffixed slug is not re-checked: the residual collision
//! probability is accepted and, if hit, surfaces as a unique-constraint
//! conflict at insert time.

use rand::Rng;

/// Characters used for collision suffixes. Lowercase only, so a suffixed
/// slug has the same shape as a derived one.
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Derives a URL-safe slug from a human-readable name.
///
/// Lowercases the input, replaces every run of non-alphanumeric characters
/// with a single hyphen, and trims leading/trailing hyphens.
///
/// The result may be empty when the input contains no alphanumeric
/// characters; callers are expected to handle that case.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Generates a random lowercase-alphanumeric suffix of 5 to 7 characters.
pub fn random_suffix() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(5..=7);

    (0..len)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// Appends a random suffix to a colliding slug.
///
/// An empty candidate (a name with no alphanumeric characters) becomes the
/// bare suffix rather than a leading-hyphen slug.
pub fn disambiguate(slug: &str) -> String {
    if slug.is_empty() {
        random_suffix()
    } else {
        format!("{}-{}", slug, random_suffix())
    }
}
