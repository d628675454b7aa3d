//! Slug generation and shape checking.
//!
//! Slugs are collision-avoidance identifiers, not security tokens, so the
//! thread-local RNG is sufficient. Uniqueness is enforced by the store's key
//! constraint, not here; callers handle collisions (see
//! [`crate::application::services::LinkService`]).

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Number of characters in a generated slug.
pub const SLUG_LENGTH: usize = 6;

/// Base-36 alphabet slugs are drawn from: digits then lowercase letters.
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Compiled regex matching the exact slug shape.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]{6}$").unwrap());

/// Generates a random 6-character base-36 slug.
///
/// Each position is sampled uniformly from `[0-9a-z]`. Pure generation, no
/// I/O, no uniqueness guarantee: the slug space is 36^6 ≈ 2.18e9, so
/// collisions are non-negligible at scale and must be handled by the caller.
///
/// # Examples
///
/// ```
/// use shortqr::utils::slug::generate_slug;
///
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 6);
/// assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_slug() -> String {
    let mut rng = rand::rng();

    (0..SLUG_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `candidate` has the exact shape of a generated slug.
///
/// Used by the redirect path to reject obviously malformed slugs before
/// touching the store. Lookup itself remains exact-match.
pub fn is_slug_shaped(candidate: &str) -> bool {
    SLUG_REGEX.is_match(candidate)
}
