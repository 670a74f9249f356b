//! String utilities for the domain layer.

/// Human label for an inquiry slug: `hiring-partner` → `hiring partner`
///
/// Only the first hyphen becomes a space, so `job-seeker-support` reads
/// `job seeker-support`.
pub fn slug_to_label(slug: &str) -> String {
    slug.trim().replacen('-', " ", 1)
}

/// Number of characters after trimming surrounding whitespace.
///
/// Counts Unicode scalar values, not bytes, so `"héllo"` has length 5.
pub fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}
