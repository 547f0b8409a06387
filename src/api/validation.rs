//! Helpers that normalise user-supplied values before they reach the database.

use regex::Regex;

lazy_static::lazy_static! {
    static ref NON_ALNUM_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derives a URL-safe slug from a company name: transliterated to ASCII,
/// lowercase, each run of non-alphanumeric characters collapsed to one
/// `-`, no leading or trailing `-`.
pub fn slugify(name: &str) -> String {
    let lowered = deunicode::deunicode(name).to_lowercase();
    NON_ALNUM_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
