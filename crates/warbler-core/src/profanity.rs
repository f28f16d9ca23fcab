//! Post body cleaning.
//!
//! Masks a small fixed list of disallowed words. Matching is case-insensitive
//! and whole-word only (split on spaces), so punctuation-attached occurrences
//! pass through untouched.

const MASKED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];
const MASK: &str = "****";

/// Replaces each disallowed word in `body` with `****`, preserving the
/// original spacing of everything else.
pub fn clean_body(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            if MASKED_WORDS.contains(&word.to_lowercase().as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
