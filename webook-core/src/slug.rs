//! Slug generation for artifact file names.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static HYPHEN_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Convert a document title to a file-name-safe slug
///
/// Lowercases, turns whitespace and underscores into hyphens, drops
/// punctuation and symbols (unicode letters survive), collapses hyphen runs
/// and trims hyphens from both ends.
///
/// # Examples
///
/// ```
/// use webook_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Rust & Safety"), "rust-safety");
/// assert_eq!(slugify("Lekcja 1: Żółw"), "lekcja-1-żółw");
/// ```
pub fn slugify(input: &str) -> String {
    let cleaned = input
        .to_lowercase()
        .graphemes(true)
        .filter_map(|g| {
            let c = g.chars().next()?;
            if c.is_whitespace() || c == '_' || c == '-' {
                Some("-")
            } else if c.is_alphanumeric() {
                Some(g)
            } else {
                None
            }
        })
        .collect::<String>();

    HYPHEN_RUNS
        .replace_all(&cleaned, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Intro to Rust"), "intro-to-rust");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_special_characters() {
        assert_eq!(slugify("C++ Programming"), "c-programming");
        assert_eq!(slugify("snake_case_title"), "snake-case-title");
        assert_eq!(slugify("🎓 Course"), "course");
        assert_eq!(slugify("!!!"), "");
    }
}
