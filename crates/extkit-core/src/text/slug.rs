use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::SlugOptions;
use crate::text::ascii_lossy;

/// Parenthetical groups and the whitespace leading into them
static PARENTHETICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").expect("PARENTHETICAL_RE should compile"));

static INVALID_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("INVALID_CHARS_RE should compile"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RE should compile"));

/// Replace accented letters with their base letter.
/// Characters with no ASCII base become `?`.
pub fn remove_accents(input: &str) -> String {
    ascii_lossy(input.nfd().filter(|c| !is_combining_mark(*c))).collect()
}

/// Turn a title into a URL slug of at most 45 characters.
///
/// ```
/// use extkit_core::text::slugify;
///
/// assert_eq!(slugify("Testing some (new) changes (blah)"), "testing-some-changes");
/// ```
pub fn slugify(input: &str) -> String {
    slugify_with(input, &SlugOptions::default())
}

pub fn slugify_with(input: &str, options: &SlugOptions) -> String {
    let slug = remove_accents(input).to_ascii_lowercase();
    let slug = PARENTHETICAL_RE.replace_all(&slug, "");
    let slug = INVALID_CHARS_RE.replace_all(&slug, "");
    let slug = WHITESPACE_RE.replace_all(&slug, " ");

    // only ASCII is left, so bytes are chars
    let slug = slug.trim();
    let slug = slug[..slug.len().min(options.max_len)].trim();

    slug.replace(' ', "-")
}
