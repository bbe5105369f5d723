use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// A final run of non-space characters preceded by whitespace
static PARTIAL_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\S+$").expect("PARTIAL_WORD_RE should compile"));

/// Byte offset at which `text` must be cut to keep `max_chars` characters,
/// or `None` if it already fits.
pub(crate) fn cut_offset(text: &str, max_chars: usize) -> Option<usize> {
    text.char_indices().nth(max_chars).map(|(idx, _)| idx)
}

/// Remove a trailing partial word, i.e. the last whitespace-separated run.
fn trim_partial_word(text: &str) -> Cow<'_, str> {
    PARTIAL_WORD_RE.replace(text, "")
}

/// Truncate text to a number of characters, adding `trailing` (e.g. an
/// ellipsis) when anything was cut.
///
/// Empty text and a zero limit leave the input untouched.
pub fn truncate(text: &str, max_chars: usize, trailing: &str) -> String {
    if text.is_empty() || max_chars == 0 {
        return text.to_string();
    }
    match cut_offset(text, max_chars) {
        Some(cut) => format!("{}{}", &text[..cut], trailing),
        None => text.to_string(),
    }
}

/// Truncate text to a number of characters and discard any partial word
/// left at the end, then add `trailing`.
///
/// The last word of the cut text is always dropped when it is preceded by
/// whitespace, even if the cut happened to land exactly on a word end.
/// A single word longer than `max_chars` is kept cut mid-word.
pub fn truncate_words(text: &str, max_chars: usize, trailing: &str) -> String {
    if text.is_empty() || max_chars == 0 {
        return text.to_string();
    }
    match cut_offset(text, max_chars) {
        Some(cut) => {
            let mut out = trim_partial_word(&text[..cut]).into_owned();
            out.push_str(trailing);
            out
        }
        None => text.to_string(),
    }
}
