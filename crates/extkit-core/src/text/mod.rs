//! String helpers: HTML-aware truncation, plain truncation, slugs and hashing.

pub mod hash;
pub mod html;
pub mod slug;
pub mod truncate;

pub use hash::md5_hex;
pub use html::{strip_html, truncate_html, truncate_html_with};
pub use slug::{remove_accents, slugify, slugify_with};
pub use truncate::{truncate, truncate_words};

/// Map every non-ASCII character to `?`
pub(crate) fn ascii_lossy(chars: impl Iterator<Item = char>) -> impl Iterator<Item = char> {
    chars.map(|c| if c.is_ascii() { c } else { '?' })
}
