//! HTML-aware truncation and tag stripping.
//!
//! `truncate_html` counts only visible text towards the limit, cuts on a
//! word boundary and then re-closes every element the cut left open:
//!
//! ```
//! use extkit_core::text::truncate_html;
//!
//! let html = "<p>Hello <b>World</b> again</p>";
//! assert_eq!(truncate_html(html, 14, "..."), "<p>Hello <b>World</b>...</p>");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::config::TruncateOptions;

/// Opening (`<name ...>`), closing (`</name>`) and self-closing
/// (`<name .../>`) tags, possibly spanning lines. Attributes are matched
/// but not captured.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(?:(?P<tag>[^\s/>]+)|/(?P<close>[^\s>]+))[^>]*?(?P<self_close>/)?\s*>")
        .expect("TAG_RE should compile")
});

/// Anything between angle brackets, across lines
static STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("STRIP_RE should compile"));

/// Elements that never take a closing tag, even without a trailing `/`
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Truncate an HTML fragment to `max_chars` visible text characters,
/// keeping whole words, closing any tags left open and appending
/// `trailing` if anything was cut.
///
/// Markup is never validated: unmatched closing tags are tolerated and
/// the function cannot fail. A fragment whose text already fits is
/// returned unchanged.
pub fn truncate_html(html: &str, max_chars: usize, trailing: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let Some(cut) = text_limit_offset(html, max_chars) else {
        return html.to_string();
    };
    trace!(max_chars, cut, len = html.len(), "Truncating html");

    let kept = trim_partial_word(&html[..cut]);
    let open_tags = unclosed_tags(kept);

    let closing_len: usize = open_tags.iter().map(|t| t.len() + 3).sum();
    let mut out = String::with_capacity(kept.len() + trailing.len() + closing_len);
    out.push_str(kept);
    out.push_str(trailing);

    // close remaining tags, innermost first
    for tag in open_tags.iter().rev() {
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out
}

/// [`truncate_html`] with the trailing text taken from `options`.
pub fn truncate_html_with(html: &str, max_chars: usize, options: &TruncateOptions) -> String {
    truncate_html(html, max_chars, &options.trailing)
}

/// Strip all HTML tags from a string.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    STRIP_RE.replace_all(html, "").into_owned()
}

/// Byte offset where the text-character count reaches `max_chars`.
///
/// Returns `None` when no text follows that point, i.e. the fragment does
/// not need truncating.
fn text_limit_offset(html: &str, max_chars: usize) -> Option<usize> {
    let mut text_count = 0usize;
    let mut in_tag = false;

    for (idx, c) in html.char_indices() {
        if text_count >= max_chars {
            return text_remains(&html[idx..], in_tag).then_some(idx);
        }
        if c == '<' {
            in_tag = true;
        } else if !in_tag {
            text_count += 1;
        }
        if c == '>' {
            in_tag = false;
        }
    }
    None
}

fn text_remains(rest: &str, mut in_tag: bool) -> bool {
    for c in rest.chars() {
        if c == '<' {
            in_tag = true;
        } else if !in_tag {
            return true;
        }
        if c == '>' {
            in_tag = false;
        }
    }
    false
}

/// Drop the last word of `html` when whitespace precedes it. Tags count
/// as part of a word and whitespace between attributes is not a boundary.
fn trim_partial_word(html: &str) -> &str {
    let mut in_tag = false;
    let mut run_start: Option<usize> = None;
    let mut boundary: Option<usize> = None;

    for (idx, c) in html.char_indices() {
        if c == '<' {
            in_tag = true;
        }
        if !in_tag && c.is_whitespace() {
            run_start.get_or_insert(idx);
        } else if let Some(start) = run_start.take() {
            boundary = Some(start);
        }
        if c == '>' {
            in_tag = false;
        }
    }

    match (run_start, boundary) {
        // ends in whitespace, nothing partial to drop
        (Some(_), _) | (None, None) => html,
        (None, Some(start)) => &html[..start],
    }
}

/// Names of the elements still open at the end of `html`, outermost first.
fn unclosed_tags(html: &str) -> Vec<&str> {
    let mut stack: Vec<&str> = Vec::new();

    for caps in TAG_RE.captures_iter(html) {
        if let Some(tag) = caps.name("tag") {
            let name = tag.as_str();
            if caps.name("self_close").is_none() && !is_void(name) {
                stack.push(name);
            }
        } else if let Some(close) = caps.name("close") {
            let close = close.as_str();
            // pop until the matching opener; anything in between is treated as closed
            loop {
                match stack.pop() {
                    Some(open) if open.eq_ignore_ascii_case(close) => break,
                    Some(open) => trace!(open, close, "Discarding unclosed tag"),
                    None => {
                        trace!(close, "Ignoring unmatched closing tag");
                        break;
                    }
                }
            }
        }
    }
    stack
}

/// Void elements and declarations (`<!DOCTYPE>`, `<!-- -->`, `<?xml?>`)
fn is_void(name: &str) -> bool {
    name.starts_with('!')
        || name.starts_with('?')
        || VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}
