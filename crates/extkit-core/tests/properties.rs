use extkit_core::text::{slugify, strip_html, truncate_html, truncate_words};
use proptest::prelude::*;

const TAGS: &[&str] = &["p", "b", "i", "div", "span"];

/// Well-formed fragments: lowercase words, `<br/>` and nested elements
fn fragment() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z]{1,8}".prop_map(|w| format!("{} ", w)),
        "[a-z]{1,8}",
        Just("<br/>".to_string()),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (
            prop::sample::select(TAGS),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, children)| format!("<{tag}>{}</{tag}>", children.concat()))
    })
}

fn open_and_close_counts(html: &str) -> (usize, usize) {
    let closes = html.matches("</").count();
    let self_closing = html.matches("<br/>").count();
    let opens = html.matches('<').count() - closes - self_closing;
    (opens, closes)
}

proptest! {
    #[test]
    fn strip_html_is_idempotent(input in ".*") {
        let once = strip_html(&input);
        prop_assert_eq!(strip_html(&once), once);
    }

    #[test]
    fn truncate_html_is_identity_when_text_fits(html in fragment(), extra in 0usize..5) {
        let limit = strip_html(&html).chars().count() + extra;
        prop_assert_eq!(truncate_html(&html, limit, "..."), html);
    }

    #[test]
    fn truncate_html_output_is_balanced(html in fragment(), limit in 0usize..60) {
        let out = truncate_html(&html, limit, "...");
        let (opens, closes) = open_and_close_counts(&out);
        prop_assert_eq!(opens, closes, "unbalanced output: {}", out);
    }

    #[test]
    fn truncate_html_respects_limit(html in fragment(), limit in 0usize..60) {
        let out = truncate_html(&html, limit, "");
        prop_assert!(strip_html(&out).chars().count() <= limit, "{:?} -> {:?}", html, out);
    }

    #[test]
    fn slugify_output_is_url_safe(input in "\\PC{0,80}") {
        let slug = slugify(&input);
        prop_assert!(slug.len() <= 45);
        prop_assert!(
            slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "unexpected character in {:?}", slug
        );
    }

    #[test]
    fn truncate_words_never_ends_mid_word(
        text in "[a-z]{1,6}( [a-z]{1,6}){0,10}",
        limit in 1usize..40,
    ) {
        let out = truncate_words(&text, limit, "");
        prop_assert!(text.starts_with(&out));

        let cut_mid_word = out.len() < text.len()
            && out.contains(' ')
            && !out.ends_with(' ')
            && !text[out.len()..].starts_with(' ');
        prop_assert!(!cut_mid_word, "{:?} -> {:?}", text, out);
    }
}
