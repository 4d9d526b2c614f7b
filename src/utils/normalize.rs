use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html};

// [gallery], [quote author="x"], [/quote]. Names start with an ascii letter,
// so bracketed plain text like [1] stays and still counts as a word.
fn shortcode_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[/?[A-Za-z][A-Za-z0-9_-]*(\s[^\]]*)?\]").unwrap())
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Removes embedded shortcode directives so their tokens are not counted as
/// words.
pub fn strip_shortcodes(content: &str) -> String {
    shortcode_pattern().replace_all(content, "").into_owned()
}

/// Strips all markup by parsing the input as an HTML fragment and collecting
/// its text nodes. Malformed markup is recovered by the parser, and
/// `<script>`/`<style>` bodies are not readable content so they are dropped
/// entirely.
pub fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut text = String::new();
    collect_text(fragment.root_element(), &mut text);
    text
}

fn collect_text(element: ElementRef, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            if name != "script" && name != "style" {
                collect_text(child_element, out);
            }
        }
    }
}

/// Collapses every run of Unicode whitespace (newlines, tabs, nbsp, ...) into
/// a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    whitespace_pattern().replace_all(text, " ").trim().to_string()
}

/// Full normalization pipeline: shortcodes out first so their markers are not
/// counted, then markup, then whitespace.
pub fn normalize_content(raw: &str) -> String {
    let without_shortcodes = strip_shortcodes(raw);
    let without_tags = strip_tags(&without_shortcodes);
    collapse_whitespace(&without_tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_and_shortcodes_do_not_survive() {
        assert_eq!(normalize_content("<b>hello</b> world [directive]"), "hello world");
    }

    #[test]
    fn shortcodes_with_attributes_and_closers_are_removed() {
        assert_eq!(
            normalize_content("[quote author=\"someone\"]quoted words[/quote]"),
            "quoted words"
        );
    }

    #[test]
    fn shortcode_removal_joins_adjacent_text() {
        assert_eq!(strip_shortcodes("foo[gallery]bar"), "foobar");
    }

    #[test]
    fn bracketed_plain_text_is_kept() {
        assert_eq!(normalize_content("see [1] for details"), "see [1] for details");
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        assert_eq!(normalize_content("one\n\ttwo   three\r\nfour"), "one two three four");
    }

    #[test]
    fn unicode_whitespace_is_collapsed_too() {
        // U+00A0 no-break space between the two Persian words
        assert_eq!(normalize_content("سلام\u{00A0}دنیا"), "سلام دنیا");
    }

    #[test]
    fn markup_only_input_is_empty() {
        assert_eq!(normalize_content("<p><img src=\"x.png\"></p>"), "");
        assert_eq!(normalize_content(""), "");
    }

    #[test]
    fn malformed_markup_is_stripped_best_effort() {
        assert_eq!(normalize_content("<p>hello <b>world"), "hello world");
    }

    #[test]
    fn script_and_style_bodies_are_dropped() {
        assert_eq!(
            normalize_content("<p>visible</p><script>var x = 1;</script><style>.a { color: red; }</style>"),
            "visible"
        );
    }

    #[test]
    fn entities_decode_to_text() {
        assert_eq!(normalize_content("fish &amp; chips"), "fish & chips");
    }
}
