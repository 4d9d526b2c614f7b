use crate::types::{ReadingEstimate, ReadingTimeSettings};

use super::count_words::count_words;
use super::normalize::{normalize_content, strip_tags};
use super::sanitize::{ALLOWED_WRAPPER_TAGS, DEFAULT_WRAPPER_TAG};

/// Fixed class on the wrapper element, the hook for the custom styles.
pub const READING_TIME_CLASS: &str = "reading-time";

/// Marker replaced with the display minutes in the singular/plural formats.
pub const MINUTES_PLACEHOLDER: &str = "{}";

const DEBUG_ERROR_STYLE: &str =
    "color: red; direction: ltr; text-align: left; display: block; padding: 5px; border: 1px dashed red;";
const DEBUG_NOTICE_STYLE: &str =
    "color: orange; direction: ltr; text-align: left; display: block; padding: 5px; border: 1px dashed orange;";
const DEBUG_BADGE_STYLE: &str =
    "font-size: 0.8em; opacity: 0.7; direction: ltr; text-align: left; background-color: #f0f0f0; padding: 2px 5px; border-radius: 3px;";

/// Renders the reading time fragment for one post. Pure: everything it needs
/// arrives as a parameter, the post id is only echoed in diagnostics.
pub fn render_reading_time(post_id: &str, raw_content: &str, settings: &ReadingTimeSettings) -> String {
    let text = normalize_content(raw_content);
    let word_count = count_words(&text);
    if word_count == 0 {
        return zero_word_count_notice(post_id, settings);
    }

    let estimate = ReadingEstimate::from_word_count(word_count, settings.words_per_minute);
    let label = match reading_time_label(&estimate, settings) {
        Some(label) => label,
        None => return String::new(),
    };

    let mut output = format!("{}{}{}", settings.prefix_text, label, settings.suffix_text);
    if settings.enable_debug_output {
        output.push_str(&debug_badge(&estimate));
    }

    wrap_output(&settings.wrapper_tag, &output)
}

/// Picks and fills the configured format for an estimate. `None` means the
/// output is hidden entirely (sub-minute estimate with the hide flag set).
pub fn reading_time_label(estimate: &ReadingEstimate, settings: &ReadingTimeSettings) -> Option<String> {
    if estimate.is_less_than_a_minute() {
        if settings.hide_if_less_than_a_minute {
            return None;
        }
        // Used verbatim, no placeholder substitution.
        return Some(settings.less_than_a_minute_format.clone());
    }

    let format = if estimate.display_minutes == 1 {
        &settings.singular_format
    } else {
        &settings.plural_format
    };
    Some(format.replace(MINUTES_PLACEHOLDER, &estimate.display_minutes.to_string()))
}

fn wrap_output(tag: &str, inner: &str) -> String {
    // Re-checked at render time in case a bad value ever reached storage.
    let tag = if ALLOWED_WRAPPER_TAGS.contains(&tag) {
        tag
    } else {
        DEFAULT_WRAPPER_TAG
    };
    format!("<{} class=\"{}\">{}</{}>", tag, READING_TIME_CLASS, inner, tag)
}

fn debug_badge(estimate: &ReadingEstimate) -> String {
    format!(
        " <span style=\"{}\">(Words: {}, Raw Time: {:.2})</span>",
        DEBUG_BADGE_STYLE, estimate.word_count, estimate.raw_minutes
    )
}

/// The render was requested without a usable post id.
pub fn missing_post_notice(settings: &ReadingTimeSettings) -> String {
    if !settings.enable_debug_output {
        return String::new();
    }
    format!(
        "<span style=\"{}\">Reading time debug: post id is missing or not a valid id, the reading time was requested outside of a post context.</span>",
        DEBUG_ERROR_STYLE
    )
}

/// The post does not exist, or the selected source holds no text.
pub fn no_content_notice(post_id: &str, settings: &ReadingTimeSettings) -> String {
    if !settings.enable_debug_output {
        return String::new();
    }
    format!(
        "<span style=\"{}\">Reading time debug: no content found for post {}.</span>",
        DEBUG_NOTICE_STYLE, post_id
    )
}

fn zero_word_count_notice(post_id: &str, settings: &ReadingTimeSettings) -> String {
    if !settings.enable_debug_output {
        return String::new();
    }
    format!(
        "<span style=\"{}\">Reading time debug: word count is 0 for post {}.</span>",
        DEBUG_NOTICE_STYLE, post_id
    )
}

/// The `<style>` block the host inlines into the page head. Empty when no
/// custom styles are configured. Stripped again on the way out so a bad
/// stored value cannot break out of the style element.
pub fn custom_styles_block(settings: &ReadingTimeSettings) -> String {
    let styles = strip_tags(&settings.custom_styles);
    if styles.trim().is_empty() {
        return String::new();
    }
    format!("<style id=\"reading-time-custom-styles\">{}</style>", styles)
}
