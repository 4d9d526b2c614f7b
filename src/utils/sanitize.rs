use super::normalize::{collapse_whitespace, strip_tags};

pub const ALLOWED_WRAPPER_TAGS: [&str; 5] = ["span", "div", "p", "strong", "em"];

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;
pub const DEFAULT_WRAPPER_TAG: &str = "span";

/// Outcome of sanitizing one settings field. Bad input is never rejected, it
/// is normalized to a safe value; the warning makes the normalization
/// observable on the admin channel.
#[derive(Debug)]
pub struct Sanitized<T> {
    pub value: T,
    pub warning: Option<String>,
}

impl<T> Sanitized<T> {
    fn clean(value: T) -> Sanitized<T> {
        Sanitized { value, warning: None }
    }

    fn with_warning(value: T, warning: String) -> Sanitized<T> {
        Sanitized {
            value,
            warning: Some(warning),
        }
    }
}

pub fn sanitize_words_per_minute(input: &str) -> Sanitized<u32> {
    match input.trim().parse::<u32>() {
        Ok(value) if value > 0 => Sanitized::clean(value),
        _ => Sanitized::with_warning(
            DEFAULT_WORDS_PER_MINUTE,
            format!(
                "\"{}\" is not a positive integer, falling back to {}",
                input, DEFAULT_WORDS_PER_MINUTE
            ),
        ),
    }
}

/// Format, prefix and suffix fields: plain text only. Markup is stripped and
/// whitespace is collapsed so nothing injected through the form reaches the
/// rendered page.
pub fn sanitize_text(input: &str) -> Sanitized<String> {
    let value = collapse_whitespace(&strip_tags(input));
    if value == input {
        Sanitized::clean(value)
    } else {
        Sanitized::with_warning(value, "markup or extra whitespace was removed".to_string())
    }
}

pub fn sanitize_wrapper_tag(input: &str) -> Sanitized<String> {
    let tag = input.trim().to_ascii_lowercase();
    if ALLOWED_WRAPPER_TAGS.contains(&tag.as_str()) {
        Sanitized::clean(tag)
    } else {
        Sanitized::with_warning(
            DEFAULT_WRAPPER_TAG.to_string(),
            format!(
                "\"{}\" is not an allowed wrapper tag, falling back to {}",
                input, DEFAULT_WRAPPER_TAG
            ),
        )
    }
}

/// Checkbox-style truthy coercion. Empty, "0", "false", "no" and "off" are
/// false, everything else is true.
pub fn sanitize_bool(input: &str) -> Sanitized<bool> {
    let normalized = input.trim().to_ascii_lowercase();
    let value = !matches!(normalized.as_str(), "" | "0" | "false" | "no" | "off");
    Sanitized::clean(value)
}

/// Custom CSS keeps its formatting; only markup is stripped, which also
/// defeats `</style><script>` break-outs.
pub fn sanitize_custom_styles(input: &str) -> Sanitized<String> {
    let value = strip_tags(input);
    if value == input {
        Sanitized::clean(value)
    } else {
        Sanitized::with_warning(value, "markup was removed from the styles".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_rate_passes_through() {
        let sanitized = sanitize_words_per_minute("250");
        assert_eq!(sanitized.value, 250);
        assert!(sanitized.warning.is_none());
    }

    #[test]
    fn bad_rates_fall_back_to_the_default() {
        for input in ["0", "-5", "fast", "", "12.5"] {
            let sanitized = sanitize_words_per_minute(input);
            assert_eq!(sanitized.value, 200, "input {:?}", input);
            assert!(sanitized.warning.is_some(), "input {:?}", input);
        }
    }

    #[test]
    fn wrapper_tag_allow_list_is_enforced() {
        assert_eq!(sanitize_wrapper_tag("script").value, "span");
        assert!(sanitize_wrapper_tag("script").warning.is_some());
        assert_eq!(sanitize_wrapper_tag("div").value, "div");
        assert!(sanitize_wrapper_tag("div").warning.is_none());
        assert_eq!(sanitize_wrapper_tag(" EM ").value, "em");
    }

    #[test]
    fn booleans_coerce_without_warnings() {
        for input in ["1", "true", "on", "yes", "checked"] {
            let sanitized = sanitize_bool(input);
            assert!(sanitized.value, "input {:?}", input);
            assert!(sanitized.warning.is_none());
        }
        for input in ["", "0", "false", "FALSE", "no", "off"] {
            assert!(!sanitize_bool(input).value, "input {:?}", input);
        }
    }

    #[test]
    fn text_fields_lose_markup_and_extra_whitespace() {
        let sanitized = sanitize_text("<b>Estimated:</b>   reading time");
        assert_eq!(sanitized.value, "Estimated: reading time");
        assert!(sanitized.warning.is_some());

        let sanitized = sanitize_text("{} minute read");
        assert_eq!(sanitized.value, "{} minute read");
        assert!(sanitized.warning.is_none());
    }

    #[test]
    fn custom_styles_keep_formatting_but_lose_markup() {
        let css = ".reading-time {\n    color: red;\n}";
        let sanitized = sanitize_custom_styles(css);
        assert_eq!(sanitized.value, css);
        assert!(sanitized.warning.is_none());

        let sanitized = sanitize_custom_styles("<script>alert(1)</script>.x { top: 0; }");
        assert_eq!(sanitized.value, ".x { top: 0; }");
        assert!(sanitized.warning.is_some());
    }
}
