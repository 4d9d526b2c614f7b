mod count_words;
mod normalize;
mod render;
pub mod sanitize;

pub use count_words::count_words;
pub use normalize::{collapse_whitespace, normalize_content, strip_shortcodes, strip_tags};
pub use render::{
    custom_styles_block, missing_post_notice, no_content_notice, reading_time_label,
    render_reading_time, MINUTES_PLACEHOLDER, READING_TIME_CLASS,
};
