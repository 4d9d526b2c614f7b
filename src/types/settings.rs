use mongodb::bson::{self, doc, Document};
use mongodb::Database;
use serde::{Deserialize, Serialize};

/// Display and calculation settings, stored as a single document in the
/// `settings` collection. Loaded once per render request; handlers pass the
/// loaded value around instead of re-reading individual options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingTimeSettings {
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
    #[serde(default = "default_singular_format")]
    pub singular_format: String,
    #[serde(default = "default_plural_format")]
    pub plural_format: String,
    #[serde(default = "default_less_than_a_minute_format")]
    pub less_than_a_minute_format: String,
    #[serde(default)]
    pub prefix_text: String,
    #[serde(default)]
    pub suffix_text: String,
    #[serde(default = "default_wrapper_tag")]
    pub wrapper_tag: String,
    #[serde(default)]
    pub hide_if_less_than_a_minute: bool,
    #[serde(default)]
    pub custom_styles: String,
    #[serde(default)]
    pub enable_debug_output: bool,
}

fn default_words_per_minute() -> u32 {
    200
}

fn default_singular_format() -> String {
    "{} minute read".to_string()
}

fn default_plural_format() -> String {
    "{} minutes read".to_string()
}

fn default_less_than_a_minute_format() -> String {
    "Less than a minute read".to_string()
}

fn default_wrapper_tag() -> String {
    "span".to_string()
}

impl Default for ReadingTimeSettings {
    fn default() -> ReadingTimeSettings {
        ReadingTimeSettings {
            words_per_minute: default_words_per_minute(),
            singular_format: default_singular_format(),
            plural_format: default_plural_format(),
            less_than_a_minute_format: default_less_than_a_minute_format(),
            prefix_text: String::new(),
            suffix_text: String::new(),
            wrapper_tag: default_wrapper_tag(),
            hide_if_less_than_a_minute: false,
            custom_styles: String::new(),
            enable_debug_output: false,
        }
    }
}

impl ReadingTimeSettings {
    pub const COLLECTION: &'static str = "settings";
    pub const DOCUMENT_ID: &'static str = "reading_time";

    /// Loads the settings document, falling back to the defaults when it is
    /// missing or unreadable. A broken settings store must never break page
    /// rendering.
    pub async fn load(db: &Database) -> ReadingTimeSettings {
        let collection = db.collection::<Document>(Self::COLLECTION);
        match collection.find_one(doc! {"_id": Self::DOCUMENT_ID}, None).await {
            Ok(Some(document)) => match bson::from_document(document) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("malformed settings document, using defaults: {}", e);
                    ReadingTimeSettings::default()
                }
            },
            Ok(None) => ReadingTimeSettings::default(),
            Err(e) => {
                log::warn!("failed to load settings, using defaults: {}", e);
                ReadingTimeSettings::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let settings = ReadingTimeSettings::default();
        assert_eq!(settings.words_per_minute, 200);
        assert_eq!(settings.singular_format, "{} minute read");
        assert_eq!(settings.plural_format, "{} minutes read");
        assert_eq!(settings.less_than_a_minute_format, "Less than a minute read");
        assert_eq!(settings.prefix_text, "");
        assert_eq!(settings.suffix_text, "");
        assert_eq!(settings.wrapper_tag, "span");
        assert!(!settings.hide_if_less_than_a_minute);
        assert_eq!(settings.custom_styles, "");
        assert!(!settings.enable_debug_output);
    }

    #[test]
    fn empty_document_deserializes_to_defaults() {
        let settings: ReadingTimeSettings = bson::from_document(doc! {}).unwrap();
        assert_eq!(settings.words_per_minute, 200);
        assert_eq!(settings.wrapper_tag, "span");
    }

    #[test]
    fn partial_document_keeps_defaults_for_missing_fields() {
        let document = doc! {
            "_id": ReadingTimeSettings::DOCUMENT_ID,
            "words_per_minute": 150_i64,
            "wrapper_tag": "div",
            "hide_if_less_than_a_minute": true,
        };
        let settings: ReadingTimeSettings = bson::from_document(document).unwrap();
        assert_eq!(settings.words_per_minute, 150);
        assert_eq!(settings.wrapper_tag, "div");
        assert!(settings.hide_if_less_than_a_minute);
        assert_eq!(settings.plural_format, "{} minutes read");
        assert!(!settings.enable_debug_output);
    }
}
