use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, Document};
use mongodb::options::UpdateOptions;
use mongodb::Database;
use serde_json::json;

use crate::types::ReadingTimeSettings;
use crate::utils::sanitize::{
    sanitize_bool, sanitize_custom_styles, sanitize_text, sanitize_wrapper_tag,
    sanitize_words_per_minute,
};

/// Current settings for the admin page. Values read back here are the
/// sanitized ones, which is the only place a silent fallback becomes visible.
async fn fetch_settings(db: web::Data<Database>) -> impl Responder {
    let settings = ReadingTimeSettings::load(&db).await;
    HttpResponse::Ok().json(settings)
}

fn record(field: &str, warning: Option<String>, warnings: &mut Vec<String>) {
    if let Some(warning) = warning {
        log::warn!("settings update, {}: {}", field, warning);
        warnings.push(format!("{}: {}", field, warning));
    }
}

/// Admin form submission: a flat map of field name to raw string value.
/// Every known field runs through its own sanitizer; nothing is rejected,
/// bad values are normalized and reported back as warnings.
async fn update_settings(
    form: web::Json<HashMap<String, String>>,
    db: web::Data<Database>,
) -> impl Responder {
    let mut update = Document::new();
    let mut warnings: Vec<String> = Vec::new();

    for (field, value) in form.iter() {
        match field.as_str() {
            "words_per_minute" => {
                let sanitized = sanitize_words_per_minute(value);
                record(field, sanitized.warning, &mut warnings);
                update.insert(field.as_str(), sanitized.value as i64);
            }
            "singular_format" | "plural_format" | "less_than_a_minute_format" | "prefix_text"
            | "suffix_text" => {
                let sanitized = sanitize_text(value);
                record(field, sanitized.warning, &mut warnings);
                update.insert(field.as_str(), sanitized.value);
            }
            "wrapper_tag" => {
                let sanitized = sanitize_wrapper_tag(value);
                record(field, sanitized.warning, &mut warnings);
                update.insert(field.as_str(), sanitized.value);
            }
            "hide_if_less_than_a_minute" | "enable_debug_output" => {
                let sanitized = sanitize_bool(value);
                record(field, sanitized.warning, &mut warnings);
                update.insert(field.as_str(), sanitized.value);
            }
            "custom_styles" => {
                let sanitized = sanitize_custom_styles(value);
                record(field, sanitized.warning, &mut warnings);
                update.insert(field.as_str(), sanitized.value);
            }
            _ => warnings.push(format!("{}: unknown setting, ignored", field)),
        }
    }

    if update.is_empty() {
        let settings = ReadingTimeSettings::load(&db).await;
        return HttpResponse::Ok().json(json!({"settings": settings, "warnings": warnings}));
    }

    let collection = db.collection::<Document>(ReadingTimeSettings::COLLECTION);
    let options = UpdateOptions::builder().upsert(true).build();
    let result = collection
        .update_one(
            doc! {"_id": ReadingTimeSettings::DOCUMENT_ID},
            doc! {"$set": update},
            options,
        )
        .await;

    match result {
        Ok(_) => {
            let settings = ReadingTimeSettings::load(&db).await;
            HttpResponse::Ok().json(json!({"settings": settings, "warnings": warnings}))
        }
        Err(e) => HttpResponse::InternalServerError().body(format!("Error saving settings: {}", e)),
    }
}

pub fn settings_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/settings/fetch")
            .route(web::get().to(fetch_settings))
    )
    .service(
        web::resource("/settings/update")
            .route(web::post().to(update_settings))
    );
}
