use std::str::FromStr;

use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Database;
use serde::Deserialize;
use serde_json::json;

use crate::types::{ContentSource, Post, ReadingTimeSettings};
use crate::utils::{custom_styles_block, missing_post_notice, no_content_notice, render_reading_time};

#[derive(Debug, Deserialize)]
struct RenderParams {
    source: Option<String>,
}

fn html_fragment(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Renders the reading time fragment the page template inlines next to the
/// post. Always responds 200 with html; the three degradation paths render
/// as an empty body unless debug output is enabled.
async fn render_for_post(
    post_id: web::Path<String>,
    params: web::Query<RenderParams>,
    db: web::Data<Database>,
) -> impl Responder {
    // One settings read per render, handed down as an immutable value.
    let settings = ReadingTimeSettings::load(&db).await;

    let id = match ObjectId::from_str(&post_id) {
        Ok(id) => id,
        Err(_) => return html_fragment(missing_post_notice(&settings)),
    };

    let collection = db.collection::<Post>("posts");
    let post = match collection.find_one(doc! {"_id": id}, None).await {
        Ok(Some(post)) => post,
        Ok(None) => return html_fragment(no_content_notice(&post_id, &settings)),
        Err(e) => {
            log::error!("failed to fetch post {}: {}", post_id, e);
            return HttpResponse::InternalServerError().body(format!("Failed to fetch post: {}", e));
        }
    };

    let source = ContentSource::from_query(params.source.as_deref());
    let content = post.text_to_estimate(source);
    if content.trim().is_empty() {
        return html_fragment(no_content_notice(&post_id, &settings));
    }

    html_fragment(render_reading_time(&post_id, content, &settings))
}

/// The custom `<style>` block for the page head.
async fn custom_styles(db: web::Data<Database>) -> impl Responder {
    let settings = ReadingTimeSettings::load(&db).await;
    html_fragment(custom_styles_block(&settings))
}

async fn fetch_post_by_id(post_id: web::Path<String>, db: web::Data<Database>) -> impl Responder {
    let id = match ObjectId::from_str(&post_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().json(json!({"error": "Invalid post ID"})),
    };

    let collection = db.collection::<Post>("posts");
    match collection.find_one(doc! {"_id": id}, None).await {
        Ok(Some(post)) => HttpResponse::Ok().json(post),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "Post not found"})),
        Err(e) => {
            HttpResponse::InternalServerError().json(json!({"error": format!("Failed to fetch post: {}", e)}))
        }
    }
}

pub fn reading_time_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reading-time/styles")
            .route(web::get().to(custom_styles))
    )
    .service(
        web::resource("/reading-time/render/{id}")
            .route(web::get().to(render_for_post))
    )
    .service(
        web::resource("/post/fetch/{id}")
            .route(web::get().to(fetch_post_by_id))
    );
}
