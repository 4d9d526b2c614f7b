use actix_web::{web::Data, App, HttpServer};
use mongodb::{Client, Database};

mod routes;
mod types;
mod utils;

use routes::{reading_time_routes, settings_routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let client = Client::with_uri_str(&uri)
        .await
        .expect("failed to connect to mongodb");
    let db: Database = client.database("reading_time");

    log::info!("listening on 127.0.0.1:8080");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(db.clone()))
            .configure(reading_time_routes)
            .configure(settings_routes)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
