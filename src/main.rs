mod errors;
mod handlers;
mod models;
mod routes;
mod state;
mod storage;
mod structs;
mod utils;

use crate::state::app_state::AppState;
use crate::storage::file::FileStore;
use crate::storage::gallery::GalleryStore;
use crate::storage::kv::KvStore;
use crate::storage::memory::MemoryStore;
use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use dotenv::dotenv;
use env_logger::Env;
use routes::init_routes;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let port_string = env::var("PORT").unwrap_or_else(|_| String::from("8080"));
    let port = port_string
        .parse::<u16>()
        .expect("PORT must be a valid port number");
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Open the gallery storage; ":memory:" selects the ephemeral store
    let gallery_dir = env::var("GALLERY_DIR").unwrap_or_else(|_| String::from("data"));
    let store: Box<dyn KvStore> = if gallery_dir == ":memory:" {
        Box::new(MemoryStore::default())
    } else {
        match FileStore::new(&gallery_dir) {
            Ok(store) => Box::new(store),
            Err(e) => {
                eprintln!("Error opening gallery storage at {}: {}", gallery_dir, e);
                std::process::exit(1);
            }
        }
    };

    // Create shared state
    let app_state = web::Data::new(AppState {
        gallery: GalleryStore::new(store),
    });

    // Start the Actix Web server
    HttpServer::new(move || {
        // Create a logger with a custom format instead
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        // Enable CORS for the dev frontends
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:4173")
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);
        App::new()
            .wrap(logger)
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
