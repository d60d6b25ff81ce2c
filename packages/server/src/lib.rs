#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Tokyo crime map.
//!
//! Serves the selection menus and the map pipeline over REST. The server
//! owns the single session-scoped map artifact: every successful
//! submission replaces it, and `GET /api/map` returns the current one
//! (initially the bare base map).

mod handlers;

use std::sync::RwLock;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use tokyo_crime_map_geography::cache::DatasetCache;
use tokyo_crime_map_render_models::MapArtifact;

/// Default directory holding the two GeoJSON inputs.
pub const DEFAULT_DATA_DIR: &str = "data";

/// The session-scoped map state.
pub struct MapSession {
    /// The artifact most recently produced.
    pub artifact: MapArtifact,
    /// Notice attached to the artifact, set on the no-data fallback.
    pub notice: Option<String>,
}

impl Default for MapSession {
    fn default() -> Self {
        Self {
            artifact: MapArtifact::base_only(),
            notice: None,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// Parsed dataset cache shared across requests.
    pub datasets: DatasetCache,
    /// The per-process map session, replaced on every successful
    /// submission.
    pub session: RwLock<MapSession>,
}

/// Starts the Tokyo crime map API server.
///
/// Reads `TOKYO_CRIME_DATA_DIR` for the dataset directory (default
/// `data`) and `BIND_ADDR`/`PORT` for the listen address. This is a
/// regular async function; the caller provides the async runtime
/// (e.g. via `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind
/// or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let data_dir =
        std::env::var("TOKYO_CRIME_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    log::info!("Serving datasets from {data_dir}");

    let state = web::Data::new(AppState {
        datasets: DatasetCache::new(data_dir),
        session: RwLock::new(MapSession::default()),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/categories", web::get().to(handlers::categories))
                    .route("/years", web::get().to(handlers::years))
                    .route("/ranks", web::get().to(handlers::ranks))
                    .route("/map", web::get().to(handlers::current_map))
                    .route("/map", web::post().to(handlers::generate_map)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
