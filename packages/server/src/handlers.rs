//! HTTP handler functions for the Tokyo crime map API.

use actix_web::{HttpResponse, web};
use tokyo_crime_map_analytics::RANK_MENU;
use tokyo_crime_map_geography::GeographyError;
use tokyo_crime_map_render::{RenderError, pipeline};
use tokyo_crime_map_render_models::{MapArtifact, NO_DATA_NOTICE};
use tokyo_crime_map_server_models::{
    ApiHealth, MapRequest, MapResponse, category_menu, year_menu,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/categories`
///
/// Returns the crime category menu in dataset column order.
pub async fn categories() -> HttpResponse {
    HttpResponse::Ok().json(category_menu())
}

/// `GET /api/years`
pub async fn years() -> HttpResponse {
    HttpResponse::Ok().json(year_menu())
}

/// `GET /api/ranks`
pub async fn ranks() -> HttpResponse {
    HttpResponse::Ok().json(RANK_MENU)
}

/// `POST /api/map`
///
/// Runs the pipeline for the submitted selection and replaces the
/// session map with the result. A category with no data anywhere is not
/// an error: the session falls back to the bare base map with a notice.
pub async fn generate_map(
    state: web::Data<AppState>,
    request: web::Json<MapRequest>,
) -> HttpResponse {
    let MapRequest {
        year,
        category,
        rank,
    } = request.into_inner();

    match pipeline::build_map(&state.datasets, year, category, rank) {
        Ok(artifact) => {
            {
                let mut session = state.session.write().expect("session lock poisoned");
                session.artifact = artifact.clone();
                session.notice = None;
            }
            HttpResponse::Ok().json(MapResponse {
                map: artifact,
                notice: None,
            })
        }
        Err(RenderError::NoData { category }) => {
            log::info!("No data for {category}; falling back to the base map");
            let artifact = MapArtifact::base_only();
            {
                let mut session = state.session.write().expect("session lock poisoned");
                session.artifact = artifact.clone();
                session.notice = Some(NO_DATA_NOTICE.to_string());
            }
            HttpResponse::Ok().json(MapResponse {
                map: artifact,
                notice: Some(NO_DATA_NOTICE.to_string()),
            })
        }
        Err(RenderError::Geography(GeographyError::DataUnavailable { year, path })) => {
            log::warn!("No dataset for {year}: {}", path.display());
            HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("No crime dataset for {year}")
            }))
        }
        Err(error) => {
            log::error!("Failed to build map: {error}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to build map"
            }))
        }
    }
}

/// `GET /api/map`
///
/// Returns the current session map.
pub async fn current_map(state: web::Data<AppState>) -> HttpResponse {
    let session = state.session.read().expect("session lock poisoned");
    HttpResponse::Ok().json(MapResponse {
        map: session.artifact.clone(),
        notice: session.notice.clone(),
    })
}
