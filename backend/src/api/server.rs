//! HTTP server for the census dashboard API.
//!
//! Serves fully computed view-models over a loaded [`CensusStore`]; the
//! store is immutable after startup, so handlers share it behind an
//! `Arc` with no locking.
//!
//! # API Endpoints
//!
//! | Method | Path                    | Description                       |
//! |--------|-------------------------|-----------------------------------|
//! | GET    | `/health`               | Health check                      |
//! | GET    | `/api/area/{postcode}`  | Full view-model for one postcode  |
//! | GET    | `/api/ancestries`       | Queryable ancestry names          |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use super::types::{status_for, ErrorBody};
use crate::domain::ancestry::Ancestry;
use crate::loader::CensusStore;
use crate::view::{area_profile, AreaProfile};

/// Start the HTTP server over an already-loaded store.
pub async fn start_server(
    store: CensusStore,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/api/area/{postcode}", get(get_area))
        .route("/api/ancestries", get(get_ancestries))
        .layer(cors)
        .with_state(Arc::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "census API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "censusdash",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "area": "GET /api/area/{postcode}",
            "ancestries": "GET /api/ancestries"
        }
    }))
}

/// Full view-model for one postcode.
async fn get_area(
    State(store): State<Arc<CensusStore>>,
    Path(postcode): Path<String>,
) -> Result<Json<AreaProfile>, (StatusCode, Json<ErrorBody>)> {
    let profile = area_profile(&store, &postcode).map_err(|e| {
        error!(postcode, %e, "area profile failed");
        (
            status_for(&e),
            Json(ErrorBody::for_postcode(e.to_string(), &postcode)),
        )
    })?;

    Ok(Json(profile))
}

/// Ancestry names accepted by the per-ancestry summaries.
async fn get_ancestries() -> Json<Value> {
    Json(json!({ "ancestries": Ancestry::available_ancestries() }))
}
