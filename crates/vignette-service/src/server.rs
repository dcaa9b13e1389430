//! HTTP server for vignette service endpoints
//!
//! Provides /health and /vignettes?category=<name>.

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::types::{CacheStatus, HealthResponse};
use axum::{
    extract::{RawQuery, State},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use category_cache::{normalize_key, CategoryCache};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};
use vignettes_client::VignettesClient;

/// Shared state for the HTTP server
pub struct ServerState {
    pub cache: CategoryCache<Value>,
    /// `None` when the backend URL or token is not configured
    pub client: Option<VignettesClient>,
    pub started_at: DateTime<Utc>,
}

impl ServerState {
    pub fn new(cache: CategoryCache<Value>, client: Option<VignettesClient>) -> Self {
        Self {
            cache,
            client,
            started_at: Utc::now(),
        }
    }

    /// Build the cache and backend client described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = match config.cache_max_entries {
            Some(max) => CategoryCache::new().with_max_entries(max),
            None => CategoryCache::new(),
        };

        let client = match (&config.upstream_url, &config.upstream_token) {
            (Some(url), Some(token)) => Some(VignettesClient::with_timeout(
                url,
                token,
                config.upstream_timeout,
            )?),
            _ => {
                warn!("VIGNETTES_API_URL or VIGNETTES_API_TOKEN not set; cache misses will fail");
                None
            }
        };

        Ok(Self::new(cache, client))
    }
}

pub type SharedState = Arc<ServerState>;

/// First `category` value in a raw query string; later repeats are ignored
fn category_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(name, _)| name == "category")
        .map(|(_, value)| value.into_owned())
}

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/vignettes", get(get_vignettes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

/// Health check endpoint
async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let cache_stats = state.cache.stats().await;
    let uptime_secs = (Utc::now() - state.started_at).num_seconds().max(0) as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_secs,
        cache: cache_stats,
    })
}

/// Get vignettes for a category, from cache when fresh
async fn get_vignettes(
    State(state): State<SharedState>,
    RawQuery(query): RawQuery,
) -> std::result::Result<Response, ApiError> {
    let category = category_param(query.as_deref())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Category parameter is required".into()))?;
    let key = normalize_key(&category);

    // A fresh hit never touches the backend, configured or not
    if let Some(entry) = state.cache.get(&key).await {
        return Ok(vignettes_response(entry.payload, CacheStatus::Hit));
    }

    let client = state
        .client
        .as_ref()
        .ok_or_else(|| ApiError::Config("Backend API configuration missing".into()))?;

    // The client already logs non-success statuses
    let body = client.fetch_vignettes(&key).await.map_err(|e| {
        debug!(category = %key, error = %e, "Failed to fetch vignettes");
        e
    })?;

    state.cache.set(&key, body.clone()).await;
    debug!(
        category = %key,
        count = vignette_count(&body),
        "Cached vignettes from backend"
    );

    Ok(vignettes_response(body, CacheStatus::Miss))
}

fn vignettes_response(body: Value, cache: CacheStatus) -> Response {
    ([("x-cache", cache.as_header_value())], Json(body)).into_response()
}

fn vignette_count(body: &Value) -> usize {
    body.get("vignettes")
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0)
}
