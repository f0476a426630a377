use std::sync::Arc;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use thiserror::Error;

use crate::data::model::ChampionDataset;

pub mod handlers;

/// Errors surfaced to HTTP callers. Zero-match queries are the only
/// failure class; everything else is fatal at startup.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn not_found(detail: &str) -> Self {
        ApiError::NotFound(detail.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "detail": detail })),
            )
                .into_response(),
        }
    }
}

/// Build the HTTP router over the shared, read-only dataset.
///
/// Static segments (`random`, `role`, `search`) take priority over the
/// `{name}` capture at the same position.
pub fn router(dataset: Arc<ChampionDataset>) -> Router {
    Router::new()
        .route("/champions", get(handlers::list_champions))
        .route("/roles", get(handlers::list_roles))
        .route("/champions/role/{role}", get(handlers::champions_by_role))
        .route("/champions/random", get(handlers::random_champion))
        .route("/champions/search/{query}", get(handlers::search_champions))
        .route("/champions/{name}", get(handlers::champion_by_name))
        .with_state(dataset)
}
