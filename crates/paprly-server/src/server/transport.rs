//! Routes and middleware.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiResult;
use crate::handlers::{self, AppContext};
use crate::models::{PaperRecord, SearchRequest, SearchResponse, SummarizeRequest, SummaryResult};

/// Create the HTTP router.
pub fn create_router(ctx: AppContext, cors_origin: &str) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/summarize", post(handle_summarize))
        .route("/arxiv_search", post(handle_search))
        .route("/arxiv_paper/{arxiv_id}", get(handle_lookup))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// CORS for the single web front end origin.
fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    match HeaderValue::from_str(origin) {
        Ok(value) => layer.allow_origin(value),
        Err(e) => {
            tracing::warn!(origin, error = %e, "Invalid CORS origin, cross-origin requests disabled");
            layer
        }
    }
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "paprly-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn handle_summarize(
    State(ctx): State<AppContext>,
    body: Result<Json<SummarizeRequest>, JsonRejection>,
) -> ApiResult<Json<SummaryResult>> {
    let Json(req) = body?;
    handlers::summarize(&ctx, req).await.map(Json)
}

/// Body rejections are the only non-200 answer; search failures stay in the body.
async fn handle_search(
    State(ctx): State<AppContext>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Json(req) = body?;
    Ok(Json(handlers::search(&ctx, req).await))
}

async fn handle_lookup(
    State(ctx): State<AppContext>,
    Path(arxiv_id): Path<String>,
) -> ApiResult<Json<PaperRecord>> {
    handlers::lookup(&ctx, &arxiv_id).await.map(Json)
}
