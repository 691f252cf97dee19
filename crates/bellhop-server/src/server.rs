//! Axum server setup and routing.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any as CorsAny, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

// Embed static files at compile time
const INDEX_HTML: &str = include_str!("../static/index.html");
const APP_JS: &str = include_str!("../static/app.js");
const STYLE_CSS: &str = include_str!("../static/style.css");

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new().route("/health", get(api::health::health));

    // Static file routes
    let static_routes = Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index))
        .route("/app.js", get(serve_app_js))
        .route("/style.css", get(serve_style_css));

    // Combine all routes
    Router::new()
        .route("/simulate", post(api::simulate::simulate))
        .nest("/api", api_routes)
        .merge(static_routes)
        .fallback(serve_index) // SPA fallback
        .layer(CompressionLayer::new())
        // TODO: Make CORS configurable; restrict origins in production
        .layer(
            CorsLayer::new()
                .allow_origin(CorsAny)
                .allow_methods(CorsAny)
                .allow_headers(CorsAny),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

// A panic anywhere below still produces the uniform error body.
fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    let body = Json(serde_json::json!({ "error": "Internal error: handler panicked" }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

// Static file handlers

async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn serve_app_js() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        APP_JS,
    )
}

async fn serve_style_css() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css")],
        STYLE_CSS,
    )
}
