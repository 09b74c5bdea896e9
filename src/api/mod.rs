mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::SiteConfig;

/// Feed endpoints at the site root plus JSON views of the parsed content
/// under `/api/v1`. Sources are re-read on every request.
pub fn create_router(config: SiteConfig) -> Router {
    let api = Router::new()
        .route("/changelog", get(handlers::get_changelog))
        .route("/latest", get(handlers::get_latest))
        .route("/license", get(handlers::get_license))
        .route("/screenshots", get(handlers::list_screenshots))
        .route("/health", get(handlers::health));

    Router::new()
        .route("/changelog.json", get(handlers::changelog_json))
        .route("/feed.xml", get(handlers::rss_feed))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(config))
}
