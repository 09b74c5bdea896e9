use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::config::SiteConfig;
use crate::content::{load_changelog, LicenseParser, ScreenshotScanner};
use crate::feed;
use crate::models::*;

type AppState = State<Arc<SiteConfig>>;

const FEED_CACHE_CONTROL: &str = "public, max-age=3600";

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Feeds
// ============================================================

pub async fn changelog_json(
    State(config): AppState,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let parsed = load_changelog(&config.changelog_path);
    let body = feed::render_json_feed(&parsed, &config).map_err(internal_error)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, FEED_CACHE_CONTROL),
        ],
        body,
    ))
}

pub async fn rss_feed(State(config): AppState) -> Result<impl IntoResponse, (StatusCode, String)> {
    let parsed = load_changelog(&config.changelog_path);
    let body = feed::render_rss(&parsed, &config, chrono::Utc::now()).map_err(internal_error)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, FEED_CACHE_CONTROL),
        ],
        body,
    ))
}

// ============================================================
// Content
// ============================================================

pub async fn get_changelog(State(config): AppState) -> Json<ParsedChangelog> {
    Json(load_changelog(&config.changelog_path))
}

pub async fn get_latest(
    State(config): AppState,
) -> Result<Json<ReleaseSummary>, (StatusCode, String)> {
    load_changelog(&config.changelog_path)
        .release_summary()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "No releases found".to_string()))
}

pub async fn get_license(State(config): AppState) -> Json<LicenseDocument> {
    let parser = LicenseParser::new(config.default_copyright.clone());
    Json(parser.load(&config.license_path))
}

pub async fn list_screenshots(State(config): AppState) -> Json<Vec<Screenshot>> {
    Json(ScreenshotScanner::from_config(&config).scan())
}
