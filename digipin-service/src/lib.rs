//! DigiPin Service Library
//!
//! HTTP handlers, QR rendering and router for the DigiPin conversion
//! service. This library is used by both the digipin-service binary and the
//! integration tests.

pub mod handlers;
pub mod qr;

use std::sync::Arc;

use axum::{routing::get, Router};

/// Application state shared across handlers.
pub struct AppState {
    /// QR renderer with its in-process image cache.
    pub qr: qr::QrRenderer,
}

/// Build the service router (API routes plus health/stats).
///
/// Middleware layers and the Swagger UI are added by the binary; tests drive
/// this router directly.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route(
            "/encode",
            get(handlers::encode_get).post(handlers::encode_post),
        )
        .route(
            "/decode",
            get(handlers::decode_get).post(handlers::decode_post),
        )
        .route("/qrcode/:digipin", get(handlers::qrcode));

    Router::new()
        .nest("/api/digipin", api)
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{
    DecodeParams, DecodeResponse, EncodeParams, EncodeResponse, ErrorResponse, HealthResponse,
    QrResponse, StatsResponse,
};
