//! DigiPin Service - HTTP microservice for DIGIPIN geocode conversions.
//!
//! A REST API around the `digipin` codec: encode coordinates, decode codes,
//! and render scannable QR images of the decoded location's maps link.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DIGIPIN_PORT` | HTTP server port | 5000 |
//! | `DIGIPIN_QR_CACHE_SIZE` | Maximum rendered QR images in cache | 256 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET/POST /api/digipin/encode` - Coordinate to code
//! - `GET/POST /api/digipin/decode` - Code to cell-center coordinate
//! - `GET /api/digipin/qrcode/{digipin}` - QR image + maps link for a code
//! - `GET /health` - Health check
//! - `GET /stats` - QR cache statistics
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use digipin_service::{handlers, qr::QrRenderer, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the DigiPin service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DigiPin Service",
        version = "0.1.0",
        description = "REST API for converting between coordinates and DIGIPIN grid codes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::encode_get,
        handlers::encode_post,
        handlers::decode_get,
        handlers::decode_post,
        handlers::qrcode,
        handlers::health_check,
        handlers::get_stats,
    ),
    components(
        schemas(
            handlers::EncodeParams,
            handlers::EncodeResponse,
            handlers::DecodeParams,
            handlers::DecodeResponse,
            handlers::QrResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
            handlers::StatsResponse,
        )
    ),
    tags(
        (name = "digipin", description = "Encode, decode and QR endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "digipin_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("DIGIPIN_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);

    let qr_cache_size: u64 = std::env::var("DIGIPIN_QR_CACHE_SIZE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(256);

    tracing::info!(
        port = port,
        qr_cache_size = qr_cache_size,
        "Starting DigiPin service"
    );

    let state = Arc::new(AppState {
        qr: QrRenderer::new(qr_cache_size),
    });

    let app = digipin_service::router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
