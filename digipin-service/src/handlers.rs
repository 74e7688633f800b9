//! HTTP request handlers for the DigiPin service.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::qr;
use crate::AppState;

/// Coordinate input, as query parameters or JSON body.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EncodeParams {
    /// Latitude in decimal degrees (2.5 to 38.5).
    pub latitude: f64,
    /// Longitude in decimal degrees (63.5 to 99.5).
    pub longitude: f64,
}

/// Successful encode response.
#[derive(Debug, Serialize, ToSchema)]
pub struct EncodeResponse {
    /// The DIGIPIN code in display format (XXX-XXX-XXXX).
    pub digipin: String,
}

/// Code input, as query parameter or JSON body.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DecodeParams {
    /// The DIGIPIN code; separators are optional.
    pub digipin: String,
}

/// Successful decode response: the center of the identified cell.
#[derive(Debug, Serialize, ToSchema)]
pub struct DecodeResponse {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Successful QR response.
#[derive(Debug, Serialize, ToSchema)]
pub struct QrResponse {
    /// Latitude of the decoded cell center.
    pub latitude: f64,
    /// Longitude of the decoded cell center.
    pub longitude: f64,
    /// Google Maps link for the decoded coordinate.
    #[serde(rename = "mapsUrl")]
    pub maps_url: String,
    /// PNG image of the maps link as a QR code, base64-encoded.
    #[serde(rename = "qrImageBase64")]
    pub qr_image_base64: String,
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// QR cache statistics response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of rendered QR images in cache.
    pub cached_codes: u64,
    /// Cache hit count.
    pub cache_hits: u64,
    /// Cache miss count.
    pub cache_misses: u64,
    /// Cache hit rate (0.0 to 1.0).
    pub hit_rate: f64,
}

/// Encode a coordinate into a DIGIPIN code (query parameters).
#[utoipa::path(
    get,
    path = "/api/digipin/encode",
    params(EncodeParams),
    responses(
        (status = 200, description = "Coordinate encoded", body = EncodeResponse),
        (status = 400, description = "Coordinate outside the bounding region", body = ErrorResponse)
    ),
    tag = "digipin"
)]
pub async fn encode_get(Query(params): Query<EncodeParams>) -> Response {
    encode_inner(params)
}

/// Encode a coordinate into a DIGIPIN code (JSON body).
#[utoipa::path(
    post,
    path = "/api/digipin/encode",
    request_body = EncodeParams,
    responses(
        (status = 200, description = "Coordinate encoded", body = EncodeResponse),
        (status = 400, description = "Coordinate outside the bounding region", body = ErrorResponse)
    ),
    tag = "digipin"
)]
pub async fn encode_post(Json(params): Json<EncodeParams>) -> Response {
    encode_inner(params)
}

fn encode_inner(params: EncodeParams) -> Response {
    tracing::debug!(
        latitude = params.latitude,
        longitude = params.longitude,
        "Encode request"
    );

    match digipin::encode(params.latitude, params.longitude) {
        Ok(digipin) => (StatusCode::OK, Json(EncodeResponse { digipin })).into_response(),
        Err(e) => codec_error_response(e),
    }
}

/// Decode a DIGIPIN code into a coordinate (query parameter).
#[utoipa::path(
    get,
    path = "/api/digipin/decode",
    params(DecodeParams),
    responses(
        (status = 200, description = "Code decoded", body = DecodeResponse),
        (status = 400, description = "Malformed code", body = ErrorResponse)
    ),
    tag = "digipin"
)]
pub async fn decode_get(Query(params): Query<DecodeParams>) -> Response {
    decode_inner(params)
}

/// Decode a DIGIPIN code into a coordinate (JSON body).
#[utoipa::path(
    post,
    path = "/api/digipin/decode",
    request_body = DecodeParams,
    responses(
        (status = 200, description = "Code decoded", body = DecodeResponse),
        (status = 400, description = "Malformed code", body = ErrorResponse)
    ),
    tag = "digipin"
)]
pub async fn decode_post(Json(params): Json<DecodeParams>) -> Response {
    decode_inner(params)
}

fn decode_inner(params: DecodeParams) -> Response {
    tracing::debug!(digipin = %params.digipin, "Decode request");

    match digipin::decode(&params.digipin) {
        Ok(center) => (
            StatusCode::OK,
            Json(DecodeResponse {
                latitude: center.latitude,
                longitude: center.longitude,
            }),
        )
            .into_response(),
        Err(e) => codec_error_response(e),
    }
}

/// Decode a code and return a scannable QR image of its maps link.
#[utoipa::path(
    get,
    path = "/api/digipin/qrcode/{digipin}",
    params(("digipin" = String, Path, description = "DIGIPIN code; separators are optional")),
    responses(
        (status = 200, description = "QR image rendered", body = QrResponse),
        (status = 400, description = "Malformed code", body = ErrorResponse),
        (status = 500, description = "Rendering failed", body = ErrorResponse)
    ),
    tag = "digipin"
)]
#[axum::debug_handler]
pub async fn qrcode(
    State(state): State<Arc<AppState>>,
    Path(digipin): Path<String>,
) -> Response {
    let center = match digipin::decode(&digipin) {
        Ok(center) => center,
        Err(e) => return codec_error_response(e),
    };

    let maps_url = qr::maps_url(center.latitude, center.longitude);
    // Normalized key so every spelling of a code shares one cache entry.
    let key: String = digipin
        .chars()
        .filter(|&c| c != digipin::SEPARATOR)
        .collect();

    match state.qr.png(&key, &maps_url) {
        Ok(png) => {
            tracing::info!(digipin = %key, "QR image served");
            (
                StatusCode::OK,
                Json(QrResponse {
                    latitude: center.latitude,
                    longitude: center.longitude,
                    maps_url,
                    qr_image_base64: BASE64.encode(png.as_slice()),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(digipin = %key, error = %e, "QR rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "failed to generate QR image".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Create an error response for rejected codec input.
fn codec_error_response(e: digipin::DigipinError) -> Response {
    tracing::warn!(error = %e, "Codec rejected input");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service healthy", body = HealthResponse)),
    tag = "system"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Get QR cache statistics.
#[utoipa::path(
    get,
    path = "/stats",
    responses((status = 200, description = "Cache statistics", body = StatsResponse)),
    tag = "system"
)]
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let stats = state.qr.stats();

    Json(StatsResponse {
        cached_codes: stats.entry_count,
        cache_hits: stats.hit_count,
        cache_misses: stats.miss_count,
        hit_rate: stats.hit_rate(),
    })
}
