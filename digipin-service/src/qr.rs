//! QR rendering and caching for decoded codes.
//!
//! The service answers `qrcode` requests with a PNG image of the Google Maps
//! link for the decoded coordinate. Rendered images are cached in-process
//! keyed by the normalized code, with hit/miss counters exposed through the
//! `/stats` endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, Luma};
use moka::sync::Cache;
use qrcode::QrCode;
use thiserror::Error;

/// Errors that can occur while rendering a QR image.
#[derive(Error, Debug)]
pub enum QrRenderError {
    /// The payload could not be encoded as a QR symbol.
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// The QR matrix could not be serialized to PNG.
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Statistics about QR cache usage.
#[derive(Debug, Clone, Default)]
pub struct QrCacheStats {
    /// Number of rendered images currently in the cache.
    pub entry_count: u64,
    /// Number of requests served from cache.
    pub hit_count: u64,
    /// Number of requests that rendered a new image.
    pub miss_count: u64,
}

impl QrCacheStats {
    /// Calculate the cache hit rate (0.0 to 1.0).
    ///
    /// Returns 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}

/// Build the external map link for a decoded coordinate.
pub fn maps_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps?q={},{}", latitude, longitude)
}

/// Renders QR PNGs and caches them by normalized code.
pub struct QrRenderer {
    cache: Cache<String, Arc<Vec<u8>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QrRenderer {
    /// Create a renderer caching up to `capacity` rendered images.
    pub fn new(capacity: u64) -> Self {
        Self {
            cache: Cache::new(capacity),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the PNG for `payload`, rendering it on a cache miss.
    ///
    /// `key` must be the normalized (separator-free) code so that every
    /// spelling of the same code shares one cache entry.
    pub fn png(&self, key: &str, payload: &str) -> Result<Arc<Vec<u8>>, QrRenderError> {
        if let Some(png) = self.cache.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(png);
        }

        let png = Arc::new(render_png(payload)?);
        self.cache.insert(key.to_string(), Arc::clone(&png));
        self.misses.fetch_add(1, Ordering::Relaxed);

        Ok(png)
    }

    /// Current cache statistics.
    pub fn stats(&self) -> QrCacheStats {
        self.cache.run_pending_tasks();
        QrCacheStats {
            entry_count: self.cache.entry_count(),
            hit_count: self.hits.load(Ordering::Relaxed),
            miss_count: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Render `payload` as a PNG-encoded QR image.
fn render_png(payload: &str) -> Result<Vec<u8>, QrRenderError> {
    let code = QrCode::new(payload.as_bytes())?;
    let image = code.render::<Luma<u8>>().min_dimensions(256, 256).build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image).write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)?;

    Ok(png)
}
