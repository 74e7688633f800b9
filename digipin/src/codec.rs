//! DIGIPIN encoding and decoding.
//!
//! Both directions are pure functions over the fixed grid in [`crate::grid`]:
//! [`encode`] walks the subdivision hierarchy downward picking the cell that
//! contains the coordinate, [`decode`] replays a code's symbols to rebuild
//! the same cell and returns its center.

use crate::error::{DigipinError, Result};
use crate::grid::{self, GRID_SIZE, LEVELS, REGION, SEPARATOR, SEPARATOR_AFTER};

/// A decoded coordinate in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Encode a coordinate into a DIGIPIN code.
///
/// The coordinate must lie inside the bounding region (latitude 2.5–38.5,
/// longitude 63.5–99.5, inclusive). The returned code has ten symbols in the
/// display format `XXX-XXX-XXXX`.
///
/// A coordinate exactly on a grid line belongs to the cell whose minimum
/// edge it lies on (its north/east neighbor); the region maxima fold into
/// the outermost row/column, so the closed region encodes without gaps.
///
/// # Errors
///
/// Returns [`DigipinError::LatitudeOutOfRange`] or
/// [`DigipinError::LongitudeOutOfRange`] when the respective axis is outside
/// the region or not finite.
///
/// # Examples
///
/// ```
/// use digipin::encode;
///
/// assert_eq!(encode(28.6139, 77.2090)?, "39J-438-TJC7");
/// assert_eq!(encode(28.622788, 77.213033)?, "39J-49L-L8T4");
/// assert!(encode(45.0, 77.0).is_err());
/// # Ok::<(), digipin::DigipinError>(())
/// ```
pub fn encode(latitude: f64, longitude: f64) -> Result<String> {
    if !latitude.is_finite() || latitude < REGION.min_lat || latitude > REGION.max_lat {
        return Err(DigipinError::LatitudeOutOfRange {
            latitude,
            min: REGION.min_lat,
            max: REGION.max_lat,
        });
    }
    if !longitude.is_finite() || longitude < REGION.min_lon || longitude > REGION.max_lon {
        return Err(DigipinError::LongitudeOutOfRange {
            longitude,
            min: REGION.min_lon,
            max: REGION.max_lon,
        });
    }

    let mut code = String::with_capacity(LEVELS + SEPARATOR_AFTER.len());
    let mut bounds = REGION;
    let max_index = GRID_SIZE as isize - 1;

    for level in 1..=LEVELS {
        let lat_div = bounds.lat_span() / GRID_SIZE as f64;
        let lon_div = bounds.lon_span() / GRID_SIZE as f64;

        // Rows count from the north edge, so the floor-based southern offset
        // is flipped. Clamping folds the region maxima into the outermost
        // row/column.
        let south_offset = ((latitude - bounds.min_lat) / lat_div).floor() as isize;
        let row = (max_index - south_offset).clamp(0, max_index) as usize;
        let col = (((longitude - bounds.min_lon) / lon_div).floor() as isize).clamp(0, max_index)
            as usize;

        code.push(grid::symbol_at(row, col));
        if SEPARATOR_AFTER.contains(&level) {
            code.push(SEPARATOR);
        }

        bounds = bounds.child(row, col);
    }

    Ok(code)
}

/// Decode a DIGIPIN code into the center of the cell it identifies.
///
/// Separators (`-`) are stripped wherever they appear; the remaining code
/// must consist of exactly ten grid symbols. Decoding is precision-bounded
/// reconstruction: the result is the center of the final cell, not the
/// coordinate originally encoded.
///
/// # Errors
///
/// Returns [`DigipinError::InvalidLength`] when the code (separators
/// excluded) is not exactly ten symbols long, and
/// [`DigipinError::InvalidSymbol`] when a character is not part of the
/// symbol grid.
///
/// # Examples
///
/// ```
/// use digipin::decode;
///
/// let center = decode("39J-49L-L8T4")?;
/// assert!((center.latitude - 28.622788).abs() < 2e-5);
/// assert!((center.longitude - 77.213033).abs() < 2e-5);
///
/// // Separators are optional on input
/// assert_eq!(decode("39J49LL8T4")?, center);
/// # Ok::<(), digipin::DigipinError>(())
/// ```
pub fn decode(code: &str) -> Result<Coordinate> {
    let symbols: Vec<char> = code.chars().filter(|&c| c != SEPARATOR).collect();
    if symbols.len() != LEVELS {
        return Err(DigipinError::InvalidLength {
            length: symbols.len(),
            expected: LEVELS,
        });
    }

    let mut bounds = REGION;
    for (position, &symbol) in symbols.iter().enumerate() {
        let (row, col) =
            grid::position_of(symbol).ok_or(DigipinError::InvalidSymbol { symbol, position })?;
        bounds = bounds.child(row, col);
    }

    let (latitude, longitude) = bounds.center();
    Ok(Coordinate {
        latitude,
        longitude,
    })
}
