//! Error types for the DigiPin library.

use thiserror::Error;

/// Errors that can occur when encoding or decoding DIGIPIN codes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigipinError {
    /// Latitude is outside the bounding region (or not finite).
    #[error("latitude {latitude} out of range (valid: {min} to {max})")]
    LatitudeOutOfRange { latitude: f64, min: f64, max: f64 },

    /// Longitude is outside the bounding region (or not finite).
    #[error("longitude {longitude} out of range (valid: {min} to {max})")]
    LongitudeOutOfRange { longitude: f64, min: f64, max: f64 },

    /// Code has the wrong number of symbols after separators are removed.
    #[error("invalid code length: {length} symbols (expected {expected})")]
    InvalidLength { length: usize, expected: usize },

    /// Code contains a character that is not part of the symbol grid.
    /// The position is the zero-based index among non-separator symbols.
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Result type alias using [`DigipinError`].
pub type Result<T> = std::result::Result<T, DigipinError>;
