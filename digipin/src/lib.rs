//! # DigiPin - Grid Geocode Library
//!
//! Deterministic two-way mapping between WGS84 coordinates and DIGIPIN codes:
//! short alphanumeric grid references for the region covering latitude
//! 2.5°–38.5° and longitude 63.5°–99.5°.
//!
//! A code identifies one cell of a fixed hierarchical grid. The region is
//! split into 4×4 sub-rectangles, each labelled with one symbol; the chosen
//! sub-rectangle is split again, ten times in total. The final cell measures
//! about 3.4×10⁻⁵ degrees on each axis (a few metres on the ground), which is
//! the precision bound of the encoding.
//!
//! ## Quick Start
//!
//! ```
//! use digipin::{decode, encode};
//!
//! // Encode a coordinate (Delhi)
//! let code = encode(28.6139, 77.2090)?;
//! assert_eq!(code, "39J-438-TJC7");
//!
//! // Decode back to the center of the identified cell
//! let center = decode(&code)?;
//! assert!((center.latitude - 28.6139).abs() < 2e-5);
//! assert!((center.longitude - 77.2090).abs() < 2e-5);
//!
//! // Re-encoding a decoded center always reproduces the code
//! assert_eq!(encode(center.latitude, center.longitude)?, code);
//! # Ok::<(), digipin::DigipinError>(())
//! ```
//!
//! ## Properties
//!
//! - **Pure and stateless**: both directions are free functions over
//!   compile-time constants; calls never touch I/O or shared mutable state
//!   and can run concurrently without coordination.
//! - **Precision-bounded round trip**: `decode(encode(c))` returns the
//!   center of the cell containing `c`, not `c` itself.
//! - **Closed region**: coordinates exactly on the region's edges (including
//!   the maxima) encode successfully.
//!
//! Invalid input is rejected with a typed [`DigipinError`]; the library never
//! panics on malformed codes or out-of-range coordinates.

pub mod codec;
pub mod error;
pub mod grid;

// Re-export main types at crate root for convenience
pub use codec::{decode, encode, Coordinate};
pub use error::{DigipinError, Result};
pub use grid::{Bounds, GRID_SIZE, LEVELS, REGION, SEPARATOR};
