//! Grid geometry and symbol tables for the DIGIPIN hierarchy.
//!
//! The whole encoding is defined over one fixed rectangle ([`REGION`]) that
//! is recursively subdivided into 4×4 cells. Each cell position carries one
//! symbol from [`SYMBOL_GRID`]; encode and decode both go through
//! [`Bounds::child`], so the forward and inverse directions can never drift
//! apart.

/// Number of subdivision levels in a complete code.
pub const LEVELS: usize = 10;

/// Rows and columns per subdivision step.
pub const GRID_SIZE: usize = 4;

/// Separator character inserted into codes for readability.
pub const SEPARATOR: char = '-';

/// Symbol counts after which a separator is inserted (XXX-XXX-XXXX).
pub(crate) const SEPARATOR_AFTER: [usize; 2] = [3, 6];

/// Position-to-symbol table. Row 0 is the north edge of the current cell,
/// column 0 the west edge.
pub(crate) const SYMBOL_GRID: [[char; GRID_SIZE]; GRID_SIZE] = [
    ['F', 'C', '9', '8'],
    ['J', '3', '2', '7'],
    ['K', '4', '5', '6'],
    ['L', 'M', 'P', 'T'],
];

/// A latitude/longitude rectangle in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum latitude (southern boundary).
    pub min_lat: f64,
    /// Maximum latitude (northern boundary).
    pub max_lat: f64,
    /// Minimum longitude (western boundary).
    pub min_lon: f64,
    /// Maximum longitude (eastern boundary).
    pub max_lon: f64,
}

/// The fixed bounding region all DIGIPIN codes are defined over.
pub const REGION: Bounds = Bounds {
    min_lat: 2.5,
    max_lat: 38.5,
    min_lon: 63.5,
    max_lon: 99.5,
};

impl Bounds {
    /// Latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Longitude extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Whether a coordinate lies inside this rectangle (inclusive bounds).
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&latitude)
            && (self.min_lon..=self.max_lon).contains(&longitude)
    }

    /// Geometric center of the rectangle as `(latitude, longitude)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// The sub-rectangle at `(row, col)` of the 4×4 subdivision.
    ///
    /// Row 0 is the northernmost strip. The children of a cell tile it
    /// exactly; both codec directions derive their geometry from here.
    pub(crate) fn child(&self, row: usize, col: usize) -> Bounds {
        debug_assert!(row < GRID_SIZE && col < GRID_SIZE);
        let lat_div = self.lat_span() / GRID_SIZE as f64;
        let lon_div = self.lon_span() / GRID_SIZE as f64;

        Bounds {
            min_lat: self.min_lat + lat_div * (GRID_SIZE - 1 - row) as f64,
            max_lat: self.min_lat + lat_div * (GRID_SIZE - row) as f64,
            min_lon: self.min_lon + lon_div * col as f64,
            max_lon: self.min_lon + lon_div * (col + 1) as f64,
        }
    }
}

/// Symbol assigned to a `(row, col)` grid position.
pub(crate) fn symbol_at(row: usize, col: usize) -> char {
    SYMBOL_GRID[row][col]
}

/// Inverse lookup: the `(row, col)` position a symbol labels, if any.
pub(crate) fn position_of(symbol: char) -> Option<(usize, usize)> {
    for (row, symbols) in SYMBOL_GRID.iter().enumerate() {
        for (col, &s) in symbols.iter().enumerate() {
            if s == symbol {
                return Some((row, col));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup_roundtrip() {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let symbol = symbol_at(row, col);
                assert_eq!(position_of(symbol), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_symbols_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for row in SYMBOL_GRID {
            for symbol in row {
                assert!(seen.insert(symbol), "duplicate symbol {}", symbol);
            }
        }
        assert_eq!(seen.len(), GRID_SIZE * GRID_SIZE);
    }

    #[test]
    fn test_unknown_symbols_rejected() {
        for symbol in ['A', 'B', 'Z', '0', '1', 'f', 'j', '-', ' '] {
            assert_eq!(position_of(symbol), None);
        }
    }

    #[test]
    fn test_children_tile_parent() {
        // Children of a row tile it west to east, rows stack north to south
        // with no gaps.
        let parent = REGION;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let child = parent.child(row, col);
                assert!(child.min_lat < child.max_lat);
                assert!(child.min_lon < child.max_lon);
                assert!((child.lat_span() - parent.lat_span() / 4.0).abs() < 1e-12);
                assert!((child.lon_span() - parent.lon_span() / 4.0).abs() < 1e-12);
            }
        }

        // Row 0 touches the north edge, row 3 the south edge.
        assert_eq!(parent.child(0, 0).max_lat, parent.max_lat);
        assert_eq!(parent.child(GRID_SIZE - 1, 0).min_lat, parent.min_lat);
        // Column 0 touches the west edge, column 3 the east edge.
        assert_eq!(parent.child(0, 0).min_lon, parent.min_lon);
        assert_eq!(parent.child(0, GRID_SIZE - 1).max_lon, parent.max_lon);

        // Adjacent children share their boundary exactly.
        for row in 0..GRID_SIZE - 1 {
            assert_eq!(
                parent.child(row, 0).min_lat,
                parent.child(row + 1, 0).max_lat
            );
        }
        for col in 0..GRID_SIZE - 1 {
            assert_eq!(
                parent.child(0, col).max_lon,
                parent.child(0, col + 1).min_lon
            );
        }
    }

    #[test]
    fn test_region_contains() {
        assert!(REGION.contains(20.0, 80.0));
        assert!(REGION.contains(2.5, 63.5));
        assert!(REGION.contains(38.5, 99.5));
        assert!(!REGION.contains(1.0, 80.0));
        assert!(!REGION.contains(39.0, 80.0));
        assert!(!REGION.contains(20.0, 63.0));
        assert!(!REGION.contains(20.0, 100.0));
        assert!(!REGION.contains(f64::NAN, 80.0));
    }

    #[test]
    fn test_center() {
        let (lat, lon) = REGION.center();
        assert_eq!(lat, 20.5);
        assert_eq!(lon, 81.5);
    }
}
