//! Coordinate reference system identifiers.

/// An EPSG-coded coordinate reference system.
///
/// The pipeline works in geographic coordinates throughout; the CRS is
/// carried so that exported rasters can be geo-referenced correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crs(u32);

impl Crs {
    /// Geographic WGS 84 (EPSG:4326).
    pub const WGS84: Crs = Crs(4326);

    /// Creates a CRS from an EPSG code.
    pub const fn from_epsg(code: u32) -> Self {
        Crs(code)
    }

    /// The EPSG code.
    pub const fn epsg(&self) -> u32 {
        self.0
    }
}

impl Default for Crs {
    fn default() -> Self {
        Self::WGS84
    }
}

impl std::fmt::Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_wgs84() {
        assert_eq!(Crs::default(), Crs::WGS84);
        assert_eq!(Crs::default().epsg(), 4326);
    }

    #[test]
    fn display_format() {
        assert_eq!(Crs::from_epsg(32642).to_string(), "EPSG:32642");
        assert_eq!(Crs::WGS84.to_string(), "EPSG:4326");
    }
}
