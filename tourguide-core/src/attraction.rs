//! Tourist attractions sourced from the external catalog.

use geo::Coord;

/// A named point of interest with fixed coordinates.
///
/// Attractions are read-only to this engine; the external catalog owns them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tourguide_core::Attraction;
///
/// let attraction = Attraction::new(1, "Disneyland", Coord { x: -117.922, y: 33.817 });
/// assert_eq!(attraction.name, "Disneyland");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attraction {
    /// Unique identifier within the catalog.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Geospatial position, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
}

impl Attraction {
    /// Construct an attraction.
    pub fn new(id: u64, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            location,
        }
    }
}
