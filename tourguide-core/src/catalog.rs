//! Access to the external attraction catalog.
//!
//! The `AttractionCatalog` trait abstracts the catalog service. It is assumed
//! cheap or cached; the reward calculator fetches the full catalog once per
//! calculation.

use thiserror::Error;

use crate::Attraction;

/// Errors from [`AttractionCatalog::get_attractions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog service could not be reached or answered abnormally.
    #[error("attraction catalog unavailable: {reason}")]
    Unavailable {
        /// Service-provided description of the failure.
        reason: String,
    },
}

/// Fetch the full set of attractions.
///
/// Implementations must be `Send + Sync`; the catalog is read concurrently.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tourguide_core::{Attraction, AttractionCatalog, CatalogError};
///
/// struct SingleAttraction;
///
/// impl AttractionCatalog for SingleAttraction {
///     fn get_attractions(&self) -> Result<Vec<Attraction>, CatalogError> {
///         Ok(vec![Attraction::new(1, "Disneyland", Coord { x: -117.922, y: 33.817 })])
///     }
/// }
///
/// let attractions = SingleAttraction.get_attractions()?;
/// assert_eq!(attractions.len(), 1);
/// # Ok::<(), CatalogError>(())
/// ```
pub trait AttractionCatalog: Send + Sync {
    /// Return every attraction in the catalog.
    fn get_attractions(&self) -> Result<Vec<Attraction>, CatalogError>;
}

impl<T: AttractionCatalog + ?Sized> AttractionCatalog for &T {
    fn get_attractions(&self) -> Result<Vec<Attraction>, CatalogError> {
        (**self).get_attractions()
    }
}
