//! Core trait definitions for catalog storage
//!
//! Commands talk to a `CatalogStore` rather than to the file system so the
//! persistence backend stays swappable in tests.

use crate::core::data::{Catalog, Technology};
use crate::core::error::CatalogResult;

/// Storage operations for a catalog
pub trait CatalogStore {
    /// Load the whole catalog, replacing nothing in memory
    fn load_catalog(&self) -> CatalogResult<Catalog>;

    /// Save the catalog, overwriting the stored copy
    fn save_catalog(&self, catalog: &Catalog) -> CatalogResult<()>;

    /// Load, apply `update_technology`, and save only when something changed.
    ///
    /// Returns whether a technology matched.
    fn update_technology(&self, candidate: Option<&Technology>) -> CatalogResult<bool> {
        let mut catalog = self.load_catalog()?;
        let updated = catalog.update_technology(candidate);
        if updated {
            self.save_catalog(&catalog)?;
        }
        Ok(updated)
    }
}
