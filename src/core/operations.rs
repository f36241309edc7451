//! File-backed implementation of `CatalogStore`

use crate::config::Config;
use crate::core::data::Catalog;
use crate::core::error::{CatalogError, CatalogResult};
use crate::core::traits::CatalogStore;
use std::path::{Path, PathBuf};

/// Catalog store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Option<PathBuf>,
}

impl JsonFileStore {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Store for the catalog file named in the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(Some(config.general.catalog_file.clone()))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn require_path(&self) -> CatalogResult<&Path> {
        self.path
            .as_deref()
            .ok_or_else(|| CatalogError::InvalidArgument("No catalog file configured".to_string()))
    }
}

impl CatalogStore for JsonFileStore {
    fn load_catalog(&self) -> CatalogResult<Catalog> {
        Catalog::load(self.require_path()?)
    }

    fn save_catalog(&self, catalog: &Catalog) -> CatalogResult<()> {
        catalog.persist(self.require_path()?)
    }
}
