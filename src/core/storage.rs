//! JSON file persistence for catalogs

use crate::core::data::Catalog;
use crate::core::error::{CatalogError, CatalogResult, StorageAction};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

fn require_path<'a>(path: &'a Path, action: StorageAction) -> CatalogResult<&'a Path> {
    if path.as_os_str().is_empty() {
        return Err(CatalogError::InvalidArgument(format!(
            "File path to {} cannot be empty",
            action
        )));
    }
    Ok(path)
}

impl Catalog {
    /// Read a catalog from the JSON document at `path`.
    ///
    /// Any mismatch with the expected shape (missing, extra or mistyped
    /// fields) is an error; nothing is returned on failure.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
        let path = require_path(path.as_ref(), StorageAction::Read)?;

        let file = File::open(path)
            .map_err(|e| CatalogError::storage(StorageAction::Read, path, e))?;

        let catalog: Catalog = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| CatalogError::storage(StorageAction::Read, path, e))?;

        log::debug!(
            "Loaded catalog {} with {} technologies from {}",
            catalog.version,
            catalog.technologies.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Write the catalog to `path` as pretty-printed JSON, replacing any
    /// existing file. Parent directories are not created.
    pub fn persist(&self, path: impl AsRef<Path>) -> CatalogResult<()> {
        let path = require_path(path.as_ref(), StorageAction::Write)?;

        let file = File::create(path)
            .map_err(|e| CatalogError::storage(StorageAction::Write, path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| CatalogError::storage(StorageAction::Write, path, e))?;
        writer
            .flush()
            .map_err(|e| CatalogError::storage(StorageAction::Write, path, e))?;

        log::debug!(
            "Persisted catalog {} with {} technologies to {}",
            self.version,
            self.technologies.len(),
            path.display()
        );
        Ok(())
    }

    /// The exact document `persist` writes
    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CatalogError::storage(StorageAction::Write, "<memory>", e)
        })
    }
}
