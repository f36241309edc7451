//! Techcatalog - a technology catalog persisted as a JSON document
//!
//! A [`Catalog`] carries a version, a description and an ordered list of
//! [`Technology`] entries. It can be loaded from and persisted to a
//! pretty-printed JSON file, and a technology's description can be updated
//! in place by case-insensitive name.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{Catalog, Technology},
    error::{CatalogError, CatalogResult, StorageAction, StorageCause},
    operations::JsonFileStore,
    traits::CatalogStore,
};
