//! Core business logic layer
//!
//! This module contains the catalog data structures, their JSON persistence,
//! and the storage trait the commands are written against.

pub mod data;
pub mod error;
pub mod operations;
pub mod storage;
pub mod traits;
