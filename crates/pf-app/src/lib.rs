//! Portfolio gallery application layer
//!
//! This crate contains the use cases that drive the project catalog.

pub mod usecases;

pub use usecases::{LoadCatalog, ProjectCatalogController};
