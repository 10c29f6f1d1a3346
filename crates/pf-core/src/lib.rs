//! # pf-core
//!
//! Core domain models and filtering logic for the portfolio project gallery.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod filter;
pub mod ports;
pub mod project;
pub mod view;

// Re-export commonly used types at the crate root
pub use config::CatalogConfig;
pub use filter::{CatalogEvent, FilterState, FilterStateMachine, ProjectFilter};
pub use project::{Catalog, CatalogError, CatalogLayout, ProjectLink, ProjectRecord, TagVocabulary};
pub use view::CatalogView;
