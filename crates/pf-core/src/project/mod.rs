//! Project catalog domain module.
//!
//! Records, the derived tag vocabulary, curation layout and the catalog
//! itself. Everything here is immutable once built.

pub mod catalog;
pub mod layout;
pub mod record;
pub mod vocabulary;

pub use catalog::{resolve_titles, Catalog, CatalogError};
pub use layout::{CatalogLayout, DisclosureLabels};
pub use record::{LinkTarget, ProjectLink, ProjectRecord};
pub use vocabulary::TagVocabulary;
