//! Catalog sources.
//!
//! - `reference`: the page content compiled into the binary
//! - `json_file`: a JSON array of records on disk

pub mod json_file;
pub mod reference;

pub use json_file::JsonFileCatalogSource;
pub use reference::{reference_layout, ReferenceCatalogSource};
