pub mod content;

pub use content::{reference_layout, JsonFileCatalogSource, ReferenceCatalogSource};
