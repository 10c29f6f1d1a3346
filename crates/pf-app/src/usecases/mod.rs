//! Business logic use cases
//! 业务用例
//!
//! [CatalogSourcePort]
//         ↓
// LoadCatalog                 → Arc<Catalog>
//         ↓
// ProjectCatalogController    → CatalogView → rendering surface

pub mod catalog_controller;
pub mod load_catalog;

pub use catalog_controller::ProjectCatalogController;
pub use load_catalog::LoadCatalog;
