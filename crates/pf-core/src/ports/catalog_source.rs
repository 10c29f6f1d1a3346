use crate::project::ProjectRecord;

use super::errors::CatalogSourceError;

/// Supplies the records a catalog is built from.
///
/// Loading happens once, before the controller exists; implementations are
/// free to block.
pub trait CatalogSourcePort: Send + Sync {
    /// Short description of where records come from, for logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<ProjectRecord>, CatalogSourceError>;
}
