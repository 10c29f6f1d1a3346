//! Use case for building the project catalog
//! 构建项目目录的用例

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span};
use pf_core::ports::CatalogSourcePort;
use pf_core::project::{Catalog, CatalogLayout};

/// Use case for loading records and building an immutable catalog.
///
/// ## Behavior / 行为
/// - Loads records from the catalog source port
/// - Builds the title index and tag vocabulary
/// - Fails on duplicate or blank titles
pub struct LoadCatalog {
    source: Arc<dyn CatalogSourcePort>,
}

impl LoadCatalog {
    /// Create a new LoadCatalog use case.
    pub fn new(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self { source }
    }

    /// Execute the use case.
    ///
    /// # Returns / 返回值
    /// - `Ok(Arc<Catalog>)` - The catalog, ready to be shared with a controller
    /// - `Err(e)` if the source fails or the records are inconsistent
    pub fn execute(&self, layout: CatalogLayout) -> Result<Arc<Catalog>> {
        let span = info_span!("usecase.load_catalog.execute", source = %self.source.describe());
        let _guard = span.enter();

        let records = self
            .source
            .load()
            .with_context(|| format!("Failed to load catalog from {}", self.source.describe()))?;

        let catalog = Catalog::new(records, layout).context("Catalog records are inconsistent")?;

        info!(
            projects = catalog.len(),
            tags = catalog.vocabulary().len(),
            default_subset = catalog.default_subset().len(),
            "Catalog loaded"
        );
        Ok(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::ports::CatalogSourceError;
    use pf_core::project::ProjectRecord;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticSource {
        records: Vec<ProjectRecord>,
        load_count: AtomicUsize,
    }

    impl CatalogSourcePort for StaticSource {
        fn describe(&self) -> String {
            "static test records".to_string()
        }

        fn load(&self) -> Result<Vec<ProjectRecord>, CatalogSourceError> {
            self.load_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    struct BrokenSource;

    impl CatalogSourcePort for BrokenSource {
        fn describe(&self) -> String {
            "broken".to_string()
        }

        fn load(&self) -> Result<Vec<ProjectRecord>, CatalogSourceError> {
            Err(CatalogSourceError::Io("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_load_catalog_builds_catalog_once() {
        let source = Arc::new(StaticSource {
            records: vec![
                ProjectRecord::new("A", "a").with_tags(["Web"]),
                ProjectRecord::new("B", "b"),
            ],
            load_count: AtomicUsize::new(0),
        });

        let catalog = LoadCatalog::new(source.clone())
            .execute(CatalogLayout::default())
            .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(source.load_count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_load_catalog_reports_source_failure_with_context() {
        let err = LoadCatalog::new(Arc::new(BrokenSource))
            .execute(CatalogLayout::default())
            .unwrap_err();

        let message = format!("{err:#}");
        assert!(message.contains("Failed to load catalog from broken"));
        assert!(message.contains("disk on fire"));
    }

    #[test]
    fn test_load_catalog_rejects_duplicate_titles() {
        let source = Arc::new(StaticSource {
            records: vec![ProjectRecord::new("A", "a"), ProjectRecord::new("A", "b")],
            load_count: AtomicUsize::new(0),
        });

        let err = LoadCatalog::new(source)
            .execute(CatalogLayout::default())
            .unwrap_err();

        assert!(format!("{err:#}").contains("duplicate project title: A"));
    }
}
