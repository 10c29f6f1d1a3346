//! Dependency wiring
//! 依赖装配
//!
//! Turns a `CatalogConfig` into a ready controller: picks the catalog source,
//! fills empty config values from the reference layout, loads the catalog.

use std::path::Path;
use std::sync::Arc;

use pf_app::{LoadCatalog, ProjectCatalogController};
use pf_core::config::CatalogConfig;
use pf_core::ports::CatalogSourcePort;
use pf_core::project::{CatalogLayout, DisclosureLabels};
use pf_infra::{reference_layout, JsonFileCatalogSource, ReferenceCatalogSource};

/// Config values win when non-empty; the reference layout fills the rest.
pub fn layout_from_config(config: &CatalogConfig) -> CatalogLayout {
    let reference = reference_layout();

    CatalogLayout {
        priority_tags: non_empty_or(&config.priority_tags, reference.priority_tags),
        default_titles: non_empty_or(&config.default_titles, reference.default_titles),
        labels: DisclosureLabels {
            show_all: non_blank_or(&config.show_all_label, reference.labels.show_all),
            show_less: non_blank_or(&config.show_less_label, reference.labels.show_less),
        },
    }
}

/// `catalog_override` (from the command line) beats `config.source`; with
/// neither, the compiled-in catalog is used.
pub fn catalog_source(
    config: &CatalogConfig,
    catalog_override: Option<&Path>,
) -> Arc<dyn CatalogSourcePort> {
    let configured = (!config.source.as_os_str().is_empty()).then_some(config.source.as_path());

    match catalog_override.or(configured) {
        Some(path) => Arc::new(JsonFileCatalogSource::new(path)),
        None => Arc::new(ReferenceCatalogSource),
    }
}

pub fn build_controller(
    config: &CatalogConfig,
    catalog_override: Option<&Path>,
) -> anyhow::Result<ProjectCatalogController> {
    let source = catalog_source(config, catalog_override);
    let catalog = LoadCatalog::new(source).execute(layout_from_config(config))?;
    Ok(ProjectCatalogController::new(catalog))
}

fn non_empty_or(values: &[String], fallback: Vec<String>) -> Vec<String> {
    if values.is_empty() {
        fallback
    } else {
        values.to_vec()
    }
}

fn non_blank_or(value: &str, fallback: String) -> String {
    if value.trim().is_empty() {
        fallback
    } else {
        value.to_string()
    }
}
