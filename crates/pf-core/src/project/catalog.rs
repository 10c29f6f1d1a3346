use std::collections::HashMap;

use thiserror::Error;

use super::layout::CatalogLayout;
use super::record::ProjectRecord;
use super::vocabulary::TagVocabulary;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate project title: {0}")]
    DuplicateTitle(String),

    #[error("project at position {position} has an empty title")]
    EmptyTitle { position: usize },
}

/// Immutable, ordered collection of project records.
///
/// Catalog order is the display order for every list the controller derives.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    by_title: HashMap<String, usize>,
    vocabulary: TagVocabulary,
    layout: CatalogLayout,
}

impl Catalog {
    pub fn new(records: Vec<ProjectRecord>, layout: CatalogLayout) -> Result<Self, CatalogError> {
        let mut by_title = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { position });
            }
            if by_title.insert(record.title.clone(), position).is_some() {
                return Err(CatalogError::DuplicateTitle(record.title.clone()));
            }
        }

        #[cfg(feature = "tracing")]
        {
            for title in &layout.default_titles {
                if !by_title.contains_key(title) {
                    tracing::debug!(%title, "curated default title not found in catalog");
                }
            }
        }

        let vocabulary = TagVocabulary::derive(&records, &layout.priority_tags);

        Ok(Self {
            records,
            by_title,
            vocabulary,
            layout,
        })
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn get(&self, title: &str) -> Option<&ProjectRecord> {
        self.by_title.get(title).map(|&index| &self.records[index])
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn layout(&self) -> &CatalogLayout {
        &self.layout
    }

    /// Curated default titles resolved against the whole catalog.
    pub fn default_subset(&self) -> Vec<&ProjectRecord> {
        let all: Vec<&ProjectRecord> = self.records.iter().collect();
        resolve_titles(&all, &self.layout.default_titles)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolve curated titles against a candidate list.
///
/// Each title is looked up through a title → record map built over
/// `candidates`; titles without a match are skipped. Output follows the order
/// of `titles`, not of `candidates`.
pub fn resolve_titles<'a>(
    candidates: &[&'a ProjectRecord],
    titles: &[String],
) -> Vec<&'a ProjectRecord> {
    let index: HashMap<&str, &'a ProjectRecord> = candidates
        .iter()
        .map(|record| (record.title.as_str(), *record))
        .collect();

    titles
        .iter()
        .filter_map(|title| index.get(title.as_str()).copied())
        .collect()
}
