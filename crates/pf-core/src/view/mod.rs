//! Display-ready snapshot of the project gallery.
//!
//! The rendering surface reads a [`CatalogView`] and nothing else: the
//! visible cards, the tag chips, and whether to draw the disclosure toggle or
//! the "no results" placeholder.

use serde::Serialize;

use crate::filter::{FilterState, ProjectFilter};
use crate::project::{resolve_titles, Catalog, ProjectRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    /// Projects to render, in display order.
    pub projects: Vec<ProjectRecord>,

    /// Raw search text, echoed back for the search box.
    pub search_text: String,

    pub tags: Vec<TagChip>,

    pub is_filtering: bool,

    pub expanded: bool,

    /// Size of the filtered list before the default subset is applied.
    pub matched_count: usize,

    /// Size of the curated default subset after dropping unknown titles.
    pub default_subset_len: usize,

    /// `None` when the show-all control must not be drawn.
    pub toggle: Option<DisclosureToggle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub tag: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosureToggle {
    pub label: String,
    pub expanded: bool,
}

impl CatalogView {
    /// Derive the view for `state`.
    ///
    /// ## Behavior / 行为
    /// - Filtering: every match, in catalog order (expansion ignored)
    /// - Collapsed: curated default titles looked up among the matches
    /// - Expanded: every match, in catalog order
    pub fn derive(catalog: &Catalog, state: &FilterState) -> Self {
        let layout = catalog.layout();
        let is_filtering = state.is_filtering();
        let matched = ProjectFilter::from_state(state).apply(catalog.records());
        let default_subset_len = catalog.default_subset().len();

        let visible = if is_filtering || state.expanded() {
            matched.clone()
        } else {
            resolve_titles(&matched, &layout.default_titles)
        };

        let toggle = (!is_filtering && matched.len() > default_subset_len).then(|| {
            let label = if state.expanded() {
                &layout.labels.show_less
            } else {
                &layout.labels.show_all
            };
            DisclosureToggle {
                label: label.clone(),
                expanded: state.expanded(),
            }
        });

        let tags = catalog
            .vocabulary()
            .iter()
            .map(|tag| TagChip {
                tag: tag.to_string(),
                selected: state.selected_tags().contains(tag),
            })
            .collect();

        Self {
            projects: visible.into_iter().cloned().collect(),
            search_text: state.search_text().to_string(),
            tags,
            is_filtering,
            expanded: state.expanded(),
            matched_count: matched.len(),
            default_subset_len,
            toggle,
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// `true` when the surface should show the "no results" placeholder.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.title.as_str()).collect()
    }
}
