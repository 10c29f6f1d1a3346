//! Project catalog controller
//! 项目目录控制器
//!
//! Owns the filter state for one gallery and keeps a derived view in sync
//! with it. Every operation recomputes the view before returning, so a reader
//! never observes a stale list.

use std::sync::Arc;

use tracing::{debug, debug_span};
use pf_core::filter::{CatalogEvent, FilterState, FilterStateMachine, ProjectFilter};
use pf_core::ports::ViewObserverPort;
use pf_core::project::{Catalog, ProjectRecord, TagVocabulary};
use pf_core::view::CatalogView;

pub struct ProjectCatalogController {
    catalog: Arc<Catalog>,
    state: FilterState,
    view: CatalogView,
    observers: Vec<Arc<dyn ViewObserverPort>>,
}

impl ProjectCatalogController {
    /// Create a controller in the default state: no search, no tags, collapsed.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = FilterState::new();
        let view = CatalogView::derive(&catalog, &state);
        Self {
            catalog,
            state,
            view,
            observers: Vec::new(),
        }
    }

    /// Register an observer. It receives the current view immediately and
    /// every recomputed view afterwards.
    pub fn subscribe(&mut self, observer: Arc<dyn ViewObserverPort>) {
        observer.on_view_changed(&self.view);
        self.observers.push(observer);
    }

    /// Apply one control event and recompute the view.
    pub fn dispatch(&mut self, event: CatalogEvent) -> &CatalogView {
        let span = debug_span!("usecase.catalog_controller.dispatch", event = ?event);
        let _guard = span.enter();

        let state = std::mem::take(&mut self.state);
        self.state = FilterStateMachine::transition(state, event);
        self.view = CatalogView::derive(&self.catalog, &self.state);

        debug!(
            search_text = %self.state.search_text(),
            selected_tags = self.state.selected_tags().len(),
            expanded = self.state.expanded(),
            matched = self.view.matched_count,
            visible = self.view.len(),
            "Catalog view recomputed"
        );

        for observer in &self.observers {
            observer.on_view_changed(&self.view);
        }
        &self.view
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> &CatalogView {
        self.dispatch(CatalogEvent::SetSearchText { text: text.into() })
    }

    pub fn toggle_tag(&mut self, tag: impl Into<String>) -> &CatalogView {
        self.dispatch(CatalogEvent::ToggleTag { tag: tag.into() })
    }

    pub fn toggle_expanded(&mut self) -> &CatalogView {
        self.dispatch(CatalogEvent::ToggleExpanded)
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        self.catalog.vocabulary()
    }

    pub fn visible_projects(&self) -> &[ProjectRecord] {
        &self.view.projects
    }

    /// Every record passing the current filter, ignoring the default subset.
    pub fn matched_projects(&self) -> Vec<&ProjectRecord> {
        ProjectFilter::from_state(&self.state).apply(self.catalog.records())
    }

    pub fn is_filtering(&self) -> bool {
        self.view.is_filtering
    }

    pub fn expanded(&self) -> bool {
        self.view.expanded
    }
}
