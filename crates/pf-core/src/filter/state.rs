use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Mutable filter state owned by the catalog controller.
///
/// Every combination of values is valid; there is no invalid filter state.
/// 所有取值组合都是合法状态。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    search_text: String,
    selected_tags: BTreeSet<String>,
    expanded: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw search text as typed, untrimmed.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Replace the search text verbatim.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Add `tag` if absent, remove it if present.
    ///
    /// Membership is not checked against the vocabulary; an unknown tag is
    /// kept and simply never matches.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Search text as used for matching: trimmed and lower-cased.
    pub fn normalized_query(&self) -> String {
        self.search_text.trim().to_lowercase()
    }

    pub fn is_filtering(&self) -> bool {
        !self.search_text.trim().is_empty() || !self.selected_tags.is_empty()
    }
}
