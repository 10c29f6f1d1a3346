use std::collections::BTreeSet;

use crate::project::ProjectRecord;

use super::state::FilterState;

/// Search × tag predicate for one filter state.
///
/// A record matches when both hold:
/// - the normalized query is a substring of its title, description or any tag
///   (case-insensitive; an empty query matches everything)
/// - it carries every selected tag (an empty selection matches everything)
pub struct ProjectFilter<'s> {
    query: String,
    selected_tags: &'s BTreeSet<String>,
}

impl<'s> ProjectFilter<'s> {
    pub fn from_state(state: &'s FilterState) -> Self {
        Self {
            query: state.normalized_query(),
            selected_tags: state.selected_tags(),
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        self.matches_search(record) && self.matches_tags(record)
    }

    /// Stable filter; output keeps catalog order.
    pub fn apply<'a>(&self, records: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    fn matches_search(&self, record: &ProjectRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.as_str();
        record.title.to_lowercase().contains(query)
            || record.description.to_lowercase().contains(query)
            || record
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query))
    }

    fn matches_tags(&self, record: &ProjectRecord) -> bool {
        self.selected_tags.iter().all(|tag| record.has_tag(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ProjectRecord> {
        vec![
            ProjectRecord::new("Heart Monitor", "Wearable ECG").with_tags(["Healthcare", "Embedded"]),
            ProjectRecord::new("Recipe Box", "Cooking with friends").with_tags(["Web"]),
            ProjectRecord::new("Step Counter", "Daily activity").with_tags(["Healthcare", "Mobile"]),
            ProjectRecord::new("Budget", "Money tracker"),
        ]
    }

    fn titles(matched: &[&ProjectRecord]) -> Vec<String> {
        matched.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn empty_state_matches_all_in_order() {
        let state = FilterState::new();
        let records = records();

        let matched = ProjectFilter::from_state(&state).apply(&records);
        assert_eq!(matched.len(), 4);
        assert_eq!(titles(&matched)[0], "Heart Monitor");
        assert_eq!(titles(&matched)[3], "Budget");
    }

    #[test]
    fn search_is_case_insensitive_across_title_description_and_tags() {
        let records = records();
        let mut state = FilterState::new();

        state.set_search_text("HEART");
        assert_eq!(titles(&ProjectFilter::from_state(&state).apply(&records)), ["Heart Monitor"]);

        state.set_search_text("friends");
        assert_eq!(titles(&ProjectFilter::from_state(&state).apply(&records)), ["Recipe Box"]);

        state.set_search_text("  health ");
        assert_eq!(
            titles(&ProjectFilter::from_state(&state).apply(&records)),
            ["Heart Monitor", "Step Counter"]
        );
    }

    #[test]
    fn selected_tags_are_conjunctive() {
        let records = records();
        let mut state = FilterState::new();

        state.toggle_tag("Healthcare");
        assert_eq!(ProjectFilter::from_state(&state).apply(&records).len(), 2);

        state.toggle_tag("Mobile");
        assert_eq!(
            titles(&ProjectFilter::from_state(&state).apply(&records)),
            ["Step Counter"]
        );
    }

    #[test]
    fn tag_selection_is_case_sensitive() {
        let records = records();
        let mut state = FilterState::new();
        state.toggle_tag("healthcare");

        assert!(ProjectFilter::from_state(&state).apply(&records).is_empty());
    }

    #[test]
    fn search_and_tags_must_both_hold() {
        let records = records();
        let mut state = FilterState::new();
        state.set_search_text("counter");
        state.toggle_tag("Embedded");

        assert!(ProjectFilter::from_state(&state).apply(&records).is_empty());
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        let records = records();
        let mut state = FilterState::new();
        state.toggle_tag("Quantum");

        assert!(ProjectFilter::from_state(&state).apply(&records).is_empty());
    }
}
