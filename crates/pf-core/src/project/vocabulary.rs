use std::collections::BTreeSet;

use serde::Serialize;

use super::record::ProjectRecord;

/// Ordered set of every tag used by the catalog.
///
/// ## Ordering / 排序
/// - Priority tags first, in priority-list order
/// - Remaining tags after, in lexicographic order
///
/// Priority tags that no record uses are left out, so every entry can match
/// at least one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagVocabulary(Vec<String>);

impl TagVocabulary {
    pub fn derive(records: &[ProjectRecord], priority: &[String]) -> Self {
        let mut remaining: BTreeSet<&str> = records
            .iter()
            .flat_map(|record| record.tags.iter().map(String::as_str))
            .collect();

        let mut ordered = Vec::with_capacity(remaining.len());
        for tag in priority {
            // `remove` doubles as dedup for repeated priority entries.
            if remaining.remove(tag.as_str()) {
                ordered.push(tag.clone());
            }
        }
        ordered.extend(remaining.into_iter().map(str::to_string));

        Self(ordered)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|candidate| candidate == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
