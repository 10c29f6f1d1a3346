use serde::{Deserialize, Serialize};

pub const DEFAULT_SHOW_ALL_LABEL: &str = "Show All Projects";
pub const DEFAULT_SHOW_LESS_LABEL: &str = "Show Less";

/// Curation applied on top of the raw records.
///
/// 目录的展示策略：优先标签、默认展示子集、切换按钮文案。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLayout {
    /// Tags that lead the vocabulary, in this order.
    #[serde(default)]
    pub priority_tags: Vec<String>,

    /// Titles shown while collapsed and unfiltered, in this order.
    #[serde(default)]
    pub default_titles: Vec<String>,

    #[serde(default)]
    pub labels: DisclosureLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureLabels {
    pub show_all: String,
    pub show_less: String,
}

impl Default for DisclosureLabels {
    fn default() -> Self {
        Self {
            show_all: DEFAULT_SHOW_ALL_LABEL.to_string(),
            show_less: DEFAULT_SHOW_LESS_LABEL.to_string(),
        }
    }
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            priority_tags: Vec::new(),
            default_titles: Vec::new(),
            labels: DisclosureLabels::default(),
        }
    }
}
