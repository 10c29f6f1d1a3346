use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single entry in the project gallery.
///
/// Records are built once when the catalog is loaded and never mutated.
/// 记录在目录加载时创建，之后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Identity key, unique within a catalog.
    pub title: String,

    pub description: String,

    /// Category labels used for faceted filtering.
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Display hint only, never consulted by the filter.
    #[serde(default)]
    pub image: Option<String>,

    /// Outbound links in display order.
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

impl ProjectRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tags: BTreeSet::new(),
            image: None,
            links: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.links.push(ProjectLink::new(label, url));
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
}

impl ProjectLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Where the surface should open this link.
    ///
    /// Absolute web urls open in a new tab. Anything else (`mailto:`, a resume
    /// file served by the site, `#`) opens in place.
    pub fn target(&self) -> LinkTarget {
        if self.url.starts_with("http") {
            LinkTarget::NewTab
        } else {
            LinkTarget::SameTab
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    NewTab,
    SameTab,
}
