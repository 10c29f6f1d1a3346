//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define gallery configuration data structures / 定义画廊配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Falling back to the reference layout for empty values happens in the
//! bootstrap, not here.

use std::path::PathBuf;

/// Catalog configuration DTO (pure data, no logic)
/// 目录配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON catalog file (empty means "use the compiled-in catalog")
    /// JSON 目录文件路径（为空表示使用内置目录）
    pub source: PathBuf,

    /// Priority tags, in order (may be empty)
    pub priority_tags: Vec<String>,

    /// Curated default titles, in order (may be empty)
    pub default_titles: Vec<String>,

    /// Label for the collapsed toggle (may be empty)
    pub show_all_label: String,

    /// Label for the expanded toggle (may be empty)
    pub show_less_label: String,
}

impl CatalogConfig {
    /// Create CatalogConfig from TOML value
    /// 从 TOML 值创建 CatalogConfig
    ///
    /// Missing sections and keys become empty values. Non-string array items
    /// are skipped.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        Self {
            source: PathBuf::from(
                toml_value
                    .get("catalog")
                    .and_then(|c| c.get("source"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            priority_tags: string_array(toml_value, "catalog", "priority_tags"),
            default_titles: string_array(toml_value, "catalog", "default_titles"),
            show_all_label: toml_value
                .get("labels")
                .and_then(|l| l.get("show_all"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            show_less_label: toml_value
                .get("labels")
                .and_then(|l| l.get("show_less"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        }
    }

    /// Create empty CatalogConfig (all empty values)
    /// 创建空的 CatalogConfig（所有字段为空）
    pub fn empty() -> Self {
        Self {
            source: PathBuf::new(),
            priority_tags: Vec::new(),
            default_titles: Vec::new(),
            show_all_label: String::new(),
            show_less_label: String::new(),
        }
    }
}

fn string_array(toml_value: &toml::Value, section: &str, key: &str) -> Vec<String> {
    toml_value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
