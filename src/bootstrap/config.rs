//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Parse TOML into CatalogConfig DTO / 将 TOML 解析为 CatalogConfig DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//!
//! Empty values are filled from the reference layout in `wiring`, not here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pf_core::config::CatalogConfig;
use tracing::info;

const CONFIG_DIR_NAME: &str = "portfolio";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<CatalogConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    Ok(CatalogConfig::from_toml(&toml_value))
}

/// `<config_dir>/portfolio/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Pick the configuration to run with.
///
/// An explicit path must exist. Without one, the default path is used when
/// present; otherwise the config is empty and the reference layout applies.
pub fn resolve_config(explicit: Option<&Path>) -> anyhow::Result<CatalogConfig> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "Loading config");
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "Loading default config");
            load_config(&path)
        }
        _ => Ok(CatalogConfig::empty()),
    }
}
