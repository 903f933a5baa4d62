// ==========================================
// 库存阈值计算器 - 配置管理器
// ==========================================
// 职责: 运行时配置加载、查询、覆写
// 存储: JSON 配置文件（可选）+ 环境变量覆写
// ==========================================

use crate::i18n;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 配置键（环境变量名）
// ==========================================
pub mod config_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "INVENTORY_THRESHOLD_CONFIG";
    /// 界面语言（en / zh-CN）
    pub const LOCALE: &str = "INVENTORY_THRESHOLD_LOCALE";
    /// 日志过滤器（同 RUST_LOG 语法）
    pub const LOG_FILTER: &str = "INVENTORY_THRESHOLD_LOG";
    /// 日志输出为 JSON 行（1 / true）
    pub const LOG_JSON: &str = "INVENTORY_THRESHOLD_LOG_JSON";
    /// 输出格式（json / text）
    pub const OUTPUT_FORMAT: &str = "INVENTORY_THRESHOLD_FORMAT";
}

/// 配置目录名（位于系统配置目录下）
const APP_CONFIG_DIR: &str = "inventory-threshold";
const CONFIG_FILE_NAME: &str = "config.json";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 结果输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "text" => Some(OutputFormat::Text),
            _ => None,
        }
    }
}

/// 运行时配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub locale: String,
    pub log_filter: String,
    pub log_json: bool,
    pub output_format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: i18n::DEFAULT_LOCALE.to_string(),
            log_filter: "info".to_string(),
            log_json: false,
            output_format: OutputFormat::Json,
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    config: AppConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 加载配置：默认值 → 配置文件 → 环境变量
    ///
    /// 配置文件查找顺序:
    /// 1. 环境变量 INVENTORY_THRESHOLD_CONFIG 指定的路径（必须存在）
    /// 2. <系统配置目录>/inventory-threshold/config.json（不存在则跳过）
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(config_keys::CONFIG_PATH).map(PathBuf::from);

        let mut manager = match explicit {
            Some(path) => Self::load_from_path(&path)?,
            None => match Self::default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::load_from_path(&path)?,
                None => Self::with_defaults(),
            },
        };

        manager.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(manager)
    }

    /// 从指定配置文件加载（不读取环境变量）
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), "配置文件已加载");

        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 仅使用默认配置
    pub fn with_defaults() -> Self {
        Self {
            config: AppConfig::default(),
            source: None,
        }
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }

    /// 应用覆写（lookup 按配置键取值）
    ///
    /// 非法值保留原配置并告警
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup(config_keys::LOCALE) {
            if i18n::is_supported(&locale) {
                self.config.locale = locale;
            } else {
                tracing::warn!(
                    config_key = config_keys::LOCALE,
                    raw_value = %locale,
                    "语言配置不支持，保留原配置"
                );
            }
        }

        if let Some(filter) = lookup(config_keys::LOG_FILTER) {
            if !filter.trim().is_empty() {
                self.config.log_filter = filter;
            }
        }

        if let Some(flag) = lookup(config_keys::LOG_JSON) {
            self.config.log_json = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }

        if let Some(format) = lookup(config_keys::OUTPUT_FORMAT) {
            match OutputFormat::parse(&format) {
                Some(f) => self.config.output_format = f,
                None => tracing::warn!(
                    config_key = config_keys::OUTPUT_FORMAT,
                    raw_value = %format,
                    "输出格式配置错误，保留原配置"
                ),
            }
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    /// 配置来源文件（None 表示未使用配置文件）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
