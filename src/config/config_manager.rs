// ==========================================
// 制造看板数据层 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、校验
// 存储: JSON 文件（缺省时使用默认值）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::engine::SequentialIdGenerator;
use crate::i18n::{is_supported_locale, SUPPORTED_LOCALES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// DashboardConfig - 会话配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 通知/标签/CSV 标记使用的语言
    pub locale: String,
    /// 製品 id 前缀
    pub product_id_prefix: String,
    /// 新增製品的起始序号
    pub product_id_start: u64,
    /// 序号补零宽度
    pub product_id_width: usize,
    /// CSV 导出目录
    pub export_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            locale: "ja".to_string(),
            product_id_prefix: "P".to_string(),
            product_id_start: 11,
            product_id_width: 3,
            export_dir: PathBuf::from("."),
        }
    }
}

impl DashboardConfig {
    /// 校验配置
    ///
    /// # 规则
    /// - locale 必须是支持的语言
    /// - product_id_width > 0
    /// - product_id_prefix 非空白
    pub fn validate(&self) -> ConfigResult<()> {
        if !is_supported_locale(&self.locale) {
            return Err(ConfigError::InvalidValue {
                key: config_keys::LOCALE.to_string(),
                message: format!(
                    "不支持的语言 {}（可选: {}）",
                    self.locale,
                    SUPPORTED_LOCALES.join(", ")
                ),
            });
        }

        if self.product_id_width == 0 {
            return Err(ConfigError::InvalidValue {
                key: config_keys::PRODUCT_ID_WIDTH.to_string(),
                message: "补零宽度必须大于 0".to_string(),
            });
        }

        if self.product_id_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: config_keys::PRODUCT_ID_PREFIX.to_string(),
                message: "id 前缀不能为空".to_string(),
            });
        }

        Ok(())
    }

    /// 按配置构造製品 id 生成器
    pub fn id_generator(&self) -> SequentialIdGenerator {
        SequentialIdGenerator::new(
            self.product_id_prefix.clone(),
            self.product_id_start,
            self.product_id_width,
        )
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug)]
pub struct ConfigManager {
    config: DashboardConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用默认配置
    pub fn with_defaults() -> Self {
        Self {
            config: DashboardConfig::default(),
            source: None,
        }
    }

    /// 默认配置文件路径: <config_dir>/manufacturing-dashboard/config.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(config_keys::APP_DIR).join(config_keys::FILE_NAME))
    }

    /// 从 JSON 文件加载（环境变量覆写在最后应用）
    ///
    /// # 参数
    /// - path: 配置文件路径（不存在则使用默认值）
    ///
    /// # 返回
    /// - Err(Read / Parse): 文件存在但无法读取或解析
    /// - Err(InvalidValue): 合并后的配置未通过校验
    pub fn load(path: &Path) -> ConfigResult<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// 从 JSON 文件加载（指定环境变量来源）
    pub fn load_with_env<F>(path: &Path, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (mut config, source) = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config: DashboardConfig =
                serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            info!(path = %path.display(), "配置文件已加载");
            (config, Some(path.to_path_buf()))
        } else {
            debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            (DashboardConfig::default(), None)
        };

        apply_env_overrides(&mut config, env);
        config.validate()?;

        Ok(Self { config, source })
    }

    /// 当前配置
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// 加载来源（None = 默认值）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 取出配置
    pub fn into_config(self) -> DashboardConfig {
        self.config
    }

    /// 配置快照（JSON格式）
    pub fn snapshot_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(&self.config).map_err(|source| ConfigError::Parse {
            path: self.source.clone().unwrap_or_default(),
            source,
        })
    }
}

fn apply_env_overrides<F>(config: &mut DashboardConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(locale) = env(config_keys::ENV_LOCALE).filter(|v| !v.trim().is_empty()) {
        debug!(env = config_keys::ENV_LOCALE, value = %locale, "环境变量覆写");
        config.locale = locale.trim().to_string();
    }
    if let Some(dir) = env(config_keys::ENV_EXPORT_DIR).filter(|v| !v.trim().is_empty()) {
        debug!(env = config_keys::ENV_EXPORT_DIR, value = %dir, "环境变量覆写");
        config.export_dir = PathBuf::from(dir);
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 文件位置
    pub const APP_DIR: &str = "manufacturing-dashboard";
    pub const FILE_NAME: &str = "config.json";

    // 字段
    pub const LOCALE: &str = "locale";
    pub const PRODUCT_ID_PREFIX: &str = "product_id_prefix";
    pub const PRODUCT_ID_WIDTH: &str = "product_id_width";

    // 环境变量
    pub const ENV_LOCALE: &str = "MFG_DASHBOARD_LOCALE";
    pub const ENV_EXPORT_DIR: &str = "MFG_DASHBOARD_EXPORT_DIR";
}
