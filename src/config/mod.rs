// ==========================================
// 制造看板数据层 - 配置层
// ==========================================
// 职责: 会话配置加载,支持 JSON 文件 + 环境变量覆写
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

pub mod config_manager;
pub mod error;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, DashboardConfig};
pub use error::{ConfigError, ConfigResult};
