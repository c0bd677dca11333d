// ==========================================
// 制造看板数据层 - 应用层
// ==========================================
// 职责: 组装会话（配置 + 仓储 + 引擎依赖 + API）
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_config_path, AppState};
