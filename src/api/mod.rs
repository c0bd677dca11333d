// ==========================================
// 制造看板数据层 - API 层
// ==========================================
// 职责: 提供给展示层的业务接口
// 流程: 快照 → 纯迁移 → 成功则整体替换 + 通知;失败则 warn + 返回错误
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod inventory_api;
pub mod master_api;
pub mod notifier;
pub mod process_api;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, LineSummary};
pub use error::{ApiError, ApiResult};
pub use inventory_api::{InventoryApi, InventoryStatusSummary};
pub use master_api::MasterApi;
pub use notifier::Notifier;
pub use process_api::ProcessApi;
