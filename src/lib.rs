// ==========================================
// 制造看板数据层 - 核心库
// ==========================================
// 范围: 在库管理 / 工程管理（看板）/ マスタメンテナンス / 驾驶舱
// 技术栈: Rust + 会话内存存储（无持久化）
// 红线: 派生字段（在库状态、进度）只由规则计算,不可单独写入
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 状态派生、过滤、迁移
pub mod engine;

// 数据仓储层 - 会话集合
pub mod repository;

// 种子数据
pub mod fixtures;

// 导出层 - CSV
pub mod export;

// 配置层 - 会话配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 会话组装
pub mod app;

// 依赖包 URL 提取（离线安装辅助）
pub mod lockfile;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AlertType, InventoryStatus, LineState, Priority, ProcessStatus, StockDirection};

// 领域实体
pub use domain::{
    Alert, InventoryItem, KanbanColumn, KpiSnapshot, LineStatus, ManufacturingOrder, Product,
    ProductDraft, ProductPatch, ProductionPoint,
};

// 引擎
pub use engine::{
    classify_inventory_status, progress_for_status, FilterCriteria, MutationOutcome, Notification,
    TransitionError,
};

// API
pub use api::{ApiError, ApiResult, DashboardApi, InventoryApi, MasterApi, ProcessApi};

// 应用
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "製造ダッシュボード";
