// ==========================================
// 制造看板数据层 - 领域模型层
// ==========================================
// 职责: 定义实体与封闭枚举
// 红线: 不含过滤/迁移逻辑,派生字段只通过 engine::status_core 计算
// ==========================================

pub mod dashboard;
pub mod inventory;
pub mod order;
pub mod product;
pub mod types;

// 重导出核心类型
pub use dashboard::{Alert, KpiSnapshot, LineStatus, ProductionPoint};
pub use inventory::{InventoryItem, InventoryTrendPoint};
pub use order::{KanbanColumn, ManufacturingOrder};
pub use product::{is_known_category, Product, ProductDraft, ProductPatch, PRODUCT_CATEGORIES};
pub use types::{
    AlertType, InventoryStatus, LineState, ParseKeyError, Priority, ProcessStatus, StockDirection,
};
