// ==========================================
// 制造看板数据层 - 引擎层
// ==========================================
// 职责: 状态派生、过滤检索、纯迁移函数
// 红线: 迁移函数接收当前集合 + 意图,返回 (next, outcome) 或拒绝
// 红线: 不访问仓储,不发布通知
// ==========================================

pub mod clock;
pub mod error;
pub mod events;
pub mod filter;
pub mod id_generator;
pub mod kanban;
pub mod product_master;
pub mod status_core;
pub mod stock;

// 重导出核心引擎
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{FieldViolation, TransitionError, TransitionResult};
pub use events::{
    DashboardEventPublisher, MutationOutcome, NoOpEventPublisher, Notification,
    NotificationLevel, TracingEventPublisher, Transition,
};
pub use filter::{distinct_categories, filter_records, FilterCriteria, Filterable, FILTER_ALL};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use kanban::{build_board, move_order};
pub use product_master::{add_product, delete_product, update_product, validate_draft};
pub use status_core::{classify_inventory_status, progress_for_status, EXCESS_MULTIPLIER};
pub use stock::{adjust_stock, parse_quantity};
