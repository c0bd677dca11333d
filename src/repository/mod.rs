// ==========================================
// 制造看板数据层 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 持有会话内的当前集合（内存,不持久化）
// 约束: 读取返回快照;提交在 update 内持锁完成
// ==========================================

pub mod error;
pub mod inventory_repo;
pub mod order_repo;
pub mod product_repo;
pub mod session_store;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use inventory_repo::InventoryRepository;
pub use order_repo::OrderRepository;
pub use product_repo::ProductRepository;
pub use session_store::SessionStore;
