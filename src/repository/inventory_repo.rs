// ==========================================
// 制造看板数据层 - 在库仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::{InventoryItem, InventoryTrendPoint};
use crate::fixtures;
use crate::repository::error::RepositoryResult;
use crate::repository::session_store::SessionStore;

/// 在库仓储
/// 职责: 会话内的在库品目集合 + 只读推移数据
pub struct InventoryRepository {
    items: SessionStore<InventoryItem>,
    trend: Vec<InventoryTrendPoint>,
}

impl InventoryRepository {
    /// 以指定集合创建
    pub fn new(items: Vec<InventoryItem>, trend: Vec<InventoryTrendPoint>) -> Self {
        Self {
            items: SessionStore::new(items),
            trend,
        }
    }

    /// 以种子数据创建
    pub fn seeded() -> Self {
        Self::new(fixtures::inventory_items(), fixtures::inventory_trend())
    }

    pub fn snapshot(&self) -> RepositoryResult<Vec<InventoryItem>> {
        self.items.snapshot()
    }

    /// 持锁更新（迁移 + 提交）
    pub fn update<F, R>(&self, f: F) -> RepositoryResult<R>
    where
        F: FnOnce(&mut Vec<InventoryItem>) -> R,
    {
        self.items.update(f)
    }

    /// 按 id 查询
    pub fn find_by_id(&self, item_id: &str) -> RepositoryResult<Option<InventoryItem>> {
        self.items.find(|item| item.id == item_id)
    }

    /// 在库推移（月次）
    pub fn trend(&self) -> &[InventoryTrendPoint] {
        &self.trend
    }
}
