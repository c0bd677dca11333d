// ==========================================
// 制造看板数据层 - 制造指令仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::ManufacturingOrder;
use crate::fixtures;
use crate::repository::error::RepositoryResult;
use crate::repository::session_store::SessionStore;

/// 制造指令仓储
pub struct OrderRepository {
    orders: SessionStore<ManufacturingOrder>,
}

impl OrderRepository {
    pub fn new(orders: Vec<ManufacturingOrder>) -> Self {
        Self {
            orders: SessionStore::new(orders),
        }
    }

    /// 以种子数据创建
    pub fn seeded() -> Self {
        Self::new(fixtures::manufacturing_orders())
    }

    pub fn snapshot(&self) -> RepositoryResult<Vec<ManufacturingOrder>> {
        self.orders.snapshot()
    }

    /// 持锁更新（迁移 + 提交）
    pub fn update<F, R>(&self, f: F) -> RepositoryResult<R>
    where
        F: FnOnce(&mut Vec<ManufacturingOrder>) -> R,
    {
        self.orders.update(f)
    }

    pub fn find_by_id(&self, order_id: &str) -> RepositoryResult<Option<ManufacturingOrder>> {
        self.orders.find(|o| o.id == order_id)
    }
}
