// ==========================================
// 制造看板数据层 - 製品マスタ仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

use crate::domain::Product;
use crate::fixtures;
use crate::repository::error::RepositoryResult;
use crate::repository::session_store::SessionStore;

/// 製品マスタ仓储
pub struct ProductRepository {
    products: SessionStore<Product>,
}

impl ProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: SessionStore::new(products),
        }
    }

    /// 以种子数据创建
    pub fn seeded() -> Self {
        Self::new(fixtures::products())
    }

    pub fn snapshot(&self) -> RepositoryResult<Vec<Product>> {
        self.products.snapshot()
    }

    /// 持锁更新（迁移 + 提交）
    pub fn update<F, R>(&self, f: F) -> RepositoryResult<R>
    where
        F: FnOnce(&mut Vec<Product>) -> R,
    {
        self.products.update(f)
    }

    pub fn find_by_id(&self, product_id: &str) -> RepositoryResult<Option<Product>> {
        self.products.find(|p| p.id == product_id)
    }

    /// 按製品コード查询
    pub fn find_by_code(&self, code: &str) -> RepositoryResult<Option<Product>> {
        self.products.find(|p| p.code == code)
    }
}
