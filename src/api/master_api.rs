// ==========================================
// 制造看板数据层 - マスタメンテナンス API
// ==========================================
// 职责: 製品マスタ检索、行内编辑、新增、删除、CSV 导出
// 红线: 校验失败整体拒绝,集合不变
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::notifier::Notifier;
use crate::domain::{Product, ProductDraft, ProductPatch, PRODUCT_CATEGORIES};
use crate::engine::{
    add_product, delete_product, filter_records, update_product, Clock, FilterCriteria,
    IdGenerator, MutationOutcome, TransitionResult,
};
use crate::export::{export_filename, export_products_csv, write_products_csv};
use crate::repository::ProductRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

// ==========================================
// MasterApi - マスタメンテナンス API
// ==========================================
pub struct MasterApi {
    repo: Arc<ProductRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    notifier: Notifier,
}

impl MasterApi {
    pub fn new(
        repo: Arc<ProductRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        notifier: Notifier,
    ) -> Self {
        Self {
            repo,
            ids,
            clock,
            notifier,
        }
    }

    /// 製品检索（コード / 製品名;状态 = active / inactive）
    pub fn list_products(&self, criteria: &FilterCriteria) -> ApiResult<Vec<Product>> {
        let products = self.repo.snapshot()?;
        let filtered = filter_records(&products, criteria);
        debug!(
            query = %criteria.query,
            category = %criteria.category,
            status = %criteria.status,
            matched = filtered.len(),
            "製品检索"
        );
        Ok(filtered)
    }

    /// 可选类别（固定列表）
    pub fn categories(&self) -> Vec<String> {
        PRODUCT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }

    /// 行内编辑
    ///
    /// # 返回
    /// - ProductUpdated: 已提交
    /// - Unchanged: 製品不存在
    /// - Err(Validation): 任一字段违规
    pub fn update_product(&self, product_id: &str, patch: &ProductPatch) -> ApiResult<MutationOutcome> {
        let outcome = self
            .repo
            .update(|products| -> TransitionResult<MutationOutcome> {
                let transition = update_product(products, product_id, patch)?;
                if !transition.outcome.is_unchanged() {
                    *products = transition.next;
                }
                Ok(transition.outcome)
            })?
            .map_err(|e| self.notifier.rejected("update_product", ApiError::from(e)))?;

        if outcome.is_unchanged() {
            debug!(product_id, "製品不存在,忽略编辑");
            return Ok(outcome);
        }

        info!(product_id, "製品已更新");
        self.notifier.success(self.notifier.text("master.updated"));
        Ok(outcome)
    }

    /// 新增製品（取号与提交在同一次加锁内）
    pub fn add_product(&self, draft: &ProductDraft) -> ApiResult<Product> {
        let outcome = self
            .repo
            .update(|products| -> TransitionResult<MutationOutcome> {
                let transition = add_product(products, draft, self.ids.as_ref())?;
                *products = transition.next;
                Ok(transition.outcome)
            })?
            .map_err(|e| self.notifier.rejected("add_product", ApiError::from(e)))?;

        let MutationOutcome::ProductAdded(added) = outcome else {
            return Err(ApiError::InternalError(
                "新增迁移返回了非 ProductAdded 结果".to_string(),
            ));
        };

        info!(product_id = %added.id, code = %added.code, "製品已新增");
        self.notifier.success(
            self.notifier
                .text_with_args("master.added", &[("name", added.name.as_str())]),
        );
        Ok(added)
    }

    /// 删除製品（不存在时 Unchanged）
    pub fn delete_product(&self, product_id: &str) -> ApiResult<MutationOutcome> {
        let outcome = self.repo.update(|products| {
            let transition = delete_product(products, product_id);
            if !transition.outcome.is_unchanged() {
                *products = transition.next;
            }
            transition.outcome
        })?;

        if let MutationOutcome::ProductDeleted(removed) = &outcome {
            info!(product_id, code = %removed.code, "製品已删除");
            self.notifier.success(
                self.notifier
                    .text_with_args("master.deleted", &[("name", removed.name.as_str())]),
            );
        } else {
            debug!(product_id, "製品不存在,忽略删除");
        }
        Ok(outcome)
    }

    /// CSV 导出（当前过滤结果）
    ///
    /// # 返回
    /// - (文件名, BOM + CSV 字节)
    pub fn export_csv(&self, criteria: &FilterCriteria) -> ApiResult<(String, Vec<u8>)> {
        let products = self.list_products(criteria)?;
        let bytes = export_products_csv(&products, self.notifier.locale())
            .map_err(|e| self.notifier.rejected("export_csv", ApiError::from(e)))?;
        let filename = export_filename(self.clock.today());

        info!(filename = %filename, rows = products.len(), "製品CSV已导出");
        self.notifier.success(self.notifier.text("master.exported"));
        Ok((filename, bytes))
    }

    /// CSV 导出到目录
    pub fn export_csv_to(&self, dir: &Path, criteria: &FilterCriteria) -> ApiResult<PathBuf> {
        let products = self.list_products(criteria)?;
        let path = write_products_csv(dir, &products, self.notifier.locale(), self.clock.today())
            .map_err(|e| self.notifier.rejected("export_csv", ApiError::from(e)))?;

        self.notifier.success(self.notifier.text("master.exported"));
        Ok(path)
    }
}
