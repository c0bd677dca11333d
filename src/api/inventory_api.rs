// ==========================================
// 制造看板数据层 - 在库管理 API
// ==========================================
// 职责: 在库一览检索、状态汇总、入出库登记
// 流程: 持锁 → 纯迁移 → 成功则提交 → 释放锁后通知
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::notifier::Notifier;
use crate::domain::{InventoryItem, InventoryStatus, InventoryTrendPoint, StockDirection};
use crate::engine::{
    adjust_stock, distinct_categories, filter_records, parse_quantity, Clock, FilterCriteria,
    MutationOutcome, TransitionResult,
};
use crate::repository::InventoryRepository;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// 各在库状态的件数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStatusSummary {
    pub normal: usize,
    pub low: usize,
    pub shortage: usize,
    pub excess: usize,
}

impl InventoryStatusSummary {
    pub fn count(&self, status: InventoryStatus) -> usize {
        match status {
            InventoryStatus::Normal => self.normal,
            InventoryStatus::Low => self.low,
            InventoryStatus::Shortage => self.shortage,
            InventoryStatus::Excess => self.excess,
        }
    }

    pub fn total(&self) -> usize {
        self.normal + self.low + self.shortage + self.excess
    }

    /// 需要关注的件数（低在库 + 欠品）
    pub fn needs_attention(&self) -> usize {
        self.low + self.shortage
    }
}

// ==========================================
// InventoryApi - 在库管理 API
// ==========================================
pub struct InventoryApi {
    repo: Arc<InventoryRepository>,
    clock: Arc<dyn Clock>,
    notifier: Notifier,
}

impl InventoryApi {
    pub fn new(repo: Arc<InventoryRepository>, clock: Arc<dyn Clock>, notifier: Notifier) -> Self {
        Self {
            repo,
            clock,
            notifier,
        }
    }

    /// 在库一览（检索 + 类别 + 状态过滤）
    pub fn list_items(&self, criteria: &FilterCriteria) -> ApiResult<Vec<InventoryItem>> {
        let items = self.repo.snapshot()?;
        let filtered = filter_records(&items, criteria);
        debug!(
            query = %criteria.query,
            category = %criteria.category,
            status = %criteria.status,
            total = items.len(),
            matched = filtered.len(),
            "在库一览检索"
        );
        Ok(filtered)
    }

    /// 类别选项（首次出现顺序）
    pub fn categories(&self) -> ApiResult<Vec<String>> {
        Ok(distinct_categories(&self.repo.snapshot()?))
    }

    /// 状态汇总
    pub fn status_summary(&self) -> ApiResult<InventoryStatusSummary> {
        let mut summary = InventoryStatusSummary::default();
        for item in self.repo.snapshot()? {
            match item.status() {
                InventoryStatus::Normal => summary.normal += 1,
                InventoryStatus::Low => summary.low += 1,
                InventoryStatus::Shortage => summary.shortage += 1,
                InventoryStatus::Excess => summary.excess += 1,
            }
        }
        Ok(summary)
    }

    /// 状态的显示名称（会话语言）
    pub fn status_label(&self, status: InventoryStatus) -> String {
        self.notifier.text(&status.label_key())
    }

    /// 在库推移（月次）
    pub fn trend(&self) -> Vec<InventoryTrendPoint> {
        self.repo.trend().to_vec()
    }

    /// 入出库登记
    ///
    /// # 返回
    /// - Ok(StockAdjusted): 已提交
    /// - Err(Validation / InsufficientStock / NotFound): 集合不变
    pub fn adjust_stock(
        &self,
        item_id: &str,
        direction: StockDirection,
        quantity: i64,
    ) -> ApiResult<MutationOutcome> {
        let today = self.clock.today();

        let outcome = self
            .repo
            .update(|items| -> TransitionResult<MutationOutcome> {
                let transition = adjust_stock(items, item_id, direction, quantity, today)?;
                *items = transition.next;
                Ok(transition.outcome)
            })?
            .map_err(|e| self.notifier.rejected("adjust_stock", ApiError::from(e)))?;

        if let MutationOutcome::StockAdjusted {
            item_name,
            unit,
            new_stock,
            ..
        } = &outcome
        {
            info!(
                item_id,
                direction = %direction,
                quantity,
                new_stock,
                date = %today,
                "入出库已登记"
            );
            let direction_label = self
                .notifier
                .text(&format!("inventory.direction.{}", direction.as_key()));
            self.notifier.success(self.notifier.text_with_args(
                "inventory.adjusted",
                &[
                    ("name", item_name.as_str()),
                    ("direction", direction_label.as_str()),
                    ("quantity", quantity.to_string().as_str()),
                    ("unit", unit.as_str()),
                ],
            ));
        }

        Ok(outcome)
    }

    /// 入出库登记（原始输入文本）
    pub fn adjust_stock_raw(
        &self,
        item_id: &str,
        direction: StockDirection,
        raw_quantity: &str,
    ) -> ApiResult<MutationOutcome> {
        let quantity = parse_quantity(raw_quantity)
            .map_err(|e| self.notifier.rejected("adjust_stock", ApiError::from(e)))?;
        self.adjust_stock(item_id, direction, quantity)
    }
}
