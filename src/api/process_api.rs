// ==========================================
// 制造看板数据层 - 工程管理 API
// ==========================================
// 职责: 制造指令检索、看板分组、拖拽移动
// ==========================================

use crate::api::error::ApiResult;
use crate::api::notifier::Notifier;
use crate::domain::{KanbanColumn, ManufacturingOrder, Priority, ProcessStatus};
use crate::engine::{build_board, filter_records, move_order, FilterCriteria, MutationOutcome};
use crate::repository::OrderRepository;
use std::sync::Arc;
use tracing::{debug, info};

// ==========================================
// ProcessApi - 工程管理 API
// ==========================================
pub struct ProcessApi {
    repo: Arc<OrderRepository>,
    notifier: Notifier,
}

impl ProcessApi {
    pub fn new(repo: Arc<OrderRepository>, notifier: Notifier) -> Self {
        Self { repo, notifier }
    }

    /// 制造指令检索（指令番号 / 製品 / 担当者;状态 = 阶段）
    pub fn list_orders(&self, criteria: &FilterCriteria) -> ApiResult<Vec<ManufacturingOrder>> {
        let orders = self.repo.snapshot()?;
        let filtered = filter_records(&orders, criteria);
        debug!(
            query = %criteria.query,
            status = %criteria.status,
            matched = filtered.len(),
            "制造指令检索"
        );
        Ok(filtered)
    }

    /// 看板（5 列,标题为会话语言）
    pub fn board(&self) -> ApiResult<Vec<KanbanColumn>> {
        let orders = self.repo.snapshot()?;
        Ok(build_board(&orders, |status| self.column_title(status)))
    }

    /// 列标题
    pub fn column_title(&self, status: ProcessStatus) -> String {
        self.notifier.text(&status.column_key())
    }

    /// 优先级显示名称
    pub fn priority_label(&self, priority: Priority) -> String {
        self.notifier
            .text(&format!("process.priority.{}", priority.as_key()))
    }

    /// 移动制造指令
    ///
    /// # 返回
    /// - OrderMoved: 已提交（status + progress 同步更新）
    /// - Unchanged: 指令不存在,不提交也不通知
    pub fn move_order(&self, order_id: &str, target: ProcessStatus) -> ApiResult<MutationOutcome> {
        let outcome = self.repo.update(|orders| {
            let transition = move_order(orders, order_id, target);
            if !transition.outcome.is_unchanged() {
                *orders = transition.next;
            }
            transition.outcome
        })?;

        match &outcome {
            MutationOutcome::OrderMoved { order, from } => {
                info!(
                    order_id,
                    from = %from,
                    to = %target,
                    progress = order.progress(),
                    "制造指令已移动"
                );
                let column = self.column_title(target);
                self.notifier.info(self.notifier.text_with_args(
                    "process.moved",
                    &[
                        ("order_number", order.order_number.as_str()),
                        ("column", column.as_str()),
                    ],
                ));
            }
            _ => debug!(order_id, target = %target, "制造指令不存在,忽略移动"),
        }

        Ok(outcome)
    }
}
