// ==========================================
// 制造看板数据层 - 迁移结果与通知发布
// ==========================================
// 职责: 迁移函数返回 (next, outcome)，通知由调用方决定如何发布
// 说明: Engine 定义 trait，展示层实现投递（toast 等）
// ==========================================

use crate::domain::{ManufacturingOrder, ProcessStatus, Product, StockDirection};
use serde::{Deserialize, Serialize};

// ==========================================
// 迁移结果
// ==========================================

/// 一次迁移的业务结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MutationOutcome {
    /// 入出库已登记
    StockAdjusted {
        item_id: String,
        item_name: String,
        unit: String,
        direction: StockDirection,
        quantity: u64,
        new_stock: u64,
    },
    /// 制造指令已移动
    OrderMoved {
        order: ManufacturingOrder,
        from: ProcessStatus,
    },
    /// 製品已更新
    ProductUpdated(Product),
    /// 製品已新增
    ProductAdded(Product),
    /// 製品已删除
    ProductDeleted(Product),
    /// 无变化（目标记录不存在等）
    Unchanged,
}

impl MutationOutcome {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, MutationOutcome::Unchanged)
    }

    /// 日志用的短名称
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationOutcome::StockAdjusted { .. } => "StockAdjusted",
            MutationOutcome::OrderMoved { .. } => "OrderMoved",
            MutationOutcome::ProductUpdated(_) => "ProductUpdated",
            MutationOutcome::ProductAdded(_) => "ProductAdded",
            MutationOutcome::ProductDeleted(_) => "ProductDeleted",
            MutationOutcome::Unchanged => "Unchanged",
        }
    }
}

/// 迁移函数的返回值：下一集合 + 结果
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T> {
    pub next: Vec<T>,
    pub outcome: MutationOutcome,
}

impl<T: Clone> Transition<T> {
    pub fn new(next: Vec<T>, outcome: MutationOutcome) -> Self {
        Self { next, outcome }
    }

    /// 原样返回当前集合
    pub fn unchanged(current: &[T]) -> Self {
        Self {
            next: current.to_vec(),
            outcome: MutationOutcome::Unchanged,
        }
    }
}

// ==========================================
// 通知
// ==========================================

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

/// 已本地化的通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

// ==========================================
// 通知发布 Trait
// ==========================================

/// 通知发布者
///
/// # 实现说明
/// - 展示层实现此 trait，把通知投递到 toast
/// - 测试中可实现为记录器
pub trait DashboardEventPublisher: Send + Sync {
    fn publish(&self, notification: &Notification);
}

/// 空操作发布者
#[derive(Debug, Clone, Default)]
pub struct NoOpEventPublisher;

impl DashboardEventPublisher for NoOpEventPublisher {
    fn publish(&self, notification: &Notification) {
        tracing::debug!(
            level = ?notification.level,
            "NoOpEventPublisher: 跳过通知发布"
        );
    }
}

/// 仅写日志的发布者（控制台模式）
#[derive(Debug, Clone, Default)]
pub struct TracingEventPublisher;

impl DashboardEventPublisher for TracingEventPublisher {
    fn publish(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Error => {
                tracing::warn!(target: "notification", text = %notification.message, "error")
            }
            level => tracing::info!(
                target: "notification",
                level = ?level,
                text = %notification.message,
                "notify"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_transition_clones_input() {
        let current = vec![1, 2, 3];
        let transition = Transition::unchanged(&current);
        assert_eq!(transition.next, current);
        assert!(transition.outcome.is_unchanged());
    }

    #[test]
    fn test_notification_constructors() {
        assert_eq!(Notification::info("x").level, NotificationLevel::Info);
        assert_eq!(Notification::error("y").message, "y");
    }
}
