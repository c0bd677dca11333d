// ==========================================
// 制造看板数据层 - 制造指令领域模型
// ==========================================
// 红线: progress 只能由 status 查表得到,二者永不矛盾
// 约束: status/progress 私有;反序列化时重新查表
// ==========================================

use crate::domain::types::{Priority, ProcessStatus};
use crate::engine::status_core::progress_for_status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ManufacturingOrder - 制造指令
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawOrder")]
pub struct ManufacturingOrder {
    pub id: String,           // 指令 ID（MO001 …）
    pub order_number: String, // 指令号
    pub product: String,      // 製品
    pub quantity: u32,        // 数量
    status: ProcessStatus,    // 工序阶段
    pub priority: Priority,   // 优先级
    pub assignee: String,     // 担当者
    pub due_date: NaiveDate,  // 納期
    progress: u8,             // 进度（0-100，派生）
}

impl ManufacturingOrder {
    /// 创建制造指令，progress 由 status 查表
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        order_number: impl Into<String>,
        product: impl Into<String>,
        quantity: u32,
        status: ProcessStatus,
        priority: Priority,
        assignee: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            order_number: order_number.into(),
            product: product.into(),
            quantity,
            status,
            priority,
            assignee: assignee.into(),
            due_date,
            progress: progress_for_status(status),
        }
    }

    /// 移动到目标阶段后的下一状态
    pub fn moved_to(&self, target: ProcessStatus) -> Self {
        Self {
            status: target,
            progress: progress_for_status(target),
            ..self.clone()
        }
    }

    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    /// 派生进度
    pub fn progress(&self) -> u8 {
        self.progress
    }
}

/// 反序列化输入（外部给出的 progress 不采信）
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOrder {
    id: String,
    order_number: String,
    product: String,
    quantity: u32,
    status: ProcessStatus,
    priority: Priority,
    assignee: String,
    due_date: NaiveDate,
}

impl From<RawOrder> for ManufacturingOrder {
    fn from(raw: RawOrder) -> Self {
        ManufacturingOrder::new(
            raw.id,
            raw.order_number,
            raw.product,
            raw.quantity,
            raw.status,
            raw.priority,
            raw.assignee,
            raw.due_date,
        )
    }
}

// ==========================================
// KanbanColumn - 看板列
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanColumn {
    pub status: ProcessStatus,
    pub title: String,
    pub orders: Vec<ManufacturingOrder>,
}

impl KanbanColumn {
    pub fn count(&self) -> usize {
        self.orders.len()
    }
}
