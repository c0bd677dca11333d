// ==========================================
// 制造看板数据层 - 看板移动
// ==========================================
// 职责: 拖拽移动制造指令 + 按列分组
// 说明: 任意阶段之间可移动,不要求单调前进;移动总是成功
// ==========================================

use crate::domain::{KanbanColumn, ManufacturingOrder, ProcessStatus};
use crate::engine::events::{MutationOutcome, Transition};

/// 移动制造指令到目标阶段
///
/// - status = target，progress = progress_for_status(target)
/// - 指令不存在 → Unchanged（集合原样返回）
pub fn move_order(
    orders: &[ManufacturingOrder],
    order_id: &str,
    target: ProcessStatus,
) -> Transition<ManufacturingOrder> {
    let Some(current) = orders.iter().find(|o| o.id == order_id) else {
        return Transition::unchanged(orders);
    };

    let moved = current.moved_to(target);
    let outcome = MutationOutcome::OrderMoved {
        order: moved.clone(),
        from: current.status(),
    };

    let next = orders
        .iter()
        .map(|o| if o.id == order_id { moved.clone() } else { o.clone() })
        .collect();

    Transition::new(next, outcome)
}

/// 按看板列分组（列顺序固定,列内保持输入顺序）
///
/// # 参数
/// - title_of: 列标题（由调用方本地化）
pub fn build_board<F>(orders: &[ManufacturingOrder], title_of: F) -> Vec<KanbanColumn>
where
    F: Fn(ProcessStatus) -> String,
{
    ProcessStatus::COLUMNS
        .iter()
        .map(|status| KanbanColumn {
            status: *status,
            title: title_of(*status),
            orders: orders
                .iter()
                .filter(|o| o.status() == *status)
                .cloned()
                .collect(),
        })
        .collect()
}
