// ==========================================
// 制造看板数据层 - Status Core 纯函数库
// ==========================================
// 职责: 在库状态判定、工序进度查表
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::types::{InventoryStatus, ProcessStatus};

/// 过剩判定倍数（current_stock > safety_stock * 3）
pub const EXCESS_MULTIPLIER: u64 = 3;

/// 判定在库状态
///
/// # 规则（按优先级）
/// 1. current_stock <= 0 → Shortage
/// 2. current_stock < safety_stock → Low
/// 3. current_stock > safety_stock * 3 → Excess
/// 4. 否则 → Normal
///
/// # 示例
/// ```
/// use manufacturing_dashboard::domain::InventoryStatus;
/// use manufacturing_dashboard::engine::classify_inventory_status;
///
/// assert_eq!(classify_inventory_status(80, 150), InventoryStatus::Low);
/// assert_eq!(classify_inventory_status(180, 150), InventoryStatus::Normal);
/// ```
pub fn classify_inventory_status(current_stock: u64, safety_stock: u64) -> InventoryStatus {
    if current_stock == 0 {
        InventoryStatus::Shortage
    } else if current_stock < safety_stock {
        InventoryStatus::Low
    } else if current_stock > safety_stock.saturating_mul(EXCESS_MULTIPLIER) {
        InventoryStatus::Excess
    } else {
        InventoryStatus::Normal
    }
}

/// 工序阶段 → 进度（%）
pub fn progress_for_status(status: ProcessStatus) -> u8 {
    match status {
        ProcessStatus::Pending => 0,
        ProcessStatus::Setup => 15,
        ProcessStatus::Processing => 50,
        ProcessStatus::Inspection => 85,
        ProcessStatus::Completed => 100,
    }
}
