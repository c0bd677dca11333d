// ==========================================
// 制造看板数据层 - 在库领域模型
// ==========================================
// 红线: status 只能由 (current_stock, safety_stock) 派生
// 约束: 数量与状态字段私有;反序列化时重新派生 status
// 用途: 种子数据 → 过滤 → 入出库迁移
// ==========================================

use crate::domain::types::InventoryStatus;
use crate::engine::status_core::classify_inventory_status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// InventoryItem - 在库品目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawInventoryItem")]
pub struct InventoryItem {
    pub id: String,              // 品目 ID（INV001 …）
    pub part_number: String,     // 品番
    pub name: String,            // 品名
    pub category: String,        // 类别（部品/素材/消耗品）
    current_stock: u64,          // 现在库
    safety_stock: u64,           // 安全在库
    pub unit: String,            // 单位
    status: InventoryStatus,     // 派生状态
    pub last_updated: NaiveDate, // 最后更新日
}

impl InventoryItem {
    /// 创建在库品目，status 由数量派生
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        part_number: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        current_stock: u64,
        safety_stock: u64,
        unit: impl Into<String>,
        last_updated: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            part_number: part_number.into(),
            name: name.into(),
            category: category.into(),
            current_stock,
            safety_stock,
            unit: unit.into(),
            status: classify_inventory_status(current_stock, safety_stock),
            last_updated,
        }
    }

    /// 以新的在库数量生成下一状态（重新派生 status，盖上日期）
    pub fn with_stock(&self, current_stock: u64, today: NaiveDate) -> Self {
        Self {
            current_stock,
            status: classify_inventory_status(current_stock, self.safety_stock),
            last_updated: today,
            ..self.clone()
        }
    }

    pub fn current_stock(&self) -> u64 {
        self.current_stock
    }

    pub fn safety_stock(&self) -> u64 {
        self.safety_stock
    }

    /// 派生状态
    pub fn status(&self) -> InventoryStatus {
        self.status
    }
}

/// 反序列化输入（外部给出的 status 不采信）
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInventoryItem {
    id: String,
    part_number: String,
    name: String,
    category: String,
    current_stock: u64,
    safety_stock: u64,
    unit: String,
    last_updated: NaiveDate,
}

impl From<RawInventoryItem> for InventoryItem {
    fn from(raw: RawInventoryItem) -> Self {
        InventoryItem::new(
            raw.id,
            raw.part_number,
            raw.name,
            raw.category,
            raw.current_stock,
            raw.safety_stock,
            raw.unit,
            raw.last_updated,
        )
    }
}

// ==========================================
// InventoryTrendPoint - 月度在库推移
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTrendPoint {
    pub month: String,
    pub stock: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_rederives_status() {
        let item: InventoryItem = serde_json::from_value(json!({
            "id": "INV900",
            "partNumber": "P-900",
            "name": "検査用部品",
            "category": "部品",
            "currentStock": 0,
            "safetyStock": 50,
            "unit": "個",
            "status": "normal",
            "lastUpdated": "2025-01-15"
        }))
        .unwrap();

        assert_eq!(item.status(), InventoryStatus::Shortage);
        assert_eq!(serde_json::to_value(&item).unwrap()["status"], "shortage");
    }

    #[test]
    fn test_with_stock_rederives_status() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let item = InventoryItem::new("INV1", "P-1", "部品", "部品", 100, 50, "個", date);
        assert_eq!(item.status(), InventoryStatus::Normal);
        assert_eq!(item.with_stock(151, date).status(), InventoryStatus::Excess);
        assert_eq!(item.with_stock(49, date).status(), InventoryStatus::Low);
    }
}
