// ==========================================
// 制造看板数据层 - 静态种子数据
// ==========================================
// 用途: 会话启动时的初始集合（无持久化,重新加载即恢复）
// 说明: status / progress 一律由派生规则计算,不照抄存储值
// ==========================================

use crate::domain::{
    Alert, AlertType, InventoryItem, InventoryTrendPoint, KpiSnapshot, LineState, LineStatus,
    ManufacturingOrder, Priority, ProcessStatus, Product, ProductionPoint,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

// ==========================================
// 驾驶舱
// ==========================================

pub fn kpi_snapshot() -> KpiSnapshot {
    KpiSnapshot {
        daily_production: 1247,
        operation_rate: 94.2,
        defect_rate: 1.3,
        goal_achievement: 98.5,
    }
}

pub fn production_trend() -> Vec<ProductionPoint> {
    [
        ("06:00", 45),
        ("07:00", 82),
        ("08:00", 120),
        ("09:00", 115),
        ("10:00", 130),
        ("11:00", 125),
        ("12:00", 60),
        ("13:00", 118),
        ("14:00", 122),
        ("15:00", 128),
        ("16:00", 110),
        ("17:00", 95),
    ]
    .into_iter()
    .map(|(time, production)| ProductionPoint {
        time: time.to_string(),
        production,
    })
    .collect()
}

pub fn line_statuses() -> Vec<LineStatus> {
    [
        ("L1", "ライン1", LineState::Running, "製品A-100", 78),
        ("L2", "ライン2", LineState::Running, "製品B-200", 52),
        ("L3", "ライン3", LineState::Changeover, "製品C-300", 0),
        ("L4", "ライン4", LineState::Running, "製品D-400", 91),
        ("L5", "ライン5", LineState::Stopped, "-", 0),
    ]
    .into_iter()
    .map(|(id, name, status, product, progress)| LineStatus {
        id: id.to_string(),
        name: name.to_string(),
        status,
        product: product.to_string(),
        progress,
    })
    .collect()
}

pub fn alerts() -> Vec<Alert> {
    [
        (1, AlertType::Error, "ライン5: 設備異常により停止中", "14:32"),
        (2, AlertType::Warning, "ライン3: 段取替え作業中（予定超過15分）", "13:45"),
        (3, AlertType::Info, "ライン1: 本日の目標生産数を達成", "15:10"),
        (4, AlertType::Warning, "製品A-100: 原材料在庫が安全在庫を下回りました", "12:20"),
        (5, AlertType::Info, "ライン4: 製品D-400の生産が完了間近（進捗91%）", "15:30"),
    ]
    .into_iter()
    .map(|(id, alert_type, message, time)| Alert {
        id,
        alert_type,
        message: message.to_string(),
        time: time.to_string(),
    })
    .collect()
}

// ==========================================
// 在库
// ==========================================

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new("INV001", "A-100", "ベアリング 6205", "部品", 450, 200, "個", date(2025, 1, 15)),
        InventoryItem::new("INV002", "A-101", "ベアリング 6206", "部品", 80, 150, "個", date(2025, 1, 15)),
        InventoryItem::new("INV003", "B-200", "アルミ板 3mm", "素材", 1200, 500, "枚", date(2025, 1, 14)),
        InventoryItem::new("INV004", "B-201", "ステンレス板 2mm", "素材", 30, 100, "枚", date(2025, 1, 14)),
        InventoryItem::new("INV005", "C-300", "ボルト M8x30", "部品", 5000, 1000, "本", date(2025, 1, 15)),
        InventoryItem::new("INV006", "C-301", "ナット M8", "部品", 4800, 1000, "個", date(2025, 1, 15)),
        InventoryItem::new("INV007", "D-400", "モーター 200W", "部品", 25, 20, "台", date(2025, 1, 13)),
        InventoryItem::new("INV008", "D-401", "モーター 400W", "部品", 8, 10, "台", date(2025, 1, 13)),
        InventoryItem::new("INV009", "E-500", "潤滑油 10W-40", "消耗品", 200, 50, "L", date(2025, 1, 12)),
        InventoryItem::new("INV010", "E-501", "切削油 VG32", "消耗品", 45, 50, "L", date(2025, 1, 12)),
    ]
}

pub fn inventory_trend() -> Vec<InventoryTrendPoint> {
    [("8月", 320), ("9月", 280), ("10月", 350), ("11月", 410), ("12月", 380), ("1月", 450)]
        .into_iter()
        .map(|(month, stock)| InventoryTrendPoint {
            month: month.to_string(),
            stock,
        })
        .collect()
}

// ==========================================
// 工程管理
// ==========================================

pub fn manufacturing_orders() -> Vec<ManufacturingOrder> {
    use Priority::{High, Low, Medium};
    use ProcessStatus::{Completed, Inspection, Pending, Processing, Setup};

    [
        ("MO001", "MO-2025-001", "製品A-100", 500, Completed, High, "田中", date(2025, 1, 15)),
        ("MO002", "MO-2025-002", "製品B-200", 300, Processing, High, "佐藤", date(2025, 1, 16)),
        ("MO003", "MO-2025-003", "製品C-300", 200, Setup, Medium, "鈴木", date(2025, 1, 17)),
        ("MO004", "MO-2025-004", "製品D-400", 150, Inspection, Medium, "高橋", date(2025, 1, 16)),
        ("MO005", "MO-2025-005", "製品E-500", 1000, Pending, Low, "伊藤", date(2025, 1, 20)),
        ("MO006", "MO-2025-006", "製品A-100", 600, Pending, High, "渡辺", date(2025, 1, 18)),
        ("MO007", "MO-2025-007", "製品F-600", 250, Processing, Medium, "山本", date(2025, 1, 17)),
        ("MO008", "MO-2025-008", "製品B-200", 400, Inspection, Low, "中村", date(2025, 1, 18)),
    ]
    .into_iter()
    .map(|(id, number, product, quantity, status, priority, assignee, due)| {
        ManufacturingOrder::new(id, number, product, quantity, status, priority, assignee, due)
    })
    .collect()
}

// ==========================================
// マスタメンテナンス
// ==========================================

pub fn products() -> Vec<Product> {
    [
        ("P001", "A-100", "ベアリングユニット TypeA", "機械部品", 4500.0, "個", 5, true),
        ("P002", "A-101", "ベアリングユニット TypeB", "機械部品", 5200.0, "個", 7, true),
        ("P003", "B-200", "アルミフレーム 1000mm", "構造材", 3200.0, "本", 3, true),
        ("P004", "B-201", "ステンレスフレーム 1000mm", "構造材", 4800.0, "本", 5, true),
        ("P005", "C-300", "制御基板 Rev.3", "電子部品", 12000.0, "枚", 14, true),
        ("P006", "C-301", "制御基板 Rev.2", "電子部品", 10000.0, "枚", 14, false),
        ("P007", "D-400", "DCモーター 200W", "駆動部品", 18500.0, "台", 10, true),
        ("P008", "D-401", "DCモーター 400W", "駆動部品", 25000.0, "台", 10, true),
        ("P009", "E-500", "センサーモジュール TypeX", "電子部品", 7800.0, "個", 7, true),
        ("P010", "F-600", "油圧シリンダー 50mm", "駆動部品", 32000.0, "本", 21, true),
    ]
    .into_iter()
    .map(|(id, code, name, category, price, unit, lead_time, is_active)| Product {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        unit: unit.to_string(),
        lead_time,
        is_active,
    })
    .collect()
}
