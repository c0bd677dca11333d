// ==========================================
// 制造看板数据层 - 驾驶舱参考数据
// ==========================================
// 只读: KPI、生产推移、产线状态、告警
// ==========================================

use crate::domain::types::{AlertType, LineState};
use serde::{Deserialize, Serialize};

/// 当日 KPI 快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    pub daily_production: u32, // 本日生产数
    pub operation_rate: f64,   // 稼働率（%）
    pub defect_rate: f64,      // 不良率（%）
    pub goal_achievement: f64, // 目标达成率（%）
}

/// 每小时生产数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPoint {
    pub time: String,
    pub production: u32,
}

/// 产线状态（只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStatus {
    pub id: String,
    pub name: String,
    pub status: LineState,
    pub product: String,
    pub progress: u8,
}

/// 告警
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    pub time: String,
}
