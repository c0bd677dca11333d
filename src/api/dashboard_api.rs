// ==========================================
// 制造看板数据层 - 驾驶舱 API
// ==========================================
// 职责: KPI、生产推移、产线状态、告警的只读查询
// ==========================================

use crate::domain::{Alert, AlertType, KpiSnapshot, LineState, LineStatus, ProductionPoint};
use crate::fixtures;
use serde::Serialize;
use tracing::debug;

/// 产线稼働概况
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    pub running: usize,
    pub stopped: usize,
    pub changeover: usize,
    pub total: usize,
}

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================
pub struct DashboardApi {
    kpis: KpiSnapshot,
    production_trend: Vec<ProductionPoint>,
    line_statuses: Vec<LineStatus>,
    alerts: Vec<Alert>,
}

impl DashboardApi {
    pub fn new(
        kpis: KpiSnapshot,
        production_trend: Vec<ProductionPoint>,
        line_statuses: Vec<LineStatus>,
        alerts: Vec<Alert>,
    ) -> Self {
        Self {
            kpis,
            production_trend,
            line_statuses,
            alerts,
        }
    }

    /// 以种子数据创建
    pub fn seeded() -> Self {
        Self::new(
            fixtures::kpi_snapshot(),
            fixtures::production_trend(),
            fixtures::line_statuses(),
            fixtures::alerts(),
        )
    }

    pub fn kpis(&self) -> &KpiSnapshot {
        &self.kpis
    }

    /// 每小时生产数（时间顺序）
    pub fn production_trend(&self) -> &[ProductionPoint] {
        &self.production_trend
    }

    /// 生产推移合计
    pub fn production_total(&self) -> u32 {
        self.production_trend.iter().map(|p| p.production).sum()
    }

    pub fn line_statuses(&self) -> &[LineStatus] {
        &self.line_statuses
    }

    /// 按稼働状态汇总产线
    pub fn line_summary(&self) -> LineSummary {
        let mut summary = LineSummary {
            total: self.line_statuses.len(),
            ..LineSummary::default()
        };
        for line in &self.line_statuses {
            match line.status {
                LineState::Running => summary.running += 1,
                LineState::Stopped => summary.stopped += 1,
                LineState::Changeover => summary.changeover += 1,
            }
        }
        debug!(
            running = summary.running,
            stopped = summary.stopped,
            changeover = summary.changeover,
            "产线概况"
        );
        summary
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// 指定类型的告警
    pub fn alerts_of(&self, alert_type: AlertType) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| a.alert_type == alert_type)
            .collect()
    }
}
