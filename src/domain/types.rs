// ==========================================
// 制造看板数据层 - 领域类型定义
// ==========================================
// 职责: 定义在库状态、工序阶段、优先级等封闭枚举
// 红线: 每个枚举都有稳定的小写 key（过滤与序列化共用）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 枚举 key 解析失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未知的{kind}取值: {value}")]
pub struct ParseKeyError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseKeyError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ==========================================
// 在库状态 (Inventory Status)
// ==========================================
// 红线: 由 (current_stock, safety_stock) 派生,不独立存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryStatus {
    Normal,   // 正常
    Low,      // 低在库
    Shortage, // 欠品
    Excess,   // 过剩
}

impl InventoryStatus {
    /// 全部状态（展示顺序）
    pub const ALL: [InventoryStatus; 4] = [
        InventoryStatus::Normal,
        InventoryStatus::Low,
        InventoryStatus::Shortage,
        InventoryStatus::Excess,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            InventoryStatus::Normal => "normal",
            InventoryStatus::Low => "low",
            InventoryStatus::Shortage => "shortage",
            InventoryStatus::Excess => "excess",
        }
    }

    /// i18n 标签 key
    pub fn label_key(&self) -> String {
        format!("inventory.status.{}", self.as_key())
    }
}

impl fmt::Display for InventoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for InventoryStatus {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(InventoryStatus::Normal),
            "low" => Ok(InventoryStatus::Low),
            "shortage" => Ok(InventoryStatus::Shortage),
            "excess" => Ok(InventoryStatus::Excess),
            _ => Err(ParseKeyError::new("在库状态", s)),
        }
    }
}

// ==========================================
// 工序阶段 (Process Status)
// ==========================================
// 看板列与进度查表共用同一组阶段
// 非线性流程: 任意阶段之间都允许拖拽移动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Pending,    // 未着手
    Setup,      // 段取り
    Processing, // 加工中
    Inspection, // 检查
    Completed,  // 完了
}

impl ProcessStatus {
    /// 看板列顺序
    pub const COLUMNS: [ProcessStatus; 5] = [
        ProcessStatus::Pending,
        ProcessStatus::Setup,
        ProcessStatus::Processing,
        ProcessStatus::Inspection,
        ProcessStatus::Completed,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            ProcessStatus::Pending => "pending",
            ProcessStatus::Setup => "setup",
            ProcessStatus::Processing => "processing",
            ProcessStatus::Inspection => "inspection",
            ProcessStatus::Completed => "completed",
        }
    }

    /// 看板列标题 i18n key
    pub fn column_key(&self) -> String {
        format!("process.column.{}", self.as_key())
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for ProcessStatus {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ProcessStatus::Pending),
            "setup" => Ok(ProcessStatus::Setup),
            "processing" => Ok(ProcessStatus::Processing),
            "inspection" => Ok(ProcessStatus::Inspection),
            "completed" => Ok(ProcessStatus::Completed),
            _ => Err(ParseKeyError::new("工序阶段", s)),
        }
    }
}

// ==========================================
// 优先级 (Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_key(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for Priority {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseKeyError::new("优先级", s)),
        }
    }
}

// ==========================================
// 入出库方向 (Stock Direction)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    In,  // 入庫
    Out, // 出庫
}

impl StockDirection {
    pub fn as_key(&self) -> &'static str {
        match self {
            StockDirection::In => "in",
            StockDirection::Out => "out",
        }
    }
}

impl fmt::Display for StockDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

impl FromStr for StockDirection {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(StockDirection::In),
            "out" => Ok(StockDirection::Out),
            _ => Err(ParseKeyError::new("入出库方向", s)),
        }
    }
}

// ==========================================
// 产线状态 (Line State)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineState {
    Running,    // 稼働中
    Stopped,    // 停止
    Changeover, // 段取替え
}

impl LineState {
    pub fn as_key(&self) -> &'static str {
        match self {
            LineState::Running => "running",
            LineState::Stopped => "stopped",
            LineState::Changeover => "changeover",
        }
    }
}

impl fmt::Display for LineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

// ==========================================
// 告警类型 (Alert Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Error,
    Warning,
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_str() {
        for status in InventoryStatus::ALL {
            assert_eq!(status.as_key().parse::<InventoryStatus>(), Ok(status));
        }
        for status in ProcessStatus::COLUMNS {
            assert_eq!(status.as_key().parse::<ProcessStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "archived".parse::<ProcessStatus>().unwrap_err();
        assert_eq!(err.value, "archived");
        assert!("IN".parse::<StockDirection>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&ProcessStatus::Inspection).unwrap();
        assert_eq!(json, "\"inspection\"");
        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }
}
