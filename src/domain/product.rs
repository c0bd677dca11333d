// ==========================================
// 制造看板数据层 - 製品マスタ领域模型
// ==========================================
// 用途: マスタメンテナンス画面的新增/行内编辑/删除/CSV
// 红线: id 由注入的 IdGenerator 分配,删除后不复用
// ==========================================

use serde::{Deserialize, Serialize};

/// 已知製品类别
pub const PRODUCT_CATEGORIES: [&str; 4] = ["機械部品", "構造材", "電子部品", "駆動部品"];

/// 类别是否属于已知集合
pub fn is_known_category(category: &str) -> bool {
    PRODUCT_CATEGORIES.contains(&category)
}

// ==========================================
// Product - 製品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,        // 製品 ID（P001 …）
    pub code: String,      // 製品コード（唯一）
    pub name: String,      // 製品名
    pub category: String,  // 类别
    pub price: f64,        // 単価（>0）
    pub unit: String,      // 単位
    pub lead_time: u32,    // リードタイム（日，>0）
    pub is_active: bool,   // 有效标志
}

impl Product {
    /// 过滤用的状态 key
    pub fn activity_key(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}

// ==========================================
// ProductDraft - 新增输入
// ==========================================
// 数值字段可缺失（表单未填），由校验器报告
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub code: String,
    pub name: String,
    pub category: String,
    pub price: Option<f64>,
    pub unit: String,
    pub lead_time: Option<i64>,
    pub is_active: Option<bool>,
}

// ==========================================
// ProductPatch - 行内编辑输入
// ==========================================
// None 字段保持原值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub lead_time: Option<i64>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &ProductPatch::default()
    }
}
