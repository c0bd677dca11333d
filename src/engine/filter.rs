// ==========================================
// 制造看板数据层 - 过滤/检索引擎
// ==========================================
// 职责: 根据检索词 + 类别 + 状态计算可见子集
// 红线: 稳定过滤(保持输入顺序),不排序,不分页
// ==========================================

use crate::domain::{InventoryItem, ManufacturingOrder, Product};
use serde::{Deserialize, Serialize};

/// 匹配全部的过滤值
pub const FILTER_ALL: &str = "all";

// ==========================================
// Filterable - 可过滤记录
// ==========================================
/// 记录类型声明自己的检索字段与分类维度
///
/// 返回 None 的维度不参与对应过滤（例如制造指令没有类别）
pub trait Filterable {
    /// 参与模糊检索的文本字段
    fn search_fields(&self) -> Vec<&str>;

    /// 类别维度
    fn category_key(&self) -> Option<&str>;

    /// 状态维度
    fn status_key(&self) -> Option<&str>;
}

impl Filterable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.part_number.as_str(), self.name.as_str()]
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status().as_key())
    }
}

impl Filterable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.code.as_str(), self.name.as_str()]
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.activity_key())
    }
}

impl Filterable for ManufacturingOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_number.as_str(),
            self.product.as_str(),
            self.assignee.as_str(),
        ]
    }

    fn category_key(&self) -> Option<&str> {
        None
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status().as_key())
    }
}

// ==========================================
// FilterCriteria - 过滤条件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: String,
    pub category: String,
    pub status: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: FILTER_ALL.to_string(),
            status: FILTER_ALL.to_string(),
        }
    }
}

impl FilterCriteria {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// 单条记录是否满足全部条件（AND）
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.matches_query(record)
            && matches_dimension(&self.category, record.category_key())
            && matches_dimension(&self.status, record.status_key())
    }

    fn matches_query<T: Filterable>(&self, record: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn matches_dimension(filter: &str, value: Option<&str>) -> bool {
    if filter == FILTER_ALL {
        return true;
    }
    match value {
        Some(v) => v == filter,
        None => true,
    }
}

/// 计算可见子集（保持输入顺序）
pub fn filter_records<T: Filterable + Clone>(records: &[T], criteria: &FilterCriteria) -> Vec<T> {
    records
        .iter()
        .filter(|record| criteria.matches(*record))
        .cloned()
        .collect()
}

/// 集合中出现的类别（首次出现顺序）
pub fn distinct_categories<T: Filterable>(records: &[T]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in records.iter().filter_map(|r| r.category_key()) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}
