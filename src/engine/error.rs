// ==========================================
// 制造看板数据层 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 任何错误返回时,调用方的集合保持原样
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 字段级校验违规
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// 违规字段（code / name / category / price / unit / leadTime / quantity）
    pub field: String,
    /// 违规说明的 i18n key
    pub message_key: String,
}

impl FieldViolation {
    pub fn new(field: &str, message_key: &str) -> Self {
        Self {
            field: field.to_string(),
            message_key: message_key.to_string(),
        }
    }
}

/// 迁移函数错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    #[error("数据验证失败: {}", format_fields(.0))]
    Validation(Vec<FieldViolation>),

    #[error("在库不足: item_id={item_id}, current={current_stock}, requested={requested}")]
    InsufficientStock {
        item_id: String,
        current_stock: u64,
        requested: u64,
    },

    #[error("记录未找到: {entity} with id={id}")]
    NotFound { entity: String, id: String },
}

impl TransitionError {
    /// 单字段校验失败
    pub fn field(field: &str, message_key: &str) -> Self {
        TransitionError::Validation(vec![FieldViolation::new(field, message_key)])
    }

    /// 校验违规列表（非校验错误返回空切片）
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            TransitionError::Validation(violations) => violations,
            _ => &[],
        }
    }
}

fn format_fields(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Result 类型别名
pub type TransitionResult<T> = Result<T, TransitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = TransitionError::Validation(vec![
            FieldViolation::new("price", "validation.price_positive"),
            FieldViolation::new("unit", "validation.unit_required"),
        ]);
        assert!(err.to_string().contains("price,unit"));
        assert_eq!(err.violations().len(), 2);
    }

    #[test]
    fn test_non_validation_error_has_no_violations() {
        let err = TransitionError::InsufficientStock {
            item_id: "INV001".to_string(),
            current_stock: 450,
            requested: 500,
        };
        assert!(err.violations().is_empty());
        assert!(err.to_string().contains("INV001"));
    }
}
