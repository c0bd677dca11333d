// ==========================================
// 制造看板数据层 - API层错误类型
// ==========================================
// 职责: 汇总引擎/仓储/导出/配置错误,转换为用户可读的消息
// ==========================================

use crate::config::ConfigError;
use crate::engine::{FieldViolation, TransitionError};
use crate::export::ExportError;
use crate::i18n::{t_in, t_with_args_in};
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    /// 字段校验失败（整体拒绝）
    #[error("输入校验失败: {}", format_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("在库不足: item_id={item_id}, current={current_stock}, requested={requested}")]
    InsufficientStock {
        item_id: String,
        current_stock: u64,
        requested: u64,
    },

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 基础设施错误
    // ==========================================
    #[error("会话存储错误: {0}")]
    Repository(#[from] RepositoryError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}({})", v.field, v.message_key))
        .collect::<Vec<_>>()
        .join(", ")
}

// ==========================================
// 从 TransitionError 转换
// ==========================================
impl From<TransitionError> for ApiError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::Validation(violations) => ApiError::Validation { violations },
            TransitionError::InsufficientStock {
                item_id,
                current_stock,
                requested,
            } => ApiError::InsufficientStock {
                item_id,
                current_stock,
                requested,
            },
            TransitionError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})", entity, id))
            }
        }
    }
}

impl ApiError {
    /// 字段违规列表（非校验错误为空）
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ApiError::Validation { violations } => violations,
            _ => &[],
        }
    }

    /// 本地化的用户提示
    ///
    /// # 规则
    /// - 单字段违规: 直接给出该字段的提示
    /// - 多字段违规: 汇总提示 + 各字段提示
    /// - 其他错误: 对应业务提示或内部错误文本
    pub fn localized_message(&self, locale: &str) -> String {
        match self {
            ApiError::Validation { violations } => match violations.as_slice() {
                [single] => t_in(locale, &single.message_key),
                many => {
                    let details: Vec<String> =
                        many.iter().map(|v| t_in(locale, &v.message_key)).collect();
                    format!("{} ({})", t_in(locale, "master.invalid"), details.join(" / "))
                }
            },
            ApiError::InsufficientStock { .. } => t_in(locale, "inventory.insufficient"),
            ApiError::Export(ExportError::Write { path, .. }) => t_with_args_in(
                locale,
                "export.write_failed",
                &[("path", path.display().to_string().as_str())],
            ),
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_conversion() {
        let err: ApiError = TransitionError::field("price", "validation.price_positive").into();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.localized_message("ja"), "単価は正の数を入力してください");

        let err: ApiError = TransitionError::InsufficientStock {
            item_id: "INV001".to_string(),
            current_stock: 450,
            requested: 500,
        }
        .into();
        assert_eq!(err.localized_message("ja"), "在庫数が不足しています");
        assert!(err.violations().is_empty());
    }

    #[test]
    fn test_multiple_violations_are_summarised() {
        let err = ApiError::Validation {
            violations: vec![
                FieldViolation::new("code", "validation.code_required"),
                FieldViolation::new("price", "validation.price_positive"),
            ],
        };
        let msg = err.localized_message("en");
        assert!(msg.starts_with("Some fields are invalid"));
        assert!(msg.contains("Product code is required"));
        assert!(msg.contains("Price must be a positive number"));
        assert!(err.to_string().contains("code(validation.code_required)"));
    }

    #[test]
    fn test_repository_error_conversion() {
        let err: ApiError = RepositoryError::LockError("poisoned".to_string()).into();
        assert!(matches!(err, ApiError::Repository(_)));
    }
}
