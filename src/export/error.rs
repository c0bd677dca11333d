// ==========================================
// 制造看板数据层 - 导出层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV 缓冲区提取失败: {0}")]
    Buffer(String),

    #[error("导出文件写入失败 (path={path}): {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
