// ==========================================
// 制造看板 - 依赖包 URL 提取错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// URL 提取错误类型
#[derive(Error, Debug)]
pub enum LockfileError {
    // ===== 文件相关错误 =====
    #[error("lockfile 不存在: {0}（请先执行 npm install）")]
    MissingLockfile(PathBuf),

    #[error("lockfile 读取失败 (path={path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lockfile 解析失败 (path={path}): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ===== 内容错误 =====
    #[error("未找到任何 URL: {0}（请检查 lockfile 内容）")]
    NoUrlsFound(PathBuf),

    // ===== 输出错误 =====
    #[error("URL 列表写入失败 (path={path}): {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type LockfileResult<T> = Result<T, LockfileError>;
