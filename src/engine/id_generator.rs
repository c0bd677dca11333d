// ==========================================
// 制造看板数据层 - ID 生成器
// ==========================================
// 职责: 为新增製品分配 ID
// 红线: 单调递增,删除后不复用;由会话持有,不使用全局静态状态
// ==========================================

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// ID 生成能力
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// 前缀 + 零填充序号（P011, P012 …）
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    width: usize,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>, start: u64, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            next: AtomicU64::new(start),
        }
    }

    /// 下一个将要分配的序号（不消耗）
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("P", 11, 3)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}{:0width$}", self.prefix, n, width = self.width)
    }
}

/// UUID v4
#[derive(Debug, Clone, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
