// ==========================================
// 制造看板数据层 - 会话集合存储
// ==========================================
// 职责: Mutex 保护的 Vec<T>,快照读取 + 持锁更新提交
// 红线: 读取-迁移-提交必须在同一次加锁内完成（update）
// 红线: 不含业务逻辑
// ==========================================

use crate::repository::error::{RepositoryError, RepositoryResult};
use std::sync::{Mutex, MutexGuard};

/// 会话集合存储
pub struct SessionStore<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Clone> SessionStore<T> {
    /// 以种子集合创建
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            records: Mutex::new(seed),
        }
    }

    /// 获取锁
    fn guard(&self) -> RepositoryResult<MutexGuard<'_, Vec<T>>> {
        self.records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 当前集合的快照
    pub fn snapshot(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.guard()?.clone())
    }

    /// 持锁更新
    ///
    /// # 参数
    /// - f: 接收当前集合的可变引用;迁移与提交都在闭包内完成
    ///
    /// # 返回
    /// - 闭包的返回值（锁在返回前释放）
    pub fn update<F, R>(&self, f: F) -> RepositoryResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let mut guard = self.guard()?;
        Ok(f(&mut guard))
    }

    /// 记录数
    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.guard()?.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.guard()?.is_empty())
    }

    /// 按条件查找第一条
    pub fn find<P>(&self, predicate: P) -> RepositoryResult<Option<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.guard()?.iter().find(|r| predicate(r)).cloned())
    }
}
