// ==========================================
// 制造看板数据层 - 日期来源
// ==========================================
// 职责: 提供"今天",用于入出库提交时的 last_updated 与导出文件名
// ==========================================

use chrono::{NaiveDate, Utc};
use std::sync::Mutex;

/// 日期来源
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// 系统日期（UTC）
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// 固定日期（可手动推进）
#[derive(Debug)]
pub struct FixedClock {
    date: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Mutex::new(date),
        }
    }

    /// 改为指定日期
    pub fn set(&self, date: NaiveDate) {
        if let Ok(mut guard) = self.date.lock() {
            *guard = date;
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.date.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
