// ==========================================
// 制造看板数据层 - API 通知辅助
// ==========================================
// 职责: 按会话语言生成通知文本并交给发布者
// ==========================================

use crate::api::error::ApiError;
use crate::engine::{DashboardEventPublisher, Notification};
use crate::i18n::{t_in, t_with_args_in};
use std::sync::Arc;
use tracing::warn;

/// 通知辅助（各 API 共用）
#[derive(Clone)]
pub struct Notifier {
    publisher: Arc<dyn DashboardEventPublisher>,
    locale: String,
}

impl Notifier {
    pub fn new(publisher: Arc<dyn DashboardEventPublisher>, locale: impl Into<String>) -> Self {
        Self {
            publisher,
            locale: locale.into(),
        }
    }

    /// 会话语言
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 翻译（会话语言）
    pub fn text(&self, key: &str) -> String {
        t_in(&self.locale, key)
    }

    /// 翻译（会话语言,带参数）
    pub fn text_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        t_with_args_in(&self.locale, key, args)
    }

    /// 成功通知
    pub fn success(&self, message: String) {
        self.publisher.publish(&Notification::success(message));
    }

    /// 提示通知
    pub fn info(&self, message: String) {
        self.publisher.publish(&Notification::info(message));
    }

    /// 拒绝: 记录 warn 并发布错误通知,原样返回错误
    pub fn rejected(&self, operation: &'static str, err: ApiError) -> ApiError {
        warn!(operation, error = %err, "操作被拒绝");
        self.publisher
            .publish(&Notification::error(err.localized_message(&self.locale)));
        err
    }
}
