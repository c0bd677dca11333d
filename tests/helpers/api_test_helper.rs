// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 组装带固定日期与通知记录器的种子会话
// ==========================================

use std::sync::Arc;

use manufacturing_dashboard::app::AppState;
use manufacturing_dashboard::config::DashboardConfig;
use manufacturing_dashboard::engine::FixedClock;

use crate::test_helpers::{init_test_logging, test_today, RecordingPublisher};

/// API测试环境
pub struct ApiTestEnv {
    pub state: AppState,
    pub clock: Arc<FixedClock>,
    pub publisher: Arc<RecordingPublisher>,
}

impl ApiTestEnv {
    /// 默认配置（ja）
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    /// 指定语言
    pub fn with_locale(locale: &str) -> Self {
        Self::with_config(DashboardConfig {
            locale: locale.to_string(),
            ..DashboardConfig::default()
        })
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        init_test_logging();
        let clock = Arc::new(FixedClock::new(test_today()));
        let publisher = Arc::new(RecordingPublisher::new());
        let state = AppState::with_dependencies(config, clock.clone(), publisher.clone())
            .expect("无法创建测试环境");
        Self {
            state,
            clock,
            publisher,
        }
    }
}
