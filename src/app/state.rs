// ==========================================
// 制造看板数据层 - 应用状态
// ==========================================
// 职责: 管理会话级别的共享状态和API实例
// 说明: 每个会话持有自己的仓储与 ID 生成器,不使用全局静态状态
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiResult, DashboardApi, InventoryApi, MasterApi, Notifier, ProcessApi};
use crate::config::{ConfigManager, DashboardConfig};
use crate::engine::{
    Clock, DashboardEventPublisher, IdGenerator, SystemClock, TracingEventPublisher,
};
use crate::repository::{InventoryRepository, OrderRepository, ProductRepository};

/// 应用状态
///
/// 包含所有API实例和共享资源
pub struct AppState {
    /// 会话配置
    pub config: DashboardConfig,

    /// 驾驶舱API
    pub dashboard_api: Arc<DashboardApi>,

    /// 在库管理API
    pub inventory_api: Arc<InventoryApi>,

    /// 工程管理API
    pub process_api: Arc<ProcessApi>,

    /// マスタメンテナンスAPI
    pub master_api: Arc<MasterApi>,

    /// 仓储（供测试与诊断直接读取）
    pub inventory_repo: Arc<InventoryRepository>,
    pub order_repo: Arc<OrderRepository>,
    pub product_repo: Arc<ProductRepository>,
}

impl AppState {
    /// 以种子数据创建会话（系统日期 + tracing 通知）
    ///
    /// # 参数
    /// - config: 会话配置（先校验）
    ///
    /// # 返回
    /// - Err(Config): 配置未通过校验
    pub fn seeded(config: DashboardConfig) -> ApiResult<Self> {
        Self::with_dependencies(
            config,
            Arc::new(SystemClock),
            Arc::new(TracingEventPublisher),
        )
    }

    /// 以种子数据创建会话（注入日期来源与通知发布者）
    pub fn with_dependencies(
        config: DashboardConfig,
        clock: Arc<dyn Clock>,
        publisher: Arc<dyn DashboardEventPublisher>,
    ) -> ApiResult<Self> {
        config.validate()?;
        tracing::info!(locale = %config.locale, "初始化AppState（种子数据）");

        // ==========================================
        // 初始化Repository层
        // ==========================================
        let inventory_repo = Arc::new(InventoryRepository::seeded());
        let order_repo = Arc::new(OrderRepository::seeded());
        let product_repo = Arc::new(ProductRepository::seeded());

        // ==========================================
        // 初始化API层
        // ==========================================
        let ids: Arc<dyn IdGenerator> = Arc::new(config.id_generator());
        let notifier = Notifier::new(publisher, config.locale.clone());

        let inventory_api = Arc::new(InventoryApi::new(
            inventory_repo.clone(),
            clock.clone(),
            notifier.clone(),
        ));
        let process_api = Arc::new(ProcessApi::new(order_repo.clone(), notifier.clone()));
        let master_api = Arc::new(MasterApi::new(product_repo.clone(), ids, clock, notifier));
        let dashboard_api = Arc::new(DashboardApi::seeded());

        tracing::info!("AppState初始化完成");

        Ok(Self {
            config,
            dashboard_api,
            inventory_api,
            process_api,
            master_api,
            inventory_repo,
            order_repo,
            product_repo,
        })
    }

    /// 从配置文件加载配置后创建会话
    pub fn from_config_file(path: &std::path::Path) -> ApiResult<Self> {
        let manager = ConfigManager::load(path)?;
        Self::seeded(manager.into_config())
    }
}

/// 获取默认配置文件路径
///
/// 无法确定用户配置目录时回退到当前目录下的 config.json
pub fn get_default_config_path() -> PathBuf {
    ConfigManager::default_path().unwrap_or_else(|| PathBuf::from("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_state_has_all_collections() {
        let state = AppState::seeded(DashboardConfig::default()).unwrap();
        assert_eq!(state.inventory_repo.snapshot().unwrap().len(), 10);
        assert_eq!(state.order_repo.snapshot().unwrap().len(), 8);
        assert_eq!(state.product_repo.snapshot().unwrap().len(), 10);
        assert_eq!(state.dashboard_api.line_statuses().len(), 5);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = DashboardConfig {
            locale: "fr".to_string(),
            ..DashboardConfig::default()
        };
        assert!(AppState::seeded(config).is_err());
    }

    #[test]
    fn test_sessions_are_independent() {
        let a = AppState::seeded(DashboardConfig::default()).unwrap();
        let b = AppState::seeded(DashboardConfig::default()).unwrap();
        a.master_api.delete_product("P001").unwrap();
        assert_eq!(a.product_repo.snapshot().unwrap().len(), 9);
        assert_eq!(b.product_repo.snapshot().unwrap().len(), 10);
    }
}
