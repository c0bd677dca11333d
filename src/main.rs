// ==========================================
// 制造看板数据层 - 控制台主入口
// ==========================================
// 职责: 加载配置 → 组装种子会话 → 输出概况（可选导出 CSV）
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use manufacturing_dashboard::app::{get_default_config_path, AppState};
use manufacturing_dashboard::config::ConfigManager;
use manufacturing_dashboard::engine::FilterCriteria;
use manufacturing_dashboard::{logging, InventoryStatus, APP_NAME, VERSION};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "manufacturing-dashboard")]
#[command(about = "Manufacturing dashboard data layer (console mode)")]
struct Args {
    /// 配置文件路径（缺省: 用户配置目录）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 导出製品マスタ CSV（写入配置中的 export_dir）
    #[arg(long)]
    export: bool,

    /// 覆盖导出目录
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志系统
    if args.json_logs {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("==================================================");
    tracing::info!("{} - 数据层", APP_NAME);
    tracing::info!("系统版本: {}", VERSION);
    tracing::info!("==================================================");

    let config_path = args.config.clone().unwrap_or_else(get_default_config_path);
    tracing::info!("使用配置: {}", config_path.display());

    let config = ConfigManager::load(&config_path)
        .with_context(|| format!("无法加载配置: {}", config_path.display()))?
        .into_config();
    let state = AppState::seeded(config).context("无法初始化AppState")?;

    // ===== 驾驶舱 =====
    let kpis = state.dashboard_api.kpis();
    let lines = state.dashboard_api.line_summary();
    println!(
        "[KPI] production={} operation={}% defect={}% goal={}%",
        kpis.daily_production, kpis.operation_rate, kpis.defect_rate, kpis.goal_achievement
    );
    println!(
        "[Lines] running={} changeover={} stopped={} / {}",
        lines.running, lines.changeover, lines.stopped, lines.total
    );

    // ===== 在库 =====
    let summary = state.inventory_api.status_summary()?;
    for status in InventoryStatus::ALL {
        println!(
            "[Inventory] {}: {}",
            state.inventory_api.status_label(status),
            summary.count(status)
        );
    }

    // ===== 看板 =====
    for column in state.process_api.board()? {
        println!("[Kanban] {}: {}", column.title, column.count());
    }

    // ===== 导出 =====
    if args.export {
        let dir = args
            .export_dir
            .unwrap_or_else(|| state.config.export_dir.clone());
        let path = state
            .master_api
            .export_csv_to(&dir, &FilterCriteria::default())?;
        println!("[Export] {}", path.display());
    }

    Ok(())
}
