// ==========================================
// MasterApi 集成测试
// ==========================================
// 测试范围:
// 1. 新增: add_product（取号 / 校验 / 不消耗序号）
// 2. 行内编辑: update_product（合并 / 整体拒绝）
// 3. 删除: delete_product（幂等 / 序号不复用）
// 4. 导出: export_csv, export_csv_to（过滤结果 / BOM / 文件名）
// ==========================================

mod helpers;

use helpers::api_test_helper::ApiTestEnv;
use helpers::test_data_builder::{ProductDraftBuilder, ProductPatchBuilder};
use manufacturing_dashboard::config::DashboardConfig;
use manufacturing_dashboard::engine::{FilterCriteria, MutationOutcome, NotificationLevel};
use manufacturing_dashboard::export::UTF8_BOM;
use manufacturing_dashboard::ApiError;

fn csv_lines(bytes: &[u8]) -> Vec<String> {
    assert!(bytes.starts_with(UTF8_BOM));
    String::from_utf8(bytes[UTF8_BOM.len()..].to_vec())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// ==========================================
// 新增
// ==========================================

#[test]
fn test_add_assigns_sequential_ids_from_p011() {
    let env = ApiTestEnv::new();
    let api = &env.state.master_api;

    let first = api.add_product(&ProductDraftBuilder::new("G-700").build()).unwrap();
    let second = api.add_product(&ProductDraftBuilder::new("G-701").build()).unwrap();
    assert_eq!(first.id, "P011");
    assert_eq!(second.id, "P012");
    assert!(first.is_active);

    let products = env.state.product_repo.snapshot().unwrap();
    assert_eq!(products.len(), 12);
    assert_eq!(products.last().unwrap().code, "G-701");

    let note = env.publisher.last().unwrap();
    assert_eq!(note.level, NotificationLevel::Success);
    assert_eq!(note.message, "テスト製品 G-701 を追加しました");
}

#[test]
fn test_rejected_add_does_not_consume_id() {
    let env = ApiTestEnv::new();
    let api = &env.state.master_api;

    let err = api
        .add_product(&ProductDraftBuilder::new("G-700").price(None).build())
        .unwrap_err();
    assert_eq!(err.violations()[0].field, "price");
    assert_eq!(env.state.product_repo.snapshot().unwrap().len(), 10);

    let added = api.add_product(&ProductDraftBuilder::new("G-700").build()).unwrap();
    assert_eq!(added.id, "P011");
}

#[test]
fn test_add_reports_every_invalid_field() {
    let env = ApiTestEnv::new();
    let draft = ProductDraftBuilder::new("A-100")
        .name("  ")
        .category("")
        .price(Some(-1.0))
        .unit("")
        .lead_time(Some(0))
        .build();
    let err = env.state.master_api.add_product(&draft).unwrap_err();

    let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["code", "name", "category", "price", "unit", "leadTime"]);
    assert_eq!(err.violations()[0].message_key, "validation.code_duplicate");

    let note = env.publisher.last().unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
    assert!(note.message.starts_with("入力エラーがあります"));
}

#[test]
fn test_add_can_start_inactive() {
    let env = ApiTestEnv::new();
    let added = env
        .state
        .master_api
        .add_product(&ProductDraftBuilder::new("H-800").active(false).build())
        .unwrap();
    assert!(!added.is_active);
}

#[test]
fn test_id_sequence_follows_config() {
    let env = ApiTestEnv::with_config(DashboardConfig {
        product_id_prefix: "PRD-".to_string(),
        product_id_start: 7,
        product_id_width: 5,
        ..DashboardConfig::default()
    });
    let added = env
        .state
        .master_api
        .add_product(&ProductDraftBuilder::new("G-700").build())
        .unwrap();
    assert_eq!(added.id, "PRD-00007");
}

// ==========================================
// 行内编辑
// ==========================================

#[test]
fn test_update_merges_patch() {
    let env = ApiTestEnv::new();
    let patch = ProductPatchBuilder::new().price(4800.0).active(false).build();
    let outcome = env.state.master_api.update_product("P002", &patch).unwrap();

    let MutationOutcome::ProductUpdated(updated) = outcome else {
        panic!("Expected ProductUpdated");
    };
    assert_eq!(updated.price, 4800.0);
    assert!(!updated.is_active);
    assert_eq!(updated.name, "ベアリングユニット TypeB");

    let stored = env.state.product_repo.find_by_id("P002").unwrap().unwrap();
    assert_eq!(stored, updated);
    assert_eq!(env.publisher.last().unwrap().message, "変更を保存しました");
}

#[test]
fn test_update_with_invalid_field_applies_nothing() {
    let env = ApiTestEnv::new();
    let before = env.state.product_repo.snapshot().unwrap();

    let patch = ProductPatchBuilder::new()
        .name("新しい名前")
        .lead_time(0)
        .build();
    let err = env.state.master_api.update_product("P001", &patch).unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));
    assert_eq!(env.state.product_repo.snapshot().unwrap(), before);
}

#[test]
fn test_update_rejects_code_of_another_product() {
    let env = ApiTestEnv::new();
    let patch = ProductPatchBuilder::new().code("A-100").build();
    let err = env.state.master_api.update_product("P003", &patch).unwrap_err();
    assert_eq!(err.violations()[0].message_key, "validation.code_duplicate");
}

#[test]
fn test_update_unknown_product_is_noop() {
    let env = ApiTestEnv::new();
    let patch = ProductPatchBuilder::new().price(1.0).build();
    let outcome = env.state.master_api.update_product("P404", &patch).unwrap();
    assert!(outcome.is_unchanged());
    assert_eq!(env.publisher.count(), 0);
}

// ==========================================
// 删除
// ==========================================

#[test]
fn test_delete_is_idempotent_and_ids_not_reused() {
    let env = ApiTestEnv::new();
    let api = &env.state.master_api;

    let added = api.add_product(&ProductDraftBuilder::new("G-700").build()).unwrap();
    let outcome = api.delete_product(&added.id).unwrap();
    assert!(matches!(outcome, MutationOutcome::ProductDeleted(_)));
    assert!(api.delete_product(&added.id).unwrap().is_unchanged());

    let next = api.add_product(&ProductDraftBuilder::new("G-701").build()).unwrap();
    assert_eq!(next.id, "P012");
    assert_eq!(env.state.product_repo.snapshot().unwrap().len(), 11);
}

// ==========================================
// 检索与导出
// ==========================================

#[test]
fn test_list_products_by_activity_and_category() {
    let env = ApiTestEnv::new();
    let api = &env.state.master_api;

    let inactive = api
        .list_products(&FilterCriteria::default().with_status("inactive"))
        .unwrap();
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].code, "C-301");

    let drive = api
        .list_products(&FilterCriteria::default().with_category("駆動部品"))
        .unwrap();
    assert_eq!(drive.len(), 3);

    assert_eq!(api.categories(), vec!["機械部品", "構造材", "電子部品", "駆動部品"]);
}

#[test]
fn test_export_uses_current_filter() {
    let env = ApiTestEnv::new();
    let criteria = FilterCriteria::default().with_category("電子部品");
    let (filename, bytes) = env.state.master_api.export_csv(&criteria).unwrap();

    assert_eq!(filename, "products_2025-02-03.csv");
    let lines = csv_lines(&bytes);
    assert_eq!(lines[0], "code,name,category,price,unit,leadTime,isActive");
    assert_eq!(
        &lines[1..],
        &[
            "C-300,制御基板 Rev.3,電子部品,12000,枚,14,有効".to_string(),
            "C-301,制御基板 Rev.2,電子部品,10000,枚,14,無効".to_string(),
            "E-500,センサーモジュール TypeX,電子部品,7800,個,7,有効".to_string(),
        ]
    );
    assert_eq!(env.publisher.last().unwrap().message, "CSVをエクスポートしました");
}

#[test]
fn test_export_does_not_modify_products() {
    let env = ApiTestEnv::new();
    let before = env.state.product_repo.snapshot().unwrap();
    env.state
        .master_api
        .export_csv(&FilterCriteria::default())
        .unwrap();
    assert_eq!(env.state.product_repo.snapshot().unwrap(), before);
}

#[test]
fn test_export_to_directory() {
    let env = ApiTestEnv::with_locale("en");
    let dir = tempfile::tempdir().unwrap();
    let path = env
        .state
        .master_api
        .export_csv_to(dir.path(), &FilterCriteria::default().with_query("F-600"))
        .unwrap();

    assert_eq!(path.file_name().unwrap(), "products_2025-02-03.csv");
    let lines = csv_lines(&std::fs::read(&path).unwrap());
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "F-600,油圧シリンダー 50mm,駆動部品,32000,本,21,active");
}

// ==========================================
// 并发
// ==========================================

#[test]
fn test_concurrent_adds_keep_every_product_and_unique_ids() {
    let env = ApiTestEnv::new();
    let api = &env.state.master_api;

    std::thread::scope(|scope| {
        for worker in 0..8 {
            scope.spawn(move || {
                for n in 0..50 {
                    let code = format!("C-{}-{}", worker, n);
                    api.add_product(&ProductDraftBuilder::new(&code).build()).unwrap();
                }
            });
        }
    });

    let products = env.state.product_repo.snapshot().unwrap();
    assert_eq!(products.len(), 10 + 400);

    let mut ids: Vec<String> = products[10..].iter().map(|p| p.id.clone()).collect();
    ids.sort();
    let expected: Vec<String> = (11..411).map(|n| format!("P{:03}", n)).collect();
    assert_eq!(ids, expected);
    assert_eq!(env.publisher.count_level(NotificationLevel::Success), 400);
}
