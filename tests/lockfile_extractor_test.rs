// ==========================================
// 依赖包 URL 提取 集成测试
// ==========================================
// 测试范围:
// 1. generate_package_urls: 读取 → 提取 → 写出
// 2. 错误: lockfile 缺失 / 无 URL / JSON 损坏
// ==========================================

use manufacturing_dashboard::lockfile::{generate_package_urls, LockfileError};
use serde_json::json;
use std::path::Path;

fn write_lockfile(dir: &Path, value: serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("package-lock.json");
    std::fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

#[test]
fn test_generate_writes_sorted_unique_urls() {
    let dir = tempfile::tempdir().unwrap();
    let lockfile = write_lockfile(
        dir.path(),
        json!({
            "name": "manufacturing-dashboard",
            "lockfileVersion": 3,
            "packages": {
                "": { "name": "manufacturing-dashboard" },
                "node_modules/recharts": { "resolved": "https://registry.npmjs.org/recharts/-/recharts-2.15.0.tgz" },
                "node_modules/clsx": { "resolved": "https://registry.npmjs.org/clsx/-/clsx-2.1.1.tgz" },
                "node_modules/workspace-pkg": { "resolved": "packages/workspace-pkg", "link": true }
            },
            "dependencies": {
                "clsx": { "resolved": "https://registry.npmjs.org/clsx/-/clsx-2.1.1.tgz" }
            }
        }),
    );
    let output = dir.path().join("package-urls.txt");

    let report = generate_package_urls(&lockfile, &output).unwrap();
    assert_eq!(report.count, 2);
    assert_eq!(report.output, output);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "https://registry.npmjs.org/clsx/-/clsx-2.1.1.tgz\n\
         https://registry.npmjs.org/recharts/-/recharts-2.15.0.tgz\n"
    );
}

#[test]
fn test_missing_lockfile_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("package-urls.txt");
    let err = generate_package_urls(&dir.path().join("package-lock.json"), &output).unwrap_err();

    assert!(matches!(err, LockfileError::MissingLockfile(_)));
    assert!(!output.exists());
}

#[test]
fn test_no_urls_is_reported_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let lockfile = write_lockfile(
        dir.path(),
        json!({ "lockfileVersion": 3, "packages": { "": { "name": "empty" } } }),
    );
    let output = dir.path().join("package-urls.txt");

    let err = generate_package_urls(&lockfile, &output).unwrap_err();
    assert!(matches!(err, LockfileError::NoUrlsFound(_)));
    assert!(!output.exists());
}

#[test]
fn test_corrupt_lockfile_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let lockfile = dir.path().join("package-lock.json");
    std::fs::write(&lockfile, "{ \"packages\": ").unwrap();

    let err = generate_package_urls(&lockfile, &dir.path().join("out.txt")).unwrap_err();
    assert!(matches!(err, LockfileError::Parse { .. }));
}
