// ==========================================
// 制造看板 - package-lock.json URL 提取器
// ==========================================
// 规则: 只收集以 https:// 开头的 resolved 字段;去重并按字典序排序
// 输出: URL 以 \n 连接并以 \n 结尾
// ==========================================

use crate::lockfile::error::{LockfileError, LockfileResult};
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 默认 lockfile 路径
pub const DEFAULT_LOCKFILE: &str = "package-lock.json";

/// 默认输出路径
pub const DEFAULT_OUTPUT: &str = "package-urls.txt";

const HTTPS_PREFIX: &str = "https://";

/// 生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlReport {
    /// 去重后的 URL 数
    pub count: usize,
    /// 写入的文件
    pub output: PathBuf,
}

/// 从已解析的 lockfile 中提取 URL
///
/// # 来源
/// - packages: 平铺表（lockfileVersion 2/3）
/// - dependencies: 递归树（lockfileVersion 1）
///
/// 两者同时存在时合并。
pub fn extract_resolved_urls(lockfile: &Value) -> BTreeSet<String> {
    let mut urls = BTreeSet::new();

    if let Some(packages) = lockfile.get("packages").and_then(Value::as_object) {
        for info in packages.values() {
            collect_resolved(info, &mut urls);
        }
    }

    if let Some(dependencies) = lockfile.get("dependencies") {
        collect_dependency_tree(dependencies, &mut urls);
    }

    urls
}

fn collect_resolved(info: &Value, urls: &mut BTreeSet<String>) {
    if let Some(resolved) = info.get("resolved").and_then(Value::as_str) {
        if resolved.starts_with(HTTPS_PREFIX) {
            urls.insert(resolved.to_string());
        }
    }
}

fn collect_dependency_tree(dependencies: &Value, urls: &mut BTreeSet<String>) {
    let Some(entries) = dependencies.as_object() else {
        return;
    };
    for info in entries.values() {
        collect_resolved(info, urls);
        if let Some(nested) = info.get("dependencies") {
            collect_dependency_tree(nested, urls);
        }
    }
}

/// 渲染输出文本
pub fn render_url_list(urls: &BTreeSet<String>) -> String {
    let mut text = urls.iter().map(String::as_str).collect::<Vec<_>>().join("\n");
    text.push('\n');
    text
}

/// 读取并解析 lockfile
pub fn read_lockfile(path: &Path) -> LockfileResult<Value> {
    if !path.exists() {
        return Err(LockfileError::MissingLockfile(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| LockfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LockfileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// 读取 lockfile → 提取 → 写出 URL 列表
///
/// # 返回
/// - Err(MissingLockfile): lockfile 不存在
/// - Err(NoUrlsFound): 没有任何 https URL（不写出文件）
pub fn generate_package_urls(lockfile: &Path, output: &Path) -> LockfileResult<UrlReport> {
    let value = read_lockfile(lockfile)?;
    let urls = extract_resolved_urls(&value);
    debug!(lockfile = %lockfile.display(), count = urls.len(), "URL 提取完成");

    if urls.is_empty() {
        return Err(LockfileError::NoUrlsFound(lockfile.to_path_buf()));
    }

    std::fs::write(output, render_url_list(&urls)).map_err(|source| LockfileError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    info!(output = %output.display(), count = urls.len(), "package-urls.txt 已生成");
    Ok(UrlReport {
        count: urls.len(),
        output: output.to_path_buf(),
    })
}
