// ==========================================
// 制造看板 - 依赖包 URL 提取
// ==========================================
// 职责: 从 package-lock.json 提取全部 https 下载 URL,
//       生成离线安装用的 package-urls.txt
// 支持: lockfileVersion 1（dependencies 树）与 2/3（packages 表）
// ==========================================

pub mod error;
pub mod extractor;

pub use error::{LockfileError, LockfileResult};
pub use extractor::{
    extract_resolved_urls, generate_package_urls, read_lockfile, render_url_list, UrlReport,
    DEFAULT_LOCKFILE, DEFAULT_OUTPUT,
};
