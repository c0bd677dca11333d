// ==========================================
// 制造看板数据层 - 导出层
// ==========================================
// 职责: 将（已过滤的）製品マスタ序列化为 CSV 下载文件
// 红线: 导出不修改任何集合
// ==========================================

pub mod error;
pub mod product_csv;

pub use error::{ExportError, ExportResult};
pub use product_csv::{
    export_filename, export_products_csv, write_products_csv, PRODUCT_CSV_HEADER, UTF8_BOM,
};
