// ==========================================
// 制造看板数据层 - 製品マスタ CSV 导出
// ==========================================
// 格式: UTF-8 BOM + 表头 + 每个製品一行（保持输入顺序）
// 说明: isActive 列输出本地化的二值标记（ja: 有効 / 無効）
// ==========================================

use crate::domain::Product;
use crate::export::error::{ExportError, ExportResult};
use crate::i18n::t_in;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// UTF-8 BOM（表格软件据此识别编码）
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV 表头（字段名即 JSON 字段名）
pub const PRODUCT_CSV_HEADER: [&str; 7] = [
    "code", "name", "category", "price", "unit", "leadTime", "isActive",
];

/// 生成製品マスタ CSV 字节流
///
/// # 参数
/// - products: 待导出的製品（通常为当前过滤结果）
/// - locale: isActive 标记使用的语言
///
/// # 返回
/// - BOM + CSV 内容；含逗号/引号/换行的字段会被加引号
pub fn export_products_csv(products: &[Product], locale: &str) -> ExportResult<Vec<u8>> {
    let active = t_in(locale, "export.active");
    let inactive = t_in(locale, "export.inactive");

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(PRODUCT_CSV_HEADER)?;
    for product in products {
        let price = product.price.to_string();
        let lead_time = product.lead_time.to_string();
        let activity = if product.is_active { &active } else { &inactive };
        writer.write_record([
            product.code.as_str(),
            product.name.as_str(),
            product.category.as_str(),
            price.as_str(),
            product.unit.as_str(),
            lead_time.as_str(),
            activity.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;

    debug!(rows = products.len(), bytes = bytes.len(), locale, "製品CSV生成完了");
    Ok(bytes)
}

/// 下载文件名: products_<YYYY-MM-DD>.csv
pub fn export_filename(date: NaiveDate) -> String {
    format!("products_{}.csv", date.format("%Y-%m-%d"))
}

/// 生成 CSV 并写入目录
///
/// # 返回
/// - 写入文件的完整路径
pub fn write_products_csv(
    dir: &Path,
    products: &[Product],
    locale: &str,
    date: NaiveDate,
) -> ExportResult<PathBuf> {
    let bytes = export_products_csv(products, locale)?;
    let path = dir.join(export_filename(date));

    std::fs::write(&path, &bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), rows = products.len(), "製品CSVを書き出しました");
    Ok(path)
}
