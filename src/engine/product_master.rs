// ==========================================
// 制造看板数据层 - 製品マスタ迁移
// ==========================================
// 职责: 行内编辑 / 新增 / 删除
// 红线: 任一字段违规 → 整体拒绝(不部分应用)
// 红线: 校验通过后才向 IdGenerator 取号
// ==========================================

use crate::domain::{is_known_category, Product, ProductDraft, ProductPatch};
use crate::engine::error::{FieldViolation, TransitionError, TransitionResult};
use crate::engine::events::{MutationOutcome, Transition};
use crate::engine::id_generator::IdGenerator;

/// 校验前的候选值（新增与编辑共用）
struct Candidate<'a> {
    code: &'a str,
    name: &'a str,
    category: &'a str,
    price: Option<f64>,
    unit: &'a str,
    lead_time: Option<i64>,
}

/// 字段校验
///
/// # 规则
/// - code/name/unit 非空白
/// - category 属于已知类别
/// - price > 0（且为有限数）
/// - leadTime > 0（且不超过 u32）
/// - code 在其余记录中唯一（去除首尾空白后比较）
fn validate(candidate: &Candidate<'_>, others: &[&Product]) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if candidate.code.trim().is_empty() {
        violations.push(FieldViolation::new("code", "validation.code_required"));
    } else if others.iter().any(|p| p.code.trim() == candidate.code.trim()) {
        violations.push(FieldViolation::new("code", "validation.code_duplicate"));
    }

    if candidate.name.trim().is_empty() {
        violations.push(FieldViolation::new("name", "validation.name_required"));
    }

    if !is_known_category(candidate.category) {
        violations.push(FieldViolation::new("category", "validation.category_required"));
    }

    match candidate.price {
        Some(price) if price.is_finite() && price > 0.0 => {}
        _ => violations.push(FieldViolation::new("price", "validation.price_positive")),
    }

    if candidate.unit.trim().is_empty() {
        violations.push(FieldViolation::new("unit", "validation.unit_required"));
    }

    match candidate.lead_time {
        Some(days) if days > 0 && u32::try_from(days).is_ok() => {}
        _ => violations.push(FieldViolation::new("leadTime", "validation.lead_time_positive")),
    }

    violations
}

/// 校验新增输入（不取号、不修改集合）
pub fn validate_draft(products: &[Product], draft: &ProductDraft) -> Vec<FieldViolation> {
    let others: Vec<&Product> = products.iter().collect();
    validate(
        &Candidate {
            code: &draft.code,
            name: &draft.name,
            category: &draft.category,
            price: draft.price,
            unit: &draft.unit,
            lead_time: draft.lead_time,
        },
        &others,
    )
}

/// 行内编辑：合并 patch 后整体校验
///
/// - 未出现在 patch 中的字段保持原值
/// - 记录不存在 → Unchanged
pub fn update_product(
    products: &[Product],
    product_id: &str,
    patch: &ProductPatch,
) -> TransitionResult<Transition<Product>> {
    let Some(existing) = products.iter().find(|p| p.id == product_id) else {
        return Ok(Transition::unchanged(products));
    };

    let code = patch.code.as_deref().unwrap_or(&existing.code);
    let name = patch.name.as_deref().unwrap_or(&existing.name);
    let category = patch.category.as_deref().unwrap_or(&existing.category);
    let unit = patch.unit.as_deref().unwrap_or(&existing.unit);
    let price = patch.price.unwrap_or(existing.price);
    let lead_time = patch.lead_time.unwrap_or(i64::from(existing.lead_time));

    let others: Vec<&Product> = products.iter().filter(|p| p.id != product_id).collect();
    let violations = validate(
        &Candidate {
            code,
            name,
            category,
            price: Some(price),
            unit,
            lead_time: Some(lead_time),
        },
        &others,
    );
    if !violations.is_empty() {
        return Err(TransitionError::Validation(violations));
    }

    let updated = Product {
        id: existing.id.clone(),
        code: code.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        unit: unit.to_string(),
        lead_time: lead_time as u32,
        is_active: patch.is_active.unwrap_or(existing.is_active),
    };

    let next = products
        .iter()
        .map(|p| if p.id == product_id { updated.clone() } else { p.clone() })
        .collect();

    Ok(Transition::new(next, MutationOutcome::ProductUpdated(updated)))
}

/// 新增製品
///
/// - 校验通过后分配 id 并追加到末尾
/// - is_active 缺省为 true
pub fn add_product(
    products: &[Product],
    draft: &ProductDraft,
    ids: &dyn IdGenerator,
) -> TransitionResult<Transition<Product>> {
    let violations = validate_draft(products, draft);
    if !violations.is_empty() {
        return Err(TransitionError::Validation(violations));
    }

    // 校验已保证 price / lead_time 存在且为正
    let product = Product {
        id: ids.next_id(),
        code: draft.code.clone(),
        name: draft.name.clone(),
        category: draft.category.clone(),
        price: draft.price.unwrap_or_default(),
        unit: draft.unit.clone(),
        lead_time: draft.lead_time.unwrap_or_default() as u32,
        is_active: draft.is_active.unwrap_or(true),
    };

    let mut next = products.to_vec();
    next.push(product.clone());
    Ok(Transition::new(next, MutationOutcome::ProductAdded(product)))
}

/// 删除製品（幂等：不存在时 Unchanged）
pub fn delete_product(products: &[Product], product_id: &str) -> Transition<Product> {
    let Some(removed) = products.iter().find(|p| p.id == product_id).cloned() else {
        return Transition::unchanged(products);
    };

    let next = products
        .iter()
        .filter(|p| p.id != product_id)
        .cloned()
        .collect();
    Transition::new(next, MutationOutcome::ProductDeleted(removed))
}
