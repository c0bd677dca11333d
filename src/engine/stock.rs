// ==========================================
// 制造看板数据层 - 入出库迁移
// ==========================================
// 职责: 入庫/出庫 → 新在库数 → 重新派生 status → 盖日期
// 红线: 校验先于提交;失败时不触碰 last_updated
// 说明: 出库恰好到 0 允许(结果为欠品),低于 0 拒绝
// ==========================================

use crate::domain::{InventoryItem, StockDirection};
use crate::engine::error::{TransitionError, TransitionResult};
use crate::engine::events::{MutationOutcome, Transition};
use chrono::NaiveDate;

/// 解析用户输入的数量
///
/// # 返回
/// - Ok(i64): 已去除首尾空白的整数（正负由 adjust_stock 再校验）
/// - Err(Validation): 空输入或非整数
pub fn parse_quantity(raw: &str) -> TransitionResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| TransitionError::field("quantity", "validation.quantity_positive"))
}

/// 入出库迁移
///
/// # 参数
/// - items: 当前在库集合
/// - item_id: 目标品目
/// - direction: 入庫 / 出庫
/// - quantity: 数量（必须为正整数）
/// - today: 提交成功时写入 last_updated 的日期
///
/// # 返回
/// - Ok(Transition): 下一集合 + StockAdjusted
/// - Err(Validation): 数量非正 / 入库溢出
/// - Err(InsufficientStock): 出库后在库为负
/// - Err(NotFound): 品目不存在
pub fn adjust_stock(
    items: &[InventoryItem],
    item_id: &str,
    direction: StockDirection,
    quantity: i64,
    today: NaiveDate,
) -> TransitionResult<Transition<InventoryItem>> {
    if quantity <= 0 {
        return Err(TransitionError::field(
            "quantity",
            "validation.quantity_positive",
        ));
    }
    let qty = quantity as u64;

    let target = items
        .iter()
        .find(|item| item.id == item_id)
        .ok_or_else(|| TransitionError::NotFound {
            entity: "InventoryItem".to_string(),
            id: item_id.to_string(),
        })?;

    let new_stock = match direction {
        StockDirection::In => target
            .current_stock()
            .checked_add(qty)
            .ok_or_else(|| TransitionError::field("quantity", "validation.quantity_too_large"))?,
        StockDirection::Out => target.current_stock().checked_sub(qty).ok_or_else(|| {
            TransitionError::InsufficientStock {
                item_id: target.id.clone(),
                current_stock: target.current_stock(),
                requested: qty,
            }
        })?,
    };

    let updated = target.with_stock(new_stock, today);
    let outcome = MutationOutcome::StockAdjusted {
        item_id: updated.id.clone(),
        item_name: updated.name.clone(),
        unit: updated.unit.clone(),
        direction,
        quantity: qty,
        new_stock,
    };

    let next = items
        .iter()
        .map(|item| {
            if item.id == item_id {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect();

    Ok(Transition::new(next, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InventoryStatus;
    use crate::engine::status_core::classify_inventory_status;

    fn seed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    fn items() -> Vec<InventoryItem> {
        vec![
            InventoryItem::new("INV001", "A-100", "ベアリング 6205", "部品", 450, 200, "個", seed_date()),
            InventoryItem::new("INV002", "A-101", "ベアリング 6206", "部品", 80, 150, "個", seed_date()),
        ]
    }

    #[test]
    fn test_receipt_recomputes_status_and_stamps_date() {
        let current = items();
        let t = adjust_stock(&current, "INV002", StockDirection::In, 100, today()).unwrap();

        let item = &t.next[1];
        assert_eq!(item.current_stock(), 180);
        assert_eq!(item.status(), InventoryStatus::Normal);
        assert_eq!(item.last_updated, today());
        // 其他品目不变
        assert_eq!(t.next[0], current[0]);
        match t.outcome {
            MutationOutcome::StockAdjusted { quantity, new_stock, .. } => {
                assert_eq!(quantity, 100);
                assert_eq!(new_stock, 180);
            }
            other => panic!("Expected StockAdjusted, got {:?}", other),
        }
    }

    #[test]
    fn test_issue_beyond_stock_is_rejected() {
        let current = items();
        let err = adjust_stock(&current, "INV001", StockDirection::Out, 500, today()).unwrap_err();
        assert_eq!(
            err,
            TransitionError::InsufficientStock {
                item_id: "INV001".to_string(),
                current_stock: 450,
                requested: 500,
            }
        );
        assert_eq!(current[0].current_stock(), 450);
        assert_eq!(current[0].last_updated, seed_date());
    }

    #[test]
    fn test_issue_to_exactly_zero_is_allowed_and_marks_shortage() {
        let current = items();
        let t = adjust_stock(&current, "INV002", StockDirection::Out, 80, today()).unwrap();
        assert_eq!(t.next[1].current_stock(), 0);
        assert_eq!(t.next[1].status(), InventoryStatus::Shortage);
    }

    #[test]
    fn test_non_positive_quantity_is_validation_error() {
        let current = items();
        for qty in [0, -5] {
            let err = adjust_stock(&current, "INV001", StockDirection::In, qty, today()).unwrap_err();
            assert_eq!(err.violations()[0].field, "quantity");
        }
    }

    #[test]
    fn test_receipt_overflow_is_validation_error() {
        let current = vec![InventoryItem::new(
            "INV900", "Z-1", "dummy", "部品", u64::MAX - 1, 0, "個", seed_date(),
        )];
        let err = adjust_stock(&current, "INV900", StockDirection::In, 5, today()).unwrap_err();
        assert_eq!(err.violations()[0].message_key, "validation.quantity_too_large");
    }

    #[test]
    fn test_unknown_item_is_not_found() {
        let err = adjust_stock(&items(), "INV404", StockDirection::In, 1, today()).unwrap_err();
        assert!(matches!(err, TransitionError::NotFound { .. }));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity("-3"), Ok(-3));
        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("12abc").is_err());
        assert!(parse_quantity("1.5").is_err());
    }

    #[test]
    fn test_stock_arithmetic_over_many_adjustments() {
        let mut current = items();
        let mut expected: u64 = 450;
        for (direction, qty) in [
            (StockDirection::Out, 50),
            (StockDirection::In, 7),
            (StockDirection::Out, 407),
            (StockDirection::In, 1),
        ] {
            let t = adjust_stock(&current, "INV001", direction, qty, today()).unwrap();
            expected = match direction {
                StockDirection::In => expected + qty as u64,
                StockDirection::Out => expected - qty as u64,
            };
            assert_eq!(t.next[0].current_stock(), expected);
            assert_eq!(
                t.next[0].status(),
                classify_inventory_status(expected, t.next[0].safety_stock())
            );
            current = t.next;
        }
        assert_eq!(expected, 1);
    }
}
