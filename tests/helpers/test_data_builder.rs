// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use manufacturing_dashboard::domain::{ProductDraft, ProductPatch};

// ==========================================
// ProductDraft 构建器
// ==========================================

pub struct ProductDraftBuilder {
    draft: ProductDraft,
}

impl ProductDraftBuilder {
    /// 合法的新增输入（各字段均可覆盖）
    pub fn new(code: &str) -> Self {
        Self {
            draft: ProductDraft {
                code: code.to_string(),
                name: format!("テスト製品 {}", code),
                category: "駆動部品".to_string(),
                price: Some(15000.0),
                unit: "台".to_string(),
                lead_time: Some(12),
                is_active: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.draft.name = name.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.draft.category = category.to_string();
        self
    }

    pub fn price(mut self, price: Option<f64>) -> Self {
        self.draft.price = price;
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.draft.unit = unit.to_string();
        self
    }

    pub fn lead_time(mut self, days: Option<i64>) -> Self {
        self.draft.lead_time = days;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.draft.is_active = Some(is_active);
        self
    }

    pub fn build(self) -> ProductDraft {
        self.draft
    }
}

// ==========================================
// ProductPatch 构建器
// ==========================================

#[derive(Default)]
pub struct ProductPatchBuilder {
    patch: ProductPatch,
}

impl ProductPatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(mut self, code: &str) -> Self {
        self.patch.code = Some(code.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.patch.name = Some(name.to_string());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.patch.price = Some(price);
        self
    }

    pub fn lead_time(mut self, days: i64) -> Self {
        self.patch.lead_time = Some(days);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.patch.is_active = Some(is_active);
        self
    }

    pub fn build(self) -> ProductPatch {
        self.patch
    }
}
