//! 商品实体

/// 仓库中的商品库存记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    /// 库存数量，不小于 0
    pub quantity: i32,
    /// 包装单位，自由文本，例如 `500ML/Packung`
    pub unit: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: i32,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            unit: unit.into(),
        }
    }
}
