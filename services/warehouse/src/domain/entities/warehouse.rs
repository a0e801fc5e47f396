//! 仓库实体与夹具数据

use errors::{AppError, AppResult};

use super::Product;

/// 仓库的静态属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseSite {
    pub name: String,
    pub address: String,
    pub postal_code: i32,
    pub city: String,
    pub country: String,
}

/// 不可变的仓库夹具数据
///
/// 在构造查询处理器时传入，处理器对所有请求返回同一份数据。
/// 商品列表非空，顺序即响应中的顺序。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseFixture {
    site: WarehouseSite,
    products: Vec<Product>,
}

impl WarehouseFixture {
    pub fn new(site: WarehouseSite, products: Vec<Product>) -> AppResult<Self> {
        if products.is_empty() {
            return Err(AppError::validation("warehouse fixture must contain at least one product"));
        }

        if let Some(product) = products.iter().find(|p| p.quantity < 0) {
            return Err(AppError::validation(format!(
                "product {} has negative quantity {}",
                product.id, product.quantity
            )));
        }

        Ok(Self { site, products })
    }

    /// 内置参考数据：Linz Bahnhof 仓库及三种商品
    pub fn reference() -> Self {
        Self {
            site: WarehouseSite {
                name: "Linz Bahnhof".to_string(),
                address: "WhoKnows Straße 12".to_string(),
                postal_code: 4000,
                city: "Linz".to_string(),
                country: "AUSTRIA".to_string(),
            },
            products: vec![
                Product::new(
                    "e940f2af-182d-4b49-940b-723908f53a77",
                    "Brot",
                    "Brot und Backwaren",
                    105,
                    "500ML/Packung",
                ),
                Product::new(
                    "df2a7d5e-97f9-4545-91d5-6229ba0acb05",
                    "Milch",
                    "Milchprodukte",
                    167,
                    "1L/Packung",
                ),
                Product::new(
                    "42c9feae-ee65-4e4b-ac45-c1bc5ac7355b",
                    "Kartoffeln",
                    "Gemüse",
                    123,
                    "3KG/Packung",
                ),
            ],
        }
    }

    pub fn site(&self) -> &WarehouseSite {
        &self.site
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for WarehouseFixture {
    fn default() -> Self {
        Self::reference()
    }
}

/// 单次查询的结果快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseData {
    /// 与请求中的 uuid 完全一致
    pub warehouse_id: String,
    pub site: WarehouseSite,
    /// 本地日期时间，ISO-8601 文本，不带时区
    pub timestamp: String,
    pub products: Vec<Product>,
}
