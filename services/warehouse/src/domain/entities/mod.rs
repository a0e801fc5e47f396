mod product;
mod warehouse;

pub use product::Product;
pub use warehouse::{WarehouseData, WarehouseFixture, WarehouseSite};
