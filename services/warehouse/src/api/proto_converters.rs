//! Domain -> proto 转换

use crate::domain::{Product, WarehouseData};
use crate::proto;

pub fn product_to_proto(product: Product) -> proto::Product {
    proto::Product {
        product_id: product.id,
        product_name: product.name,
        product_category: product.category,
        product_quantity: product.quantity,
        product_unit: product.unit,
    }
}

pub fn warehouse_data_to_proto(data: WarehouseData) -> proto::WarehouseResponse {
    proto::WarehouseResponse {
        warehouse_id: data.warehouse_id,
        warehouse_name: data.site.name,
        warehouse_address: data.site.address,
        warehouse_postal_code: data.site.postal_code,
        warehouse_city: data.site.city,
        warehouse_country: data.site.country,
        timestamp: data.timestamp,
        product_data: data.products.into_iter().map(product_to_proto).collect(),
    }
}
