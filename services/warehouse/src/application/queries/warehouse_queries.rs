//! Warehouse queries

/// 获取仓库数据查询
///
/// `uuid` 对处理器不透明：不解析、不校验，只原样回填到响应中。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetWarehouseDataQuery {
    pub uuid: String,
}

impl GetWarehouseDataQuery {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }
}
