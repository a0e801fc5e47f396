//! Business logic handler

use std::sync::Arc;

use crate::domain::{Clock, WarehouseData, WarehouseFixture, format_timestamp};

use super::lookup_log::LookupLog;
use super::queries::GetWarehouseDataQuery;

/// 仓库数据查询处理器
///
/// 无状态：夹具、时钟和日志出口在构造后只读，可被任意多个并发请求共享。
pub struct WarehouseQueryHandler {
    fixture: WarehouseFixture,
    clock: Arc<dyn Clock>,
    log: Arc<dyn LookupLog>,
}

impl WarehouseQueryHandler {
    pub fn new(fixture: WarehouseFixture, clock: Arc<dyn Clock>, log: Arc<dyn LookupLog>) -> Self {
        Self {
            fixture,
            clock,
            log,
        }
    }

    /// 获取仓库数据
    ///
    /// 任意 uuid（包括空字符串）都会得到完整的响应，不会失败。
    pub fn handle(&self, query: GetWarehouseDataQuery) -> WarehouseData {
        self.log.call_received(&query);

        let warehouse_id = query.uuid;
        self.log.lookup_started(&warehouse_id);

        WarehouseData {
            warehouse_id,
            site: self.fixture.site().clone(),
            timestamp: format_timestamp(self.clock.now()),
            products: self.fixture.products().to_vec(),
        }
    }
}
