//! 查询日志输出

use tracing::info;

use super::queries::GetWarehouseDataQuery;

/// 查询处理器的诊断日志出口
///
/// 仅用于观测，调用方不应依赖其输出。
pub trait LookupLog: Send + Sync {
    /// 收到一次查询调用
    fn call_received(&self, query: &GetWarehouseDataQuery);

    /// 开始读取指定仓库的数据
    fn lookup_started(&self, uuid: &str);
}

/// 通过 tracing 输出日志
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLookupLog;

impl LookupLog for TracingLookupLog {
    fn call_received(&self, query: &GetWarehouseDataQuery) {
        info!(uuid = %query.uuid, "Handling warehouse endpoint");
    }

    fn lookup_started(&self, uuid: &str) {
        info!("Getting data of warehouse with uuid={}...", uuid);
    }
}

/// 丢弃所有日志
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentLookupLog;

impl LookupLog for SilentLookupLog {
    fn call_received(&self, _query: &GetWarehouseDataQuery) {}

    fn lookup_started(&self, _uuid: &str) {}
}
