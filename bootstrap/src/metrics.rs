//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出

use errors::{AppError, AppResult};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Metrics 记录器
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus recorder
    pub fn install() -> AppResult<Self> {
        let handle = telemetry::init_metrics().map_err(|e| {
            AppError::internal(format!("Failed to install Prometheus recorder: {}", e))
        })?;

        Ok(Self { handle })
    }

    /// 创建未注册为全局 recorder 的记录器
    pub fn detached() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        Self {
            handle: recorder.handle(),
        }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录 gRPC 请求
pub fn record_grpc_request(service: &str, method: &str, status: &str, duration_ms: f64) {
    let labels = [
        ("service", service.to_string()),
        ("method", method.to_string()),
        ("status", status.to_string()),
    ];

    counter!("grpc_requests_total", &labels).increment(1);
    histogram!("grpc_request_duration_ms", &labels).record(duration_ms);
}

/// 请求计时器
pub struct RequestTimer {
    start: Instant,
    service: String,
    method: String,
}

impl RequestTimer {
    pub fn new(service: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            service: service.into(),
            method: method.into(),
        }
    }

    pub fn finish(self, status: &str) {
        let duration = self.start.elapsed().as_secs_f64() * 1000.0;
        record_grpc_request(&self.service, &self.method, status, duration);
    }
}
