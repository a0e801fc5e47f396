//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::net::TcpListener;
use tracing::info;

use crate::metrics::MetricsRecorder;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 健康检查器
///
/// 服务没有外部依赖，就绪状态只取决于 gRPC 服务器是否在接收请求。
pub struct HealthChecker {
    serving: AtomicBool,
}

impl HealthChecker {
    pub fn new() -> Self {
        Self {
            serving: AtomicBool::new(false),
        }
    }

    /// 标记 gRPC 服务已开始接收请求
    pub fn mark_serving(&self) {
        self.serving.store(true, Ordering::SeqCst);
    }

    /// 标记 gRPC 服务已停止
    pub fn mark_not_serving(&self) {
        self.serving.store(false, Ordering::SeqCst);
    }

    /// 执行存活检查（liveness）
    pub fn liveness(&self) -> HealthStatus {
        HealthStatus::healthy()
    }

    /// 执行就绪检查（readiness）
    pub fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::healthy();
        if self.serving.load(Ordering::SeqCst) {
            status.add_check(ComponentHealth::healthy("grpc"));
        } else {
            status.add_check(ComponentHealth::unhealthy("grpc", "Not serving"));
        }
        status
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// HTTP 健康检查服务器
// ============================================================================

/// HTTP 健康检查服务器状态
#[derive(Clone)]
struct HealthServerState {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
}

/// HTTP 健康检查服务器
pub struct HealthServer {
    checker: Arc<HealthChecker>,
    metrics: Arc<MetricsRecorder>,
}

impl HealthServer {
    /// 创建新的健康检查服务器
    pub fn new(checker: Arc<HealthChecker>, metrics: Arc<MetricsRecorder>) -> Self {
        Self { checker, metrics }
    }

    /// 构建路由
    pub fn router(&self) -> Router {
        let state = HealthServerState {
            checker: self.checker.clone(),
            metrics: self.metrics.clone(),
        };

        Router::new()
            .route("/health", get(health_handler))
            .route("/ready", get(ready_handler))
            .route("/metrics", get(metrics_handler))
            .with_state(state)
    }

    /// 在已绑定的端口上启动 HTTP 服务器
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let app = self.router();

        if let Ok(addr) = listener.local_addr() {
            info!(%addr, "Health check HTTP server starting");
        }
        axum::serve(listener, app).await
    }
}

/// Liveness 端点处理器
async fn health_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.liveness();
    (StatusCode::OK, Json(status))
}

/// Readiness 端点处理器
async fn ready_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let status = state.checker.readiness();
    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(state): State<HealthServerState>) -> impl IntoResponse {
    let metrics = state.metrics.render();
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        metrics,
    )
}
