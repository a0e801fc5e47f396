//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use config::AppConfig;
use errors::{AppError, AppResult};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::{error, info};

use crate::health::{HealthChecker, HealthServer};
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};

/// 健康检查端口相对 gRPC 端口的偏移量
pub const HEALTH_PORT_OFFSET: u16 = 1000;

/// 计算健康检查端口（gRPC 端口 + 1000）
pub fn health_port(grpc_port: u16) -> AppResult<u16> {
    grpc_port.checked_add(HEALTH_PORT_OFFSET).ok_or_else(|| {
        AppError::validation(format!(
            "gRPC port {} leaves no room for the health port (+{})",
            grpc_port, HEALTH_PORT_OFFSET
        ))
    })
}

/// 绑定监听端口，端口不可用时返回 `AppError::Unavailable`
pub async fn bind_listener(addr: SocketAddr) -> AppResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::unavailable(format!("Failed to bind {}: {}", addr, e)))
}

/// 在已绑定的端口上运行 gRPC 服务
///
/// 服务运行期间 `/ready` 返回 200，返回前恢复为未就绪。
pub async fn serve_grpc<S>(
    router: Router,
    listener: TcpListener,
    health_checker: &HealthChecker,
    signal: S,
) -> Result<(), tonic::transport::Error>
where
    S: Future<Output = ()>,
{
    health_checker.mark_serving();
    let served = router
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal)
        .await;
    health_checker.mark_not_serving();
    served
}

/// 运行 gRPC 服务
///
/// 这是服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 安装 Prometheus recorder
/// 4. 启动健康检查 HTTP 服务器
/// 5. 调用用户提供的闭包注册 gRPC 服务
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use bootstrap::run_server;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_server("config", |config, mut server| async move {
///         Ok(server.add_service(MyServiceServer::new(MyServiceImpl::new())))
///     }).await
/// }
/// ```
pub async fn run_server<F, Fut>(
    config_dir: &str,
    server_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(AppConfig, Server) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = Arc::new(MetricsRecorder::install()?);

    // 4. 启动健康检查 HTTP 服务器
    let health_checker = Arc::new(HealthChecker::new());
    let health_addr = SocketAddr::from(([0, 0, 0, 0], health_port(config.server.port)?));
    let health_listener = bind_listener(health_addr).await?;
    let health_server = HealthServer::new(health_checker.clone(), metrics);

    let health_handle = tokio::spawn(async move {
        if let Err(e) = health_server.serve(health_listener).await {
            error!("Health server error: {}", e);
        }
    });

    // 5. 构建服务地址
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // 6. 让用户注册 gRPC 服务
    let router = server_builder(config, Server::builder()).await?;

    // 7. 绑定端口后才标记就绪
    let listener = bind_listener(addr).await?;
    info!(%addr, "gRPC server starting");
    let served = serve_grpc(router, listener, &health_checker, shutdown_signal()).await;

    // 8. 清理
    health_handle.abort();

    served?;
    info!("Service stopped");

    Ok(())
}
