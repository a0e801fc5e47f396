//! Warehouse Service - 服务入口
//!
//! 使用 bootstrap 统一启动模式

use std::sync::Arc;

use bootstrap::{build_reflection, run_server};
use config::AppConfig;
use tonic::transport::Server;
use tracing::info;

use warehouse_service::FILE_DESCRIPTOR_SET;
use warehouse_service::api::WarehouseServiceImpl;
use warehouse_service::application::{TracingLookupLog, WarehouseQueryHandler};
use warehouse_service::config::fixture_from_config;
use warehouse_service::domain::SystemClock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_server("config", |config: AppConfig, mut server: Server| async move {
        info!("Initializing warehouse service...");

        let fixture = fixture_from_config(&config)?;
        info!(
            warehouse = %fixture.site().name,
            products = fixture.products().len(),
            "Warehouse fixture loaded"
        );

        let handler = Arc::new(WarehouseQueryHandler::new(
            fixture,
            Arc::new(SystemClock),
            Arc::new(TracingLookupLog),
        ));
        let service = WarehouseServiceImpl::new(handler);

        let reflection_service = build_reflection(vec![FILE_DESCRIPTOR_SET])?;

        Ok(server
            .add_service(service.into_server())
            .add_service(reflection_service))
    })
    .await
}
