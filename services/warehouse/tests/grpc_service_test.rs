//! gRPC 端到端测试：本地回环 tonic 服务器 + 生成的客户端

use std::net::SocketAddr;
use std::sync::Arc;

use bootstrap::{HealthChecker, ShutdownController, bind_listener, build_reflection, serve_grpc};
use chrono::NaiveDate;
use tonic::transport::{Channel, Server};

use warehouse_service::FILE_DESCRIPTOR_SET;
use warehouse_service::api::WarehouseServiceImpl;
use warehouse_service::application::{SilentLookupLog, WarehouseQueryHandler};
use warehouse_service::domain::{Clock, FixedClock, SystemClock, WarehouseFixture};
use warehouse_service::proto::WarehouseRequest;
use warehouse_service::proto::warehouse_service_client::WarehouseServiceClient;

struct TestServer {
    addr: SocketAddr,
    shutdown: ShutdownController,
    handle: tokio::task::JoinHandle<Result<(), tonic::transport::Error>>,
}

impl TestServer {
    async fn start(clock: Arc<dyn Clock>) -> Self {
        let handler = Arc::new(WarehouseQueryHandler::new(
            WarehouseFixture::reference(),
            clock,
            Arc::new(SilentLookupLog),
        ));
        let router = Server::builder()
            .add_service(WarehouseServiceImpl::new(handler).into_server())
            .add_service(build_reflection(vec![FILE_DESCRIPTOR_SET]).unwrap());

        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = ShutdownController::new();
        let signal = shutdown.clone();
        let handle = tokio::spawn(async move {
            let health = HealthChecker::new();
            serve_grpc(router, listener, &health, signal.wait()).await
        });

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    async fn client(&self) -> WarehouseServiceClient<Channel> {
        WarehouseServiceClient::connect(format!("http://{}", self.addr))
            .await
            .unwrap()
    }

    async fn stop(self) {
        self.shutdown.shutdown();
        self.handle.await.unwrap().unwrap();
    }
}

fn fixed_clock() -> Arc<dyn Clock> {
    let at = NaiveDate::from_ymd_opt(2024, 2, 20)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    Arc::new(FixedClock(at))
}

#[tokio::test]
async fn test_get_warehouse_data_over_the_wire() {
    let server = TestServer::start(fixed_clock()).await;
    let mut client = server.client().await;

    let response = client
        .get_warehouse_data(WarehouseRequest {
            uuid: "abc-123".to_string(),
        })
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.warehouse_id, "abc-123");
    assert_eq!(response.warehouse_name, "Linz Bahnhof");
    assert_eq!(response.warehouse_address, "WhoKnows Straße 12");
    assert_eq!(response.warehouse_postal_code, 4000);
    assert_eq!(response.warehouse_city, "Linz");
    assert_eq!(response.warehouse_country, "AUSTRIA");
    assert_eq!(response.timestamp, "2024-02-20T08:30");

    let names: Vec<_> = response
        .product_data
        .iter()
        .map(|p| p.product_name.as_str())
        .collect();
    assert_eq!(names, ["Brot", "Milch", "Kartoffeln"]);
    assert_eq!(response.product_data[1].product_quantity, 167);
    assert_eq!(response.product_data[0].product_unit, "500ML/Packung");

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_empty_uuid_over_the_wire() {
    let server = TestServer::start(Arc::new(SystemClock)).await;
    let mut client = server.client().await;

    let response = client
        .get_warehouse_data(WarehouseRequest::default())
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.warehouse_id, "");
    assert_eq!(response.product_data.len(), 3);
    assert!(!response.timestamp.is_empty());

    drop(client);
    server.stop().await;
}

#[tokio::test]
async fn test_concurrent_clients() {
    let server = TestServer::start(fixed_clock()).await;

    let mut calls = Vec::new();
    for i in 0..16 {
        let mut client = server.client().await;
        calls.push(tokio::spawn(async move {
            let uuid = format!("warehouse-{}", i);
            let response = client
                .get_warehouse_data(WarehouseRequest { uuid: uuid.clone() })
                .await
                .unwrap()
                .into_inner();
            (uuid, response)
        }));
    }

    let mut product_lists = Vec::new();
    for call in calls {
        let (uuid, response) = call.await.unwrap();
        assert_eq!(response.warehouse_id, uuid);
        product_lists.push(response.product_data);
    }
    assert!(product_lists.windows(2).all(|pair| pair[0] == pair[1]));

    server.stop().await;
}
