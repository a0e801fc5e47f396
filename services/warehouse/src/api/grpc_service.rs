//! gRPC service implementation

use bootstrap::RequestTimer;
use std::sync::Arc;
use tonic::{Request, Response, Status};

use crate::application::{GetWarehouseDataQuery, WarehouseQueryHandler};
use crate::proto::warehouse_service_server::{WarehouseService, WarehouseServiceServer};
use crate::proto::{WarehouseRequest, WarehouseResponse};

use super::proto_converters::warehouse_data_to_proto;

/// metrics 中使用的服务名
pub const SERVICE_NAME: &str = "warehouse.WarehouseService";

pub struct WarehouseServiceImpl {
    handler: Arc<WarehouseQueryHandler>,
}

impl WarehouseServiceImpl {
    pub fn new(handler: Arc<WarehouseQueryHandler>) -> Self {
        Self { handler }
    }

    /// 包装为可注册到 tonic Server 的服务
    pub fn into_server(self) -> WarehouseServiceServer<Self> {
        WarehouseServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl WarehouseService for WarehouseServiceImpl {
    async fn get_warehouse_data(
        &self,
        request: Request<WarehouseRequest>,
    ) -> Result<Response<WarehouseResponse>, Status> {
        let timer = RequestTimer::new(SERVICE_NAME, "GetWarehouseData");

        let req = request.into_inner();
        let data = self.handler.handle(GetWarehouseDataQuery::new(req.uuid));

        timer.finish("ok");
        Ok(Response::new(warehouse_data_to_proto(data)))
    }
}
