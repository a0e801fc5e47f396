//! API layer - gRPC service implementations

mod grpc_service;
mod proto_converters;

pub use grpc_service::{SERVICE_NAME, WarehouseServiceImpl};
pub use proto_converters::{product_to_proto, warehouse_data_to_proto};
