//! warehouse-service - 仓库数据 gRPC 服务

pub mod api;
pub mod application;
pub mod config;
pub mod domain;

// 引入生成的 proto 代码
pub mod proto {
    tonic::include_proto!("warehouse");
}

pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("warehouse_descriptor");
