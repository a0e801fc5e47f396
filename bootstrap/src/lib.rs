//! bootstrap - 统一服务启动骨架
//!
//! 配置加载、日志初始化、健康检查、metrics 与 graceful shutdown

mod health;
mod metrics;
mod reflection;
mod runtime;
mod shutdown;
mod starter;

pub use health::*;
pub use self::metrics::*;
pub use reflection::*;
pub use runtime::*;
pub use shutdown::*;
pub use starter::*;
