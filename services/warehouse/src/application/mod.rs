//! Application layer

pub mod handler;
pub mod lookup_log;
pub mod queries;

pub use handler::WarehouseQueryHandler;
pub use lookup_log::{LookupLog, SilentLookupLog, TracingLookupLog};
pub use queries::*;
