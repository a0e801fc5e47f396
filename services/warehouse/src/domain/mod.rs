//! Domain layer

pub mod clock;
pub mod entities;

pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use entities::{Product, WarehouseData, WarehouseFixture, WarehouseSite};
