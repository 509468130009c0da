//! System orchestration, startup, and shutdown logic.

pub mod error;
pub mod stock_system;
pub mod telemetry;

pub use error::*;
pub use stock_system::*;
pub use telemetry::*;
