//! Stock service: name uniqueness on create, capacity ceiling on increment.

pub mod error;
mod service;

pub use error::*;
pub use service::StockService;
