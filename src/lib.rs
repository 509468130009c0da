//! # Beer Stock
//!
//! Inventory service for a beer catalog: create, look up by name, list,
//! delete and restock beers, on top of an in-memory record store actor.
//!
//! ## Layout
//!
//! - **Records** - [`Beer`] as stored, [`BeerDto`] at the boundary, converted
//!   by a [`BeerMapper`]
//! - **Store** - a generic [`ResourceActor`] holding the records, reached
//!   through the [`BeerStore`] client
//! - **Service** - [`StockService`] enforces unique names on create and the
//!   `max` ceiling on increment
//! - **System** - [`StockSystem`] starts the store, wires the service and
//!   shuts everything down; [`setup_tracing`] configures logging
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use beer_stock::{BeerDto, BeerType, StockConfig, StockSystem};
//!
//! let system = StockSystem::new(&StockConfig::default());
//! let brahma = system
//!     .stock_service
//!     .create(BeerDto::new("Brahma", "Ambev", 50, 10, BeerType::Lager))
//!     .await?;
//! if let Some(id) = brahma.id {
//!     system.stock_service.increment(id, 10).await?;
//! }
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod config;
pub mod domain;
pub mod mapper;
pub mod stock;
pub mod store;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod mock_framework;

pub use actor_framework::{Entity, FrameworkError, ResourceActor, ResourceClient};
pub use app_system::{setup_tracing, StockSystem, SystemError};
pub use config::{ConfigError, StockConfig};
pub use domain::{Beer, BeerDto, BeerId, BeerType};
pub use mapper::{BeerMapper, DefaultBeerMapper};
pub use stock::{Lookup, StockError, StockService};
pub use store::BeerStore;
