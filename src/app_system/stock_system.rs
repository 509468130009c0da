use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use super::SystemError;
use crate::config::StockConfig;
use crate::mapper::{BeerMapper, DefaultBeerMapper};
use crate::stock::StockService;
use crate::store::{self, BeerStore};

/// Owns the running store actor and hands out the stock service.
///
/// Must be created inside a tokio runtime.
pub struct StockSystem<M: BeerMapper = DefaultBeerMapper> {
    pub stock_service: StockService<M>,
    pub store: BeerStore,
    handles: Vec<JoinHandle<()>>,
}

impl StockSystem {
    pub fn new(config: &StockConfig) -> Self {
        Self::with_mapper(config, DefaultBeerMapper)
    }
}

impl<M: BeerMapper> StockSystem<M> {
    /// Starts the store actor, then wires the service on top of it.
    #[instrument(name = "stock_system", skip(config, mapper), fields(store_buffer = config.store_buffer))]
    pub fn with_mapper(config: &StockConfig, mapper: M) -> Self {
        info!("Starting stock system");

        let (store_actor, store) = store::new(config.store_buffer);
        let store_handle = tokio::spawn(store_actor.run());

        let stock_service = StockService::new(store.clone(), mapper);

        info!("Stock system started");

        Self {
            stock_service,
            store,
            handles: vec![store_handle],
        }
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// The store actor only stops once every clone of the service and store
    /// is gone, so callers must drop their own clones first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down stock system");

        drop(self.stock_service);
        drop(self.store);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Stock system shutdown complete");
        Ok(())
    }
}
