use tracing::{debug, error, info, instrument, warn};

use super::error::{Lookup, StockError};
use crate::actor_framework::FrameworkError;
use crate::domain::{BeerDto, BeerId};
use crate::mapper::{BeerMapper, DefaultBeerMapper};
use crate::store::BeerStore;

/// Stock operations over the beer record store.
///
/// Each operation is at most one store read followed by at most one store
/// write. Nothing serializes that pair, so concurrent callers can interleave:
/// two creates for one name may both pass the uniqueness check, and two
/// increments on one id may both read the same quantity. Saves replace the
/// whole record, so the later increment overwrites the earlier one.
#[derive(Clone)]
pub struct StockService<M: BeerMapper = DefaultBeerMapper> {
    store: BeerStore,
    mapper: M,
}

impl<M: BeerMapper> StockService<M> {
    pub fn new(store: BeerStore, mapper: M) -> Self {
        Self { store, mapper }
    }

    /// Registers a new beer. The store assigns the id; any id on `dto` is
    /// discarded.
    ///
    /// # Errors
    /// - [`StockError::InvalidQuantity`] when `quantity > max`; the store is
    ///   not consulted
    /// - [`StockError::DuplicateName`] when a beer with the same name exists
    #[instrument(fields(beer_name = %dto.name), skip(self, dto))]
    pub async fn create(&self, dto: BeerDto) -> Result<BeerDto, StockError> {
        debug!("Processing create request");

        let mut beer = self.mapper.to_record(dto);
        beer.id = None;

        if beer.quantity > beer.max {
            warn!(quantity = beer.quantity, max = beer.max, "Initial quantity above max");
            return Err(StockError::InvalidQuantity {
                name: beer.name,
                quantity: beer.quantity,
                max: beer.max,
            });
        }

        if self.store.find_by_name(&beer.name).await?.is_some() {
            warn!("Beer already registered");
            return Err(StockError::DuplicateName(beer.name));
        }

        let saved = self.store.save(beer).await?;
        info!(beer_id = ?saved.id, "Beer created");
        Ok(self.mapper.to_dto(saved))
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<BeerDto, StockError> {
        debug!("Processing find_by_name request");

        match self.store.find_by_name(name).await? {
            Some(beer) => Ok(self.mapper.to_dto(beer)),
            None => {
                debug!("Beer not found");
                Err(StockError::NotFound(Lookup::Name(name.to_owned())))
            }
        }
    }

    /// Every stored beer, in store order. An empty store is not an error.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<BeerDto>, StockError> {
        debug!("Processing list_all request");

        let beers = self.store.find_all().await?;
        info!(beer_count = beers.len(), "Listed beers");
        Ok(beers.into_iter().map(|beer| self.mapper.to_dto(beer)).collect())
    }

    /// Deletes a beer after confirming it exists. A missing id never reaches
    /// the store's delete.
    #[instrument(fields(beer_id = %id), skip(self, id))]
    pub async fn delete_by_id(&self, id: BeerId) -> Result<(), StockError> {
        debug!("Processing delete_by_id request");

        if self.store.find_by_id(id).await?.is_none() {
            warn!("Beer not found for deletion");
            return Err(StockError::NotFound(Lookup::Id(id)));
        }

        self.store.delete_by_id(id).await.map_err(|e| match e {
            // Removed by someone else between the check and the delete.
            FrameworkError::NotFound(_) => StockError::NotFound(Lookup::Id(id)),
            other => other.into(),
        })?;

        info!("Beer deleted");
        Ok(())
    }

    /// Adds `amount` to the beer's quantity, refusing to pass its `max`.
    ///
    /// # Errors
    /// - [`StockError::NotFound`] when no beer has this id
    /// - [`StockError::CapacityExceeded`] when `quantity + amount > max`; the
    ///   stored quantity is left untouched
    #[instrument(fields(beer_id = %id), skip(self, id))]
    pub async fn increment(&self, id: BeerId, amount: u32) -> Result<BeerDto, StockError> {
        debug!("Processing increment request");

        let mut beer = match self.store.find_by_id(id).await? {
            Some(beer) => beer,
            None => {
                warn!("Beer not found for increment");
                return Err(StockError::NotFound(Lookup::Id(id)));
            }
        };

        let Some(candidate) = beer.stock_after(amount) else {
            error!(current = beer.quantity, max = beer.max, "Increment exceeds max stock capacity");
            return Err(StockError::CapacityExceeded {
                id,
                current: beer.quantity,
                requested: amount,
                max: beer.max,
            });
        };

        beer.quantity = candidate;
        let saved = self.store.save(beer).await?;
        info!(quantity = saved.quantity, "Stock incremented");
        Ok(self.mapper.to_dto(saved))
    }
}
