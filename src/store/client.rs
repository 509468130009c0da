use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Beer, BeerId};

/// Client for the beer record store.
///
/// Every method is a single round trip to the store actor. Nothing here
/// checks invariants; that is the stock service's job.
#[derive(Clone)]
pub struct BeerStore {
    inner: ResourceClient<Beer>,
}

impl BeerStore {
    pub fn new(inner: ResourceClient<Beer>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Beer>, FrameworkError> {
        debug!("Sending request");
        let name = name.to_owned();
        self.inner
            .find(Box::new(move |beer: &Beer| beer.name == name))
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: BeerId) -> Result<Option<Beer>, FrameworkError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Beer>, FrameworkError> {
        debug!("Sending request");
        self.inner.list().await
    }

    /// Persists `beer`, allocating an id when it has none yet.
    #[instrument(fields(beer_id = ?beer.id, beer_name = %beer.name), skip(self, beer))]
    pub async fn save(&self, beer: Beer) -> Result<Beer, FrameworkError> {
        debug!("Sending request");
        self.inner.save(beer).await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: BeerId) -> Result<(), FrameworkError> {
        debug!("Sending request");
        self.inner.delete(id).await
    }
}
