//! # Mock Framework
//!
//! Utilities for testing the stock service against a scripted store.
//!
//! Use [`create_mock_client`] to get a client and a receiver. The test then
//! plays the store: pull the next request with an `expect_*` helper, assert
//! on it, and answer through the returned responder. Because every store call
//! has to pass through the receiver, a test can also prove that a call was
//! never made.

use crate::actor_framework::{Entity, Filter, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message must be a Save request.
pub async fn expect_save<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Next message must be a Get request.
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be a Find request.
pub async fn expect_find<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Next message must be a List request.
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be a Delete request.
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Beer;
    use crate::fixtures::BeerDtoBuilder;
    use crate::mapper::{BeerMapper, DefaultBeerMapper};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Beer>(10);
        let beer = DefaultBeerMapper.to_record(BeerDtoBuilder::default().id(None).build());

        let save_task = tokio::spawn(async move { client.save(beer).await });

        let (item, responder) = expect_save(&mut receiver).await.expect("Expected Save request");
        assert_eq!(item.name, "Brahma");
        responder.send(Ok(Beer { id: Some(9), ..item })).unwrap();

        let saved = save_task.await.unwrap().unwrap();
        assert_eq!(saved.id, Some(9));
    }
}
