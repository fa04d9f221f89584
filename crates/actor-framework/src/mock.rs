//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of by an actor. It lets you test code that sits
//! *around* a client (typed wrappers, orchestrators) without spawning the actor, and
//! makes failures such as a closed actor trivial to inject.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Scripted replies | Real collection state |
//! | **Use Case** | Logic around the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Requires a rejecting payload |
//!
//! ## Fluent expectations
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug, PartialEq)] struct Berth { id: u64, length: u32 }
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct BerthError;
//!
//! impl ActorEntity for Berth {
//!     type Id = u64; type Create = u32; type Query = u32; type Error = BerthError;
//!     fn from_create_params(seq: u64, length: u32) -> Result<Self, Self::Error> {
//!         Ok(Self { id: seq, length })
//!     }
//!     fn id(&self) -> &u64 { &self.id }
//!     fn matches(&self, min: &u32) -> bool { self.length >= *min }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Berth>::new();
//!     mock.expect_find().return_ok(Some(Berth { id: 7, length: 300 }));
//!     mock.expect_list().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.find(250).await.unwrap().unwrap().id, 7);
//!     assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Receiver helpers
//!
//! [`create_mock_client`] returns the client together with the raw receiver. Drive the
//! call from a spawned task, then use [`expect_create`], [`expect_list`] or
//! [`expect_find`] to inspect the request and answer it by hand. This is the right tool
//! when the test needs to assert on the payload that was sent.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for the next request of the matching kind.
enum Expectation<T: ActorEntity> {
    Create { response: Result<T, FrameworkError> },
    List { response: Result<Vec<T>, FrameworkError> },
    Find { response: Result<Option<T>, FrameworkError> },
}

type ExpectationQueue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does
/// not match the next expectation, or arrives when none is left, panics the background
/// task; the caller then sees [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: ExpectationQueue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: ExpectationQueue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Find { respond_to, .. },
                        Some(Expectation::Find { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Find {
            response,
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder that queues the reply for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: ExpectationQueue<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: ExpectationQueue<T>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .expect("expectation queue poisoned")
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Nothing answers the requests until the test pulls them off the receiver with one of
/// the `expect_*` helpers below.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Pallet {
        id: String,
        weight: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Pallet error")]
    struct PalletError;

    impl ActorEntity for Pallet {
        type Id = String;
        type Create = u32;
        type Query = u32;
        type Error = PalletError;

        fn from_create_params(seq: u64, weight: u32) -> Result<Self, Self::Error> {
            Ok(Self {
                id: format!("pallet-{seq}"),
                weight,
            })
        }

        fn id(&self) -> &String {
            &self.id
        }

        fn matches(&self, max_weight: &u32) -> bool {
            self.weight <= *max_weight
        }
    }

    fn pallet(id: &str, weight: u32) -> Pallet {
        Pallet {
            id: id.to_string(),
            weight,
        }
    }

    #[tokio::test]
    async fn test_mock_client_receiver_helpers() {
        let (client, mut receiver) = create_mock_client::<Pallet>(10);

        let create_task = tokio::spawn(async move { client.create(120).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload, 120);
        responder.send(Ok(pallet("pallet-1", 120))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap().id, "pallet-1");
    }

    #[tokio::test]
    async fn test_find_helper_exposes_query() {
        let (client, mut receiver) = create_mock_client::<Pallet>(10);

        let find_task = tokio::spawn(async move { client.find(500).await });

        let (query, responder) = expect_find(&mut receiver)
            .await
            .expect("Expected Find request");
        assert_eq!(query, 500);
        responder.send(Ok(None)).unwrap();

        assert!(find_task.await.unwrap().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Pallet>::new();

        mock.expect_create().return_ok(pallet("pallet-1", 80));
        mock.expect_list()
            .return_ok(vec![pallet("pallet-1", 80), pallet("pallet-2", 90)]);
        mock.expect_find().return_err(FrameworkError::ActorClosed);

        let client = mock.client();

        let created = client.create(80).await.unwrap();
        assert_eq!(created.id, "pallet-1");

        let listed = client.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].id, "pallet-2");

        let found = client.find(100).await;
        assert!(matches!(found, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_reply() {
        let mut mock = MockClient::<Pallet>::new();
        mock.expect_list().return_ok(vec![]);

        let client = mock.client();
        let result = client.create(10).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
