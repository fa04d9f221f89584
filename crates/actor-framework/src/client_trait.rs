//! # ActorClient Trait
//!
//! Provides a common interface for domain clients, adding default `list` and `find`
//! methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the read operations of a collection.
///
/// Implementors supply the inner `ResourceClient` and a mapping from framework errors to
/// their own error type; `list` and `find` come for free.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Crate { id: u64, weight: u32 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct CrateError(String);
///
/// impl ActorEntity for Crate {
///     type Id = u64;
///     type Create = u32;
///     type Query = u32;
///     type Error = CrateError;
///
///     fn from_create_params(seq: u64, weight: u32) -> Result<Self, Self::Error> {
///         Ok(Self { id: seq, weight })
///     }
///     fn id(&self) -> &u64 { &self.id }
///     fn matches(&self, max: &u32) -> bool { self.weight <= *max }
/// }
///
/// struct CrateClient { inner: ResourceClient<Crate> }
///
/// #[async_trait]
/// impl ActorClient<Crate> for CrateClient {
///     type Error = CrateError;
///
///     fn inner(&self) -> &ResourceClient<Crate> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> Self::Error { CrateError(e.to_string()) }
/// }
///
/// async fn usage(client: CrateClient) {
///     // list() and find() are provided automatically!
///     let _ = client.list().await;
///     let _ = client.find(100).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Snapshot of the whole collection in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// First record matching the query, if any.
    #[tracing::instrument(skip(self))]
    async fn find(&self, query: T::Query) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find(query).await.map_err(Self::map_error)
    }
}
