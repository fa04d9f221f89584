//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a collection of records.
//! It implements the "Server" side of the Actor Model: messages are processed one at a
//! time, so the collection needs no lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns an ordered, append-only collection.
///
/// ## ResourceActor
///
/// The `ResourceActor<T>` is the single writer for its collection. Every `Create`,
/// `List` and `Find` arrives over one mpsc channel and is handled to completion before
/// the next message is read. This gives two guarantees without any `Mutex`:
///
/// * **No lost appends** – concurrent callers are serialized by the channel, so after
///   N successful creates the collection holds exactly N records.
/// * **Consistent snapshots** – a `List` never observes a half-finished append.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client freely; the actor stops once every clone is dropped.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Tag { id: u64, label: String }
/// #[derive(Debug, thiserror::Error)] #[error("blank tag")] struct TagError;
///
/// impl ActorEntity for Tag {
///     type Id = u64;
///     type Create = String;
///     type Query = String;
///     type Error = TagError;
///
///     fn from_create_params(seq: u64, label: String) -> Result<Self, Self::Error> {
///         if label.trim().is_empty() { return Err(TagError); }
///         Ok(Self { id: seq, label })
///     }
///     fn id(&self) -> &u64 { &self.id }
///     fn matches(&self, label: &String) -> bool { &self.label == label }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run());
///
///     client.create("urgent".to_string()).await.unwrap();
///     client.create("fragile".to_string()).await.unwrap();
///
///     let all = client.list().await.unwrap();
///     assert_eq!(all.len(), 2);
///     let found = client.find("fragile".to_string()).await.unwrap();
///     assert_eq!(found.unwrap().id, 2);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_seq: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_seq: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Consignment" instead of "shippy::model::consignment::Consignment")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let seq = self.next_seq;
                    self.next_seq += 1;

                    match T::from_create_params(seq, params) {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len() + 1, "Created");
                            self.store.push(item.clone());
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Find { query, respond_to } => {
                    let item = self.store.iter().find(|item| item.matches(&query)).cloned();
                    match &item {
                        Some(found) => debug!(entity_type, ?query, id = %found.id(), "Find"),
                        None => debug!(entity_type, ?query, "Find: no match"),
                    }
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
