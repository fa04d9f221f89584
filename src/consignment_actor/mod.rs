//! # Consignment Actor
//!
//! The in-memory backend of the consignment repository. One [`ResourceActor`] task owns
//! the ordered collection; every append and every listing is a message it handles in
//! turn, which is the only mutual-exclusion boundary around the collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Consignment`]
//! - [`error`] - [`ConsignmentError`], shared by the repository and the service
//! - [`new()`] - Factory function that creates the actor and its repository client
//!
//! ## Usage
//!
//! ```rust
//! use shippy::clients::ConsignmentRepository;
//! use shippy::consignment_actor;
//! use shippy::model::Consignment;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, repository) = consignment_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let mut consignment = Consignment::new("books", 120, vec![]);
//!     consignment.vessel_id = Some("vessel-1".to_string());
//!     let stored = repository.create(consignment).await?;
//!     assert_eq!(stored.id, "consignment-1");
//!     assert_eq!(repository.get_all().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ConsignmentClient;
use crate::model::Consignment;
use actor_framework::ResourceActor;

/// Creates a new Consignment actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Consignment>, ConsignmentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ConsignmentClient::new(generic_client))
}
