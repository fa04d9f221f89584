//! # Vessel Actor
//!
//! An in-process vessel capability service. It holds the fleet in registration order
//! and answers capability queries with the first vessel that is available and large
//! enough. Consignment code never depends on that policy: it only sees the
//! [`VesselQuery`](crate::clients::VesselQuery) interface.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Vessel`]
//! - [`error`] - [`VesselError`], the capability failure taxonomy
//! - [`new()`] - Factory function that creates the actor and its client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::VesselClient;
use crate::model::Vessel;
use actor_framework::ResourceActor;

/// Creates a new Vessel actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Vessel>, VesselClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, VesselClient::new(generic_client))
}
