//! # Actor Framework
//!
//! Building blocks for collections that are owned by exactly one task. A
//! [`ResourceActor`] holds an ordered, append-only `Vec` of records and serves three
//! requests over a channel: append one, list all, find the first match. Callers talk to
//! it through a cloneable [`ResourceClient`].
//!
//! ## Why an actor instead of a lock?
//!
//! Shared mutable state needs one mutual-exclusion discipline. Here that discipline is
//! the channel: the actor drains it one message at a time, so
//!
//! - concurrent appends never interleave and never get lost,
//! - a listing is always a complete snapshot taken between two appends,
//! - the caller gets a copy, so nothing outside the actor can mutate the collection,
//! - no caller can hold the collection "locked" while it awaits something else.
//!
//! The last point matters for orchestrators: whatever slow work precedes an append (a
//! remote query, for instance) happens in the caller's task, and the actor is only busy
//! for the duration of the push itself.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - identifier assignment, payload validation, query matching
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop and the collection
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Parcel { id: String, kilos: u32 }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("parcel too heavy: {0} kg")]
//! struct TooHeavy(u32);
//!
//! impl ActorEntity for Parcel {
//!     type Id = String;
//!     type Create = u32;
//!     type Query = u32;
//!     type Error = TooHeavy;
//!
//!     fn from_create_params(seq: u64, kilos: u32) -> Result<Self, Self::Error> {
//!         if kilos > 1_000 { return Err(TooHeavy(kilos)); }
//!         Ok(Self { id: format!("parcel-{seq}"), kilos })
//!     }
//!     fn id(&self) -> &String { &self.id }
//!     fn matches(&self, min: &u32) -> bool { self.kilos >= *min }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Parcel>::new(16);
//!     let handle = tokio::spawn(actor.run());
//!
//!     client.create(12).await.unwrap();
//!     assert!(client.create(5_000).await.is_err());
//!     client.create(40).await.unwrap();
//!
//!     let all = client.list().await.unwrap();
//!     assert_eq!(all.iter().map(|p| p.kilos).collect::<Vec<_>>(), vec![12, 40]);
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module scripts replies for a `ResourceClient` without an actor behind it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
