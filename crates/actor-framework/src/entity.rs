//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type implements to be held by a
//! `ResourceActor`. It names the identifier, the creation payload, the selection
//! criteria used by `Find`, and the error the entity raises when it rejects a payload.
//!
//! # Architecture Note
//! The actor only knows how to append, snapshot and scan. Everything that is specific
//! to a record (how an identifier is assigned, what makes a payload acceptable, what
//! "matches a query" means) lives in the entity. That keeps the message loop identical
//! for every collection in the system.
//!
//! # Sequence numbers
//! Each actor counts successful and failed creates alike and hands the next number to
//! [`ActorEntity::from_create_params`]. Entities typically use it to build an identifier
//! when the caller did not supply one. Numbers start at 1 and are never reused.

use std::fmt::{Debug, Display};

/// Trait that any record must implement to be stored by a `ResourceActor`.
///
/// # Example
///
/// ```rust
/// use actor_framework::ActorEntity;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: String, text: String }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("empty note")]
/// struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = String;
///     type Create = String;
///     type Query = String;
///     type Error = NoteError;
///
///     fn from_create_params(seq: u64, text: String) -> Result<Self, Self::Error> {
///         if text.is_empty() {
///             return Err(NoteError);
///         }
///         Ok(Self { id: format!("note-{seq}"), text })
///     }
///
///     fn id(&self) -> &String { &self.id }
///
///     fn matches(&self, needle: &String) -> bool { self.text.contains(needle.as_str()) }
/// }
/// ```
pub trait ActorEntity: Clone + Send + Sync + Debug + 'static {
    /// The identifier used in logs (e.g., String, u64).
    type Id: Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record.
    type Create: Send + Debug;

    /// Selection criteria evaluated by [`ActorEntity::matches`].
    type Query: Send + Sync + Debug;

    /// The error raised when a creation payload is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the stored record from the payload.
    ///
    /// Returning an error leaves the collection untouched.
    fn from_create_params(seq: u64, params: Self::Create) -> Result<Self, Self::Error>;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this record satisfies the query.
    fn matches(&self, query: &Self::Query) -> bool;
}
