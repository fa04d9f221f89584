//! # Generic Messages
//!
//! This module defines the messages exchanged between a `ResourceClient` and a
//! `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// The collection is append-only, so there are exactly three operations:
///
/// - **Create**: validate the payload through [`ActorEntity::from_create_params`] and
///   append the result. Replies with the stored record.
/// - **List**: reply with a copy of the whole collection in insertion order.
/// - **Find**: reply with the first record for which [`ActorEntity::matches`] holds.
///
/// Because one task drains the channel, a `List` is answered either entirely before or
/// entirely after any given `Create`.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Find {
        query: T::Query,
        respond_to: Response<Option<T>>,
    },
}
