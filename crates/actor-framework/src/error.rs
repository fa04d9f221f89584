//! # Framework Errors
//!
//! Errors raised by the plumbing between a `ResourceClient` and its `ResourceActor`,
//! plus a wrapper carrying an entity's own rejection reason back to the caller.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
