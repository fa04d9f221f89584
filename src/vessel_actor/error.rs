//! Error types for the vessel capability service.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while asking for, or registering, a vessel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VesselError {
    /// No vessel in the fleet satisfies the specification.
    #[error("No vessel available for max_weight={max_weight}, capacity={capacity}")]
    NoneAvailable { max_weight: u32, capacity: u32 },

    /// The query succeeded but the reply carried no vessel.
    #[error("Capability reply contained no vessel")]
    MissingVessel,

    /// The vessel in the reply, or a vessel being registered, is unusable.
    #[error("Invalid vessel: {0}")]
    InvalidVessel(String),

    /// The query did not complete in time.
    #[error("Vessel query timed out after {0:?}")]
    Timeout(Duration),

    /// The caller abandoned the request before the query completed.
    #[error("Vessel query cancelled")]
    Cancelled,

    /// The capability service could not be reached.
    #[error("Vessel service unreachable: {0}")]
    Unreachable(String),
}
