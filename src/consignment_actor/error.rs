//! Error types for consignment operations.

use crate::vessel_actor::VesselError;
use thiserror::Error;

/// Errors that can occur while creating or listing consignments.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConsignmentError {
    /// No vessel could be assigned; nothing was stored.
    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(#[from] VesselError),

    /// A consignment reached the store without a vessel.
    #[error("Consignment {0} has no vessel assigned")]
    UnassignedVessel(String),

    /// The repository could not complete the operation.
    #[error("Storage error: {0}")]
    Storage(String),
}
