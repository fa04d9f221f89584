//! Interfaces at the seams of the consignment service.
//!
//! The service holds both collaborators as `Arc<dyn ...>`, so an in-process actor, a
//! remote stub or a test double can stand behind either one.

use crate::consignment_actor::ConsignmentError;
use crate::model::{Consignment, FindAvailableResponse, Specification};
use crate::vessel_actor::VesselError;
use async_trait::async_trait;

/// Ownership boundary around the stored consignments.
///
/// Implementations append in call order and never merge or deduplicate, so N successful
/// `create` calls leave N more entries behind.
#[async_trait]
pub trait ConsignmentRepository: Send + Sync {
    /// Append one consignment and return it as stored.
    async fn create(&self, consignment: Consignment) -> Result<Consignment, ConsignmentError>;

    /// Every stored consignment in insertion order. The result is a copy.
    async fn get_all(&self) -> Result<Vec<Consignment>, ConsignmentError>;
}

/// Client of the vessel capability service.
///
/// Which vessel is picked when several qualify is up to the service behind this trait.
#[async_trait]
pub trait VesselQuery: Send + Sync {
    /// Ask for one vessel that can carry `spec`.
    async fn find_available(&self, spec: Specification) -> Result<FindAvailableResponse, VesselError>;
}
