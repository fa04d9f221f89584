//! [`ActorEntity`] implementation for [`Consignment`].
//!
//! The store keeps a caller-supplied identifier as is and only fills in
//! `consignment-<seq>` when it is empty. Identical payloads are stored twice.
//! A consignment without a vessel is refused, so the collection never holds one.

use crate::consignment_actor::ConsignmentError;
use crate::model::Consignment;
use actor_framework::ActorEntity;

impl ActorEntity for Consignment {
    type Id = String;
    type Create = Consignment;
    type Query = String;
    type Error = ConsignmentError;

    fn from_create_params(seq: u64, mut params: Consignment) -> Result<Self, Self::Error> {
        if params.id.trim().is_empty() {
            params.id = format!("consignment-{seq}");
        }
        if !params.has_vessel() {
            return Err(ConsignmentError::UnassignedVessel(params.id));
        }
        Ok(params)
    }

    fn id(&self) -> &String {
        &self.id
    }

    /// Matches consignments carried by the given vessel.
    fn matches(&self, vessel_id: &String) -> bool {
        self.vessel_id.as_ref() == Some(vessel_id)
    }
}
