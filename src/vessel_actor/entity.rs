//! [`ActorEntity`] implementation for [`Vessel`].
//!
//! Vessels are numbered `vessel-<seq>` in registration order, and `Find` answers with
//! the first registered vessel that satisfies the specification.

use crate::model::{Specification, Vessel, VesselCreate};
use crate::vessel_actor::VesselError;
use actor_framework::ActorEntity;

impl ActorEntity for Vessel {
    type Id = String;
    type Create = VesselCreate;
    type Query = Specification;
    type Error = VesselError;

    fn from_create_params(seq: u64, params: VesselCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(VesselError::InvalidVessel(
                "vessel name must not be blank".to_string(),
            ));
        }
        Ok(Self {
            id: format!("vessel-{seq}"),
            name: params.name,
            capacity: params.capacity,
            max_weight: params.max_weight,
            available: params.available,
            owner_id: params.owner_id,
        })
    }

    fn id(&self) -> &String {
        &self.id
    }

    fn matches(&self, spec: &Specification) -> bool {
        self.satisfies(spec)
    }
}
