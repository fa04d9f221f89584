use crate::model::Specification;
use serde::{Deserialize, Serialize};

/// A shipment record.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](actor_framework::ResourceActor).
/// See [`crate::consignment_actor`] for identifier assignment and the stored invariant.
///
/// Every field is optional on input, so a partially filled JSON description still
/// deserializes. `vessel_id` is absent until a vessel has been matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consignment {
    pub id: String,
    pub description: String,
    pub weight: u32,
    pub containers: Vec<Container>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel_id: Option<String>,
}

/// A unit of cargo. Each container takes one slot on a vessel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    pub id: String,
    pub customer_id: String,
    pub origin: String,
    pub user_id: String,
}

impl Consignment {
    /// Creates an unassigned consignment with an empty identifier.
    pub fn new(description: impl Into<String>, weight: u32, containers: Vec<Container>) -> Self {
        Self {
            id: String::new(),
            description: description.into(),
            weight,
            containers,
            vessel_id: None,
        }
    }

    /// The vessel requirement for this consignment: it must carry the full weight and
    /// offer one slot per container.
    pub fn specification(&self) -> Specification {
        Specification {
            max_weight: self.weight,
            capacity: u32::try_from(self.containers.len()).unwrap_or(u32::MAX),
        }
    }

    /// Whether a non-blank vessel identifier has been stamped on this consignment.
    pub fn has_vessel(&self) -> bool {
        self.vessel_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }
}

impl Container {
    pub fn new(id: impl Into<String>, customer_id: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            origin: origin.into(),
            user_id: String::new(),
        }
    }
}
