use serde::{Deserialize, Serialize};

/// A carrier owned by the vessel capability service.
///
/// The consignment side only ever reads `id` and `name`; the limits are used by the
/// capability service when it evaluates a [`Specification`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vessel {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub max_weight: u32,
    pub available: bool,
    #[serde(default)]
    pub owner_id: String,
}

/// Payload for registering a vessel in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselCreate {
    pub name: String,
    pub capacity: u32,
    pub max_weight: u32,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub owner_id: String,
}

fn default_available() -> bool {
    true
}

/// What a consignment needs from a vessel. Derived per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub max_weight: u32,
    pub capacity: u32,
}

/// Reply of a capability query.
///
/// A well-formed reply may still carry no vessel; callers must check before use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindAvailableResponse {
    pub vessel: Option<Vessel>,
}

impl VesselCreate {
    pub fn new(name: impl Into<String>, capacity: u32, max_weight: u32) -> Self {
        Self {
            name: name.into(),
            capacity,
            max_weight,
            available: true,
            owner_id: String::new(),
        }
    }
}

impl Vessel {
    /// Whether this vessel can take a consignment with the given requirement.
    pub fn satisfies(&self, spec: &Specification) -> bool {
        self.available && self.capacity >= spec.capacity && self.max_weight >= spec.max_weight
    }
}
