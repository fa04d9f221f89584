//! Request and reply shapes of the consignment service's inbound operations.

use crate::model::Consignment;
use serde::{Deserialize, Serialize};

/// Reply to a successful create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateResponse {
    pub created: bool,
    pub consignment: Consignment,
}

/// Empty marker for the list operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRequest;

/// Reply to the list operation, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResponse {
    pub consignments: Vec<Consignment>,
}
