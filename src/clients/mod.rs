//! Typed wrappers around [`ResourceClient`](actor_framework::ResourceClient) and the
//! traits the consignment service depends on.

pub mod consignment_client;
pub mod traits;
pub mod vessel_client;

pub use consignment_client::*;
pub use traits::*;
pub use vessel_client::*;
