//! Pure data structures (DTOs) shared by the actors, clients and the service.

pub mod consignment;
pub mod response;
pub mod vessel;

pub use consignment::*;
pub use response::*;
pub use vessel::*;
