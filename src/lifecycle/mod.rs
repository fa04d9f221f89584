//! # System Lifecycle
//!
//! Starting, wiring and stopping the actors behind the shipping services.
//!
//! Each actor is created without dependencies and spawned on its own task. Wiring
//! happens afterwards through the [`ServiceRegistry`](crate::registry::ServiceRegistry):
//! the vessel capability service is published under its logical name, and the
//! consignment service is built from whatever is registered under that name rather than
//! from a direct reference.
//!
//! ```rust,ignore
//! let system = ShippingSystem::start(&ShippingConfig::default()).await?;
//!
//! let service = system
//!     .registry
//!     .resolve::<ConsignmentService>(CONSIGNMENT_SERVICE)?;
//! service.create_consignment(consignment).await?;
//!
//! drop(service);
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! 1. The registry is cleared and every client the system owns is dropped.
//! 2. Each actor sees its channel close, logs its final size and returns.
//! 3. [`ShippingSystem::shutdown`] awaits both tasks.
//!
//! Handles resolved from the registry keep their actor alive until they are dropped,
//! so callers release them before calling `shutdown`.

pub mod shipping_system;
pub mod tracing;

pub use shipping_system::*;
pub use tracing::*;
