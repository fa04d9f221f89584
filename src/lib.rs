//! # Shippy
//!
//! Consignment shipping orchestration on top of a small resource-actor framework.
//!
//! A consignment is a batch of containers to be shipped. Creating one asks the vessel
//! capability service for a vessel that can carry its weight and container count,
//! stamps that vessel's identifier on it, and appends it to the consignment repository.
//! If no vessel comes back, for whatever reason, nothing is stored.
//!
//! ## Module Tour
//!
//! ### The Orchestrator ([`service`])
//! [`ConsignmentService`](service::ConsignmentService) owns the create and list
//! operations, including the timeout and cancellation of the outbound capability query.
//!
//! ### The Interfaces ([`clients`])
//! [`ConsignmentRepository`](clients::ConsignmentRepository) and
//! [`VesselQuery`](clients::VesselQuery) are the two seams the service depends on. The
//! actor-backed clients implement them; tests substitute their own.
//!
//! ### The Actors ([`consignment_actor`], [`vessel_actor`])
//! Concrete [`ActorEntity`](actor_framework::ActorEntity) implementations. Each
//! collection is owned by one task, so appends are serialized by its channel.
//!
//! ### Wiring ([`registry`], [`lifecycle`], [`config`])
//! Services are published and resolved by logical name (`shipping.consignment`,
//! `shipping.vessel`). [`ShippingSystem`](lifecycle::ShippingSystem) starts everything
//! from a [`ShippingConfig`](config::ShippingConfig).
//!
//! ### Data ([`model`], [`input`])
//! Plain serde types, and the JSON loader used by the command-line entry point.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- consignment.json --config shipping.toml
//! ```

pub mod clients;
pub mod config;
pub mod consignment_actor;
pub mod input;
pub mod lifecycle;
pub mod model;
pub mod registry;
pub mod service;
pub mod vessel_actor;
