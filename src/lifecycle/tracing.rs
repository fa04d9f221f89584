//! # Logging
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber. Levels come from
//! `RUST_LOG` and default to `info` when it is unset or unparsable.
//!
//! ```bash
//! RUST_LOG=info cargo run              # one line per consignment and vessel decision
//! RUST_LOG=debug cargo run             # full payloads at each entry point
//! RUST_LOG=shippy::service=debug,info cargo run
//! ```
//!
//! The format is compact and hides module paths; actor logs carry an `entity_type`
//! field instead. With `RUST_LOG=info` a successful create reads:
//!
//! ```text
//! INFO create_consignment_cancellable{weight=55000 containers=3}: Found vessel vessel_id="vessel-1" name="Boaty McBoatface"
//! INFO Created entity_type="Consignment" id="consignment-1" size=1
//! INFO create_consignment_cancellable{weight=55000 containers=3}: Consignment created id="consignment-1"
//! ```
//!
//! and a consignment no vessel can carry ends with a single warning and nothing stored:
//!
//! ```text
//! WARN create_consignment_cancellable{weight=900000 containers=2}: No vessel assigned, consignment not stored error=No vessel available for max_weight=900000, capacity=2
//! ```
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .try_init();
}
