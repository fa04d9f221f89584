use crate::clients::{ConsignmentClient, ConsignmentRepository, VesselClient, VesselQuery};
use crate::config::ShippingConfig;
use crate::registry::{RegistryError, ServiceRegistry};
use crate::service::ConsignmentService;
use crate::vessel_actor::VesselError;
use crate::{consignment_actor, vessel_actor};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to register fleet: {0}")]
    Fleet(#[from] VesselError),

    #[error("Failed to wire services: {0}")]
    Registry(#[from] RegistryError),
}

/// The running shipping system: both actors, the registry and the wired service.
///
/// Startup order:
/// 1. spawn the vessel actor, register the configured fleet with it, and publish it
///    under the vessel service name;
/// 2. spawn the consignment actor;
/// 3. resolve the vessel service *by name*, build the [`ConsignmentService`] over both,
///    and publish it under the consignment service name.
pub struct ShippingSystem {
    pub registry: Arc<ServiceRegistry>,
    pub consignment_service: Arc<ConsignmentService>,
    pub vessel_client: VesselClient,
    consignment_client: ConsignmentClient,
    handles: Vec<JoinHandle<()>>,
}

impl ShippingSystem {
    #[instrument(skip(config), fields(
        consignment_service = %config.consignment_service,
        vessel_service = %config.vessel_service
    ))]
    pub async fn start(config: &ShippingConfig) -> Result<Self, LifecycleError> {
        let registry = Arc::new(ServiceRegistry::new());

        let (vessel_actor, vessel_client) = vessel_actor::new(config.channel_buffer);
        let vessel_handle = tokio::spawn(vessel_actor.run());

        for params in &config.fleet {
            let vessel = vessel_client.create_vessel(params.clone()).await?;
            info!(vessel_id = %vessel.id, name = %vessel.name, "Vessel registered");
        }
        registry.register::<dyn VesselQuery>(
            config.vessel_service.clone(),
            Arc::new(vessel_client.clone()),
        );

        let (consignment_actor, consignment_client) =
            consignment_actor::new(config.channel_buffer);
        let consignment_handle = tokio::spawn(consignment_actor.run());

        let vessels = registry.resolve::<dyn VesselQuery>(&config.vessel_service)?;
        let repository: Arc<dyn ConsignmentRepository> = Arc::new(consignment_client.clone());
        let consignment_service = Arc::new(
            ConsignmentService::new(repository, vessels).with_query_timeout(config.query_timeout()),
        );
        registry.register::<ConsignmentService>(
            config.consignment_service.clone(),
            consignment_service.clone(),
        );

        info!(fleet = config.fleet.len(), "Shipping system started");
        Ok(Self {
            registry,
            consignment_service,
            vessel_client,
            consignment_client,
            handles: vec![vessel_handle, consignment_handle],
        })
    }

    /// Stop both actors and wait for them to drain.
    ///
    /// Every handle this system gave out must be dropped first; an actor only stops
    /// once the last client clone for it is gone.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shipping system");

        self.registry.clear();
        drop(self.consignment_service);
        drop(self.vessel_client);
        drop(self.consignment_client);

        for handle in self.handles {
            handle
                .await
                .map_err(|e| format!("Actor task failed: {e}"))?;
        }

        info!("Shipping system stopped");
        Ok(())
    }
}
