//! # Vessel Client
//!
//! Provides a high‑level API for the in-process vessel capability service and exposes it
//! through [`VesselQuery`].
use crate::clients::VesselQuery;
use crate::model::{FindAvailableResponse, Specification, Vessel, VesselCreate};
use crate::vessel_actor::VesselError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Vessel actor.
#[derive(Clone)]
pub struct VesselClient {
    inner: ResourceClient<Vessel>,
}

impl VesselClient {
    pub fn new(inner: ResourceClient<Vessel>) -> Self {
        Self { inner }
    }

    /// Register a vessel in the fleet.
    #[instrument(skip(self))]
    pub async fn create_vessel(&self, params: VesselCreate) -> Result<Vessel, VesselError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Vessel> for VesselClient {
    type Error = VesselError;

    fn inner(&self) -> &ResourceClient<Vessel> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<VesselError>() {
                Ok(entity_error) => *entity_error,
                Err(other) => VesselError::InvalidVessel(other.to_string()),
            },
            other => VesselError::Unreachable(other.to_string()),
        }
    }
}

#[async_trait]
impl VesselQuery for VesselClient {
    #[instrument(skip(self))]
    async fn find_available(&self, spec: Specification) -> Result<FindAvailableResponse, VesselError> {
        match self.find(spec).await? {
            Some(vessel) => {
                debug!(vessel_id = %vessel.id, name = %vessel.name, "Found vessel");
                Ok(FindAvailableResponse {
                    vessel: Some(vessel),
                })
            }
            None => Err(VesselError::NoneAvailable {
                max_weight: spec.max_weight,
                capacity: spec.capacity,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_find, MockClient};

    fn boaty() -> Vessel {
        Vessel {
            id: "vessel-1".to_string(),
            name: "Boaty McBoatface".to_string(),
            capacity: 500,
            max_weight: 200_000,
            available: true,
            owner_id: String::new(),
        }
    }

    #[tokio::test]
    async fn test_find_available_sends_the_specification() {
        let (client, mut receiver) = create_mock_client::<Vessel>(10);
        let vessel_client = VesselClient::new(client);

        let spec = Specification {
            max_weight: 55_000,
            capacity: 3,
        };
        let find_task = tokio::spawn(async move { vessel_client.find_available(spec).await });

        let (query, responder) = expect_find(&mut receiver)
            .await
            .expect("Expected Find request");
        assert_eq!(query, spec);
        responder.send(Ok(Some(boaty()))).unwrap();

        let response = find_task.await.unwrap().unwrap();
        assert_eq!(response.vessel.map(|v| v.id), Some("vessel-1".to_string()));
    }

    #[tokio::test]
    async fn test_no_match_is_none_available() {
        let mut mock = MockClient::<Vessel>::new();
        mock.expect_find().return_ok(None);

        let vessel_client = VesselClient::new(mock.client());
        let result = vessel_client
            .find_available(Specification {
                max_weight: 1,
                capacity: 9_999,
            })
            .await;

        assert_eq!(
            result,
            Err(VesselError::NoneAvailable {
                max_weight: 1,
                capacity: 9_999
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_service_is_unreachable() {
        let mut mock = MockClient::<Vessel>::new();
        mock.expect_find().return_err(FrameworkError::ActorClosed);

        let vessel_client = VesselClient::new(mock.client());
        let result = vessel_client
            .find_available(Specification {
                max_weight: 1,
                capacity: 1,
            })
            .await;

        assert!(matches!(result, Err(VesselError::Unreachable(_))));
    }

    #[tokio::test]
    async fn test_create_vessel_surfaces_entity_error() {
        let mut mock = MockClient::<Vessel>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                VesselError::InvalidVessel("vessel name must not be blank".to_string()),
            )));

        let vessel_client = VesselClient::new(mock.client());
        let result = vessel_client.create_vessel(VesselCreate::new("", 1, 1)).await;

        assert!(matches!(result, Err(VesselError::InvalidVessel(_))));
    }
}
