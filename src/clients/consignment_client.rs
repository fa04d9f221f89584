//! # Consignment Client
//!
//! The repository interface backed by the consignment actor.
use crate::clients::ConsignmentRepository;
use crate::consignment_actor::ConsignmentError;
use crate::model::Consignment;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Consignment actor.
#[derive(Clone)]
pub struct ConsignmentClient {
    inner: ResourceClient<Consignment>,
}

impl ConsignmentClient {
    pub fn new(inner: ResourceClient<Consignment>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Consignment> for ConsignmentClient {
    type Error = ConsignmentError;

    fn inner(&self) -> &ResourceClient<Consignment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<ConsignmentError>() {
                Ok(entity_error) => *entity_error,
                Err(other) => ConsignmentError::Storage(other.to_string()),
            },
            other => ConsignmentError::Storage(other.to_string()),
        }
    }
}

#[async_trait]
impl ConsignmentRepository for ConsignmentClient {
    #[instrument(skip(self, consignment), fields(id = %consignment.id))]
    async fn create(&self, consignment: Consignment) -> Result<Consignment, ConsignmentError> {
        debug!("Sending request");
        self.inner.create(consignment).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Consignment>, ConsignmentError> {
        self.list().await
    }
}
