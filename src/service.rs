//! # Consignment Service
//!
//! Orchestrates consignment creation: derive the vessel requirement, ask the capability
//! service for a vessel, stamp its identifier on the consignment, then append it to the
//! repository. Listing is a straight delegation to the repository.
//!
//! ## Failure model
//!
//! The repository is touched only after a usable vessel is in hand. A failed query, a
//! timeout, a cancelled request, a reply without a vessel, and a vessel with a blank
//! identifier all end as [`ConsignmentError::CapabilityUnavailable`] with nothing
//! stored. Errors from either collaborator reach the caller unchanged; there are no
//! retries at this layer.
//!
//! The remote query runs in the caller's task. The repository actor is only involved
//! for the append itself, so a stuck query cannot delay other requests.

use crate::clients::{ConsignmentRepository, VesselQuery};
use crate::consignment_actor::ConsignmentError;
use crate::model::{Consignment, CreateResponse, GetRequest, GetResponse, Vessel};
use crate::vessel_actor::VesselError;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

/// How long a capability query may take unless configured otherwise.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// The consignment orchestrator.
///
/// Stateless apart from its two collaborators, which are injected once and never
/// swapped. Share it as `Arc<ConsignmentService>` across request handlers.
pub struct ConsignmentService {
    repository: Arc<dyn ConsignmentRepository>,
    vessels: Arc<dyn VesselQuery>,
    query_timeout: Duration,
}

impl ConsignmentService {
    pub fn new(repository: Arc<dyn ConsignmentRepository>, vessels: Arc<dyn VesselQuery>) -> Self {
        Self {
            repository,
            vessels,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Upper bound for a single capability query.
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Create a consignment that cannot be cancelled other than by dropping the future.
    pub async fn create_consignment(
        &self,
        consignment: Consignment,
    ) -> Result<CreateResponse, ConsignmentError> {
        self.create_consignment_cancellable(consignment, CancellationToken::new())
            .await
    }

    /// Create a consignment, abandoning the capability query when `cancel` fires.
    ///
    /// Any `vessel_id` already present on the input is overwritten.
    #[instrument(
        skip(self, consignment, cancel),
        fields(weight = consignment.weight, containers = consignment.containers.len())
    )]
    pub async fn create_consignment_cancellable(
        &self,
        mut consignment: Consignment,
        cancel: CancellationToken,
    ) -> Result<CreateResponse, ConsignmentError> {
        debug!(?consignment, "create_consignment called");

        let vessel = match self.find_vessel(&consignment, &cancel).await {
            Ok(vessel) => vessel,
            Err(e) => {
                warn!(error = %e, "No vessel assigned, consignment not stored");
                return Err(e.into());
            }
        };
        info!(vessel_id = %vessel.id, name = %vessel.name, "Found vessel");

        consignment.vessel_id = Some(vessel.id);
        let stored = self.repository.create(consignment).await?;
        info!(id = %stored.id, "Consignment created");

        Ok(CreateResponse {
            created: true,
            consignment: stored,
        })
    }

    /// Every stored consignment in insertion order.
    #[instrument(skip(self, _request))]
    pub async fn get_consignments(
        &self,
        _request: GetRequest,
    ) -> Result<GetResponse, ConsignmentError> {
        let consignments = self.repository.get_all().await?;
        debug!(count = consignments.len(), "Listed consignments");
        Ok(GetResponse { consignments })
    }

    /// Create `consignment`, then list everything stored.
    ///
    /// A failed create is returned as is and nothing is listed.
    pub async fn submit(
        &self,
        consignment: Consignment,
    ) -> Result<(CreateResponse, GetResponse), ConsignmentError> {
        let created = self.create_consignment(consignment).await?;
        let listed = self.get_consignments(GetRequest).await?;
        Ok((created, listed))
    }

    async fn find_vessel(
        &self,
        consignment: &Consignment,
        cancel: &CancellationToken,
    ) -> Result<Vessel, VesselError> {
        let spec = consignment.specification();
        let query = tokio::time::timeout(self.query_timeout, self.vessels.find_available(spec));

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(VesselError::Cancelled),
            result = query => result.map_err(|_| VesselError::Timeout(self.query_timeout))??,
        };

        let vessel = response.vessel.ok_or(VesselError::MissingVessel)?;
        if vessel.id.trim().is_empty() {
            return Err(VesselError::InvalidVessel(format!(
                "vessel '{}' has no identifier",
                vessel.name
            )));
        }
        Ok(vessel)
    }
}
