//! Runtime configuration.
//!
//! Loaded from a TOML file; every key is optional and falls back to the defaults below.
//!
//! ```toml
//! consignment_service = "shipping.consignment"
//! vessel_service = "shipping.vessel"
//! query_timeout_ms = 5000
//! channel_buffer = 32
//!
//! [[fleet]]
//! name = "Boaty McBoatface"
//! capacity = 500
//! max_weight = 200000
//! ```

use crate::model::VesselCreate;
use crate::registry::{CONSIGNMENT_SERVICE, VESSEL_SERVICE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {message}")]
    Invalid { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingConfig {
    /// Logical name the consignment service registers under.
    pub consignment_service: String,
    /// Logical name the vessel capability service is resolved by.
    pub vessel_service: String,
    pub query_timeout_ms: u64,
    /// Mailbox size of each actor.
    pub channel_buffer: usize,
    /// Vessels registered with the in-process capability service at startup.
    pub fleet: Vec<VesselCreate>,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            consignment_service: CONSIGNMENT_SERVICE.to_string(),
            vessel_service: VESSEL_SERVICE.to_string(),
            query_timeout_ms: 5_000,
            channel_buffer: 32,
            fleet: vec![VesselCreate::new("Boaty McBoatface", 500, 200_000)],
        }
    }
}

impl ShippingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: &str| {
            Err(ConfigError::Invalid {
                message: message.to_string(),
            })
        };
        if self.consignment_service.trim().is_empty() {
            return invalid("consignment_service must not be blank");
        }
        if self.vessel_service.trim().is_empty() {
            return invalid("vessel_service must not be blank");
        }
        if self.query_timeout_ms == 0 {
            return invalid("query_timeout_ms must be greater than zero");
        }
        if self.channel_buffer == 0 {
            return invalid("channel_buffer must be greater than zero");
        }
        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}
