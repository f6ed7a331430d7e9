//! Client facade
//!
//! Wires one transport into every resource service and hands back a single
//! handle.

use crate::config::ConnectionProfile;
use crate::datasets::DatasetService;
use crate::error::Result;
use crate::jobs::JobService;
use crate::transport::Transport;
use std::sync::Arc;

/// Entry point for talking to a z/OSMF server
#[derive(Debug, Clone)]
pub struct ZosmfClient {
    transport: Arc<Transport>,
    datasets: DatasetService,
    jobs: JobService,
}

impl ZosmfClient {
    /// Create a client for the given profile
    pub fn new(profile: ConnectionProfile) -> Result<Self> {
        let transport = Arc::new(Transport::new(profile)?);
        Ok(Self {
            datasets: DatasetService::new(Arc::clone(&transport)),
            jobs: JobService::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from the environment or the default config files
    pub fn from_default_config() -> Result<Self> {
        Self::new(ConnectionProfile::load()?)
    }

    pub fn profile(&self) -> &ConnectionProfile {
        self.transport.profile()
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn datasets(&self) -> &DatasetService {
        &self.datasets
    }

    pub fn jobs(&self) -> &JobService {
        &self.jobs
    }
}
