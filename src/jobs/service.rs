//! Job service implementation

use super::types::JobInfo;
use crate::error::Result;
use crate::transport::{decode_json, expect_success, Transport};
use std::sync::Arc;

const JOBS_PATH: &str = "/restjobs/jobs";

/// Job operations over a shared transport
#[derive(Debug, Clone)]
pub struct JobService {
    transport: Arc<Transport>,
}

impl JobService {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List jobs
    pub async fn list(&self) -> Result<Vec<JobInfo>> {
        let response = self.transport.get(JOBS_PATH).await?;
        let response = expect_success(response).await?;
        decode_json(response, "job list").await
    }
}
