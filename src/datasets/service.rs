//! Dataset service implementation

use super::types::DatasetInfo;
use crate::error::Result;
use crate::transport::{decode_json, expect_status, expect_success, Transport};
use reqwest::StatusCode;
use std::sync::Arc;

const DATASETS_PATH: &str = "/restfiles/ds";

/// Dataset operations over a shared transport
#[derive(Debug, Clone)]
pub struct DatasetService {
    transport: Arc<Transport>,
}

impl DatasetService {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List datasets
    pub async fn list(&self) -> Result<Vec<DatasetInfo>> {
        let response = self.transport.get(DATASETS_PATH).await?;
        let response = expect_success(response).await?;
        decode_json(response, "dataset list").await
    }

    /// Get a single dataset by name
    pub async fn get(&self, dsname: &str) -> Result<DatasetInfo> {
        let response = self.transport.get(&dataset_path(dsname)).await?;
        let response = expect_success(response).await?;
        decode_json(response, &format!("dataset '{dsname}'")).await
    }

    /// Create a dataset
    ///
    /// Succeeds on 200 or 201.
    pub async fn create(&self, info: &DatasetInfo) -> Result<()> {
        let response = self.transport.post(DATASETS_PATH, info).await?;
        expect_status(response, &[StatusCode::OK, StatusCode::CREATED]).await?;
        Ok(())
    }

    /// Delete a dataset by name
    ///
    /// Succeeds on 200 or 204.
    pub async fn delete(&self, dsname: &str) -> Result<()> {
        let response = self.transport.delete(&dataset_path(dsname)).await?;
        expect_status(response, &[StatusCode::OK, StatusCode::NO_CONTENT]).await?;
        Ok(())
    }
}

// Names are inserted verbatim
fn dataset_path(dsname: &str) -> String {
    format!("{DATASETS_PATH}/{dsname}")
}
