use serde::{Deserialize, Serialize};

/// A dataset as returned and accepted by `/restfiles/ds`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Fully qualified dataset name (e.g., "USER.TEST")
    pub dsname: String,
    /// Dataset type (e.g., "PDS")
    #[serde(rename = "type")]
    pub dataset_type: String,
}

impl DatasetInfo {
    pub fn new(dsname: impl Into<String>, dataset_type: impl Into<String>) -> Self {
        Self {
            dsname: dsname.into(),
            dataset_type: dataset_type.into(),
        }
    }
}
