use serde::{Deserialize, Serialize};

/// A job entry returned by `/restjobs/jobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInfo {
    /// Job name
    pub jobname: String,
    /// Job ID (e.g., JOB00042)
    pub jobid: String,
}
