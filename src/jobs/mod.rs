//! Job service
//!
//! Lists JES jobs through `/restjobs/jobs`.

mod service;
mod types;

pub use service::JobService;
pub use types::JobInfo;
