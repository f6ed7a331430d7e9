//! Dataset service
//!
//! List, get, create, and delete z/OS datasets through `/restfiles/ds`.

mod service;
mod types;

pub use service::DatasetService;
pub use types::DatasetInfo;
