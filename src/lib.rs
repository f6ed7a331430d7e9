//! # z/OSMF SDK
//!
//! A Rust client for the z/OS Management Facility REST API.
//!
//! ## Features
//!
//! - **Configuration Resolution**: Environment variables, then default JSON files
//! - **Uniform Transport**: Basic auth and JSON content type on every request
//! - **Datasets**: List, get, create, and delete through `/restfiles/ds`
//! - **Jobs**: List jobs through `/restjobs/jobs`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zosmf_sdk::{DatasetInfo, Result, ZosmfClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // ZOSMF_* variables, ~/.config/zosmf/config.json or ~/.zosmf_config.json
//!     let client = ZosmfClient::from_default_config()?;
//!
//!     client.datasets().create(&DatasetInfo::new("USER.TEST", "PDS")).await?;
//!     for ds in client.datasets().list().await? {
//!         println!("{} ({})", ds.dsname, ds.dataset_type);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 ZosmfClient                  │
//! ├──────────────────────┬───────────────────────┤
//! │    DatasetService    │      JobService       │
//! ├──────────────────────┴───────────────────────┤
//! │          Transport (Arc, shared)             │
//! │   <host>:<port><basePath><path>, Basic auth  │
//! ├──────────────────────────────────────────────┤
//! │              ConnectionProfile               │
//! │   env vars → ~/.config/zosmf → ~/.zosmf_*    │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Connection profile resolution
pub mod config;

/// HTTP transport
pub mod transport;

/// Dataset service
pub mod datasets;

/// Job service
pub mod jobs;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::ZosmfClient;
pub use config::ConnectionProfile;
pub use datasets::{DatasetInfo, DatasetService};
pub use error::{Error, Result};
pub use jobs::{JobInfo, JobService};
pub use transport::Transport;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
