//! HTTP transport module
//!
//! Builds and executes every outbound request against the z/OSMF server.
//!
//! # Request shape
//!
//! - **URL**: `<host>:<port><basePath><path>`, concatenated verbatim
//! - **Authentication**: HTTP Basic from the profile credentials
//! - **Content type**: `application/json` on every request
//! - **Body**: JSON-encoded when present
//!
//! The transport never interprets status codes. The `response` helpers are
//! what resource services use to accept or reject a response and decode it.

mod client;
mod response;

pub use client::Transport;
pub use response::{decode_json, expect_status, expect_success};
