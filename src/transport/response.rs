//! Response checks shared by the resource services

use crate::error::{Error, Result};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

/// Accept the response only if its status is one of `accepted`
///
/// Any other status becomes `Error::UnexpectedStatus` carrying the body text.
/// A body that cannot be read is a `Network` error.
pub async fn expect_status(response: Response, accepted: &[StatusCode]) -> Result<Response> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(Error::unexpected_status(status.as_u16(), body))
}

/// Accept any 2xx response
pub async fn expect_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    Err(Error::unexpected_status(status.as_u16(), body))
}

/// Read the whole body and decode it as JSON
pub async fn decode_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| Error::decode(context, e))
}
