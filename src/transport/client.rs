//! Transport implementation
//!
//! Owns the HTTP client and the connection profile. Holds no per-call state,
//! so one transport can serve any number of concurrent requests.

use crate::config::ConnectionProfile;
use crate::error::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response, Url};
use serde::Serialize;
use tracing::debug;

/// HTTP transport for a single z/OSMF server
pub struct Transport {
    client: Client,
    profile: ConnectionProfile,
}

impl Transport {
    /// Create a transport for the given profile
    ///
    /// Uses the profile's HTTP client override when present, otherwise builds
    /// a client that honors the profile's `insecure` flag.
    pub fn new(profile: ConnectionProfile) -> Result<Self> {
        let client = match profile.http_client() {
            Some(client) => client.clone(),
            None => Client::builder()
                .danger_accept_invalid_certs(profile.insecure())
                .user_agent(format!("zosmf-sdk/{}", env!("CARGO_PKG_VERSION")))
                .build()?,
        };

        Ok(Self { client, profile })
    }

    /// The profile this transport was built from
    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    /// Compose the full URL for a request path
    ///
    /// No separators are added or removed: `basePath` and `path` must already
    /// be slash-delimited.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}:{}{}{}",
            self.profile.host(),
            self.profile.port(),
            self.profile.base_path(),
            path
        )
    }

    /// Execute a request and return the raw response
    pub async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path);
        let parsed = Url::parse(&url).map_err(|e| Error::InvalidUrl {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let mut req = self
            .client
            .request(method.clone(), parsed)
            .basic_auth(self.profile.username(), Some(self.profile.password()))
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
            req = req.body(bytes);
        }

        debug!("Sending {} {}", method, url);
        let response = req.send().await?;
        debug!("{} {} returned {}", method, url, response.status().as_u16());

        Ok(response)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.execute::<()>(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.execute::<()>(Method::DELETE, path, None).await
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}
