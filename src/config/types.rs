//! Connection profile types
//!
//! A `ConnectionProfile` is the resolved configuration every request is
//! built from. It is immutable once constructed.

use crate::error::{Error, Result};
use serde::Serialize;

/// Resolved connection settings for a z/OSMF server
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProfile {
    /// Host including scheme (e.g., "https://mainframe.example.com")
    host: String,
    /// Server port
    port: u16,
    /// User for Basic authentication
    username: String,
    /// Password for Basic authentication
    password: String,
    /// Prefixed verbatim to every request path (e.g., "/zosmf")
    base_path: String,
    /// Accept invalid TLS certificates
    insecure: bool,
    /// Pre-built HTTP client used instead of a default one
    #[serde(skip)]
    http_client: Option<reqwest::Client>,
}

impl ConnectionProfile {
    /// Create a new profile builder
    pub fn builder() -> ConnectionProfileBuilder {
        ConnectionProfileBuilder::default()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn insecure(&self) -> bool {
        self.insecure
    }

    /// The HTTP client override, if one was supplied
    pub fn http_client(&self) -> Option<&reqwest::Client> {
        self.http_client.as_ref()
    }

    /// Check that every required field is non-empty
    fn validate(&self) -> Result<()> {
        let required = [
            ("host", &self.host),
            ("username", &self.username),
            ("password", &self.password),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(Error::missing_field(field));
            }
        }
        Ok(())
    }

    /// JSON view of the profile with the password masked
    pub fn redacted(&self) -> serde_json::Value {
        serde_json::json!({
            "host": self.host,
            "port": self.port,
            "username": self.username,
            "password": "********",
            "basePath": self.base_path,
            "insecure": self.insecure,
        })
    }
}

impl PartialEq for ConnectionProfile {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host
            && self.port == other.port
            && self.username == other.username
            && self.password == other.password
            && self.base_path == other.base_path
            && self.insecure == other.insecure
    }
}

impl std::fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"********")
            .field("base_path", &self.base_path)
            .field("insecure", &self.insecure)
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

/// Builder for connection profiles
#[derive(Debug, Default)]
pub struct ConnectionProfileBuilder {
    host: String,
    port: u16,
    username: String,
    password: String,
    base_path: String,
    insecure: bool,
    http_client: Option<reqwest::Client>,
}

impl ConnectionProfileBuilder {
    /// Set the host (scheme included)
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set Basic authentication credentials
    #[must_use]
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Set the base path
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Accept invalid TLS certificates
    #[must_use]
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Use a pre-built HTTP client
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build and validate the profile
    pub fn build(self) -> Result<ConnectionProfile> {
        let profile = ConnectionProfile {
            host: self.host,
            port: self.port,
            username: self.username,
            password: self.password,
            base_path: self.base_path,
            insecure: self.insecure,
            http_client: self.http_client,
        };
        profile.validate()?;
        Ok(profile)
    }
}
