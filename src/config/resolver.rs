//! Configuration sources and precedence
//!
//! A profile comes from exactly one source, tried in order:
//!
//! 1. Environment variables (`ZOSMF_HOST`, `ZOSMF_PORT`, ...)
//! 2. The first existing default file under the home directory
//!
//! There is no merging between sources.

use super::types::ConnectionProfile;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable holding the host (scheme included)
pub const ENV_HOST: &str = "ZOSMF_HOST";
/// Environment variable holding the port
pub const ENV_PORT: &str = "ZOSMF_PORT";
/// Environment variable holding the user name
pub const ENV_USERNAME: &str = "ZOSMF_USERNAME";
/// Environment variable holding the password
pub const ENV_PASSWORD: &str = "ZOSMF_PASSWORD";
/// Environment variable holding the optional base path
pub const ENV_BASE_PATH: &str = "ZOSMF_BASEPATH";
/// Environment variable holding the optional insecure TLS flag
pub const ENV_INSECURE: &str = "ZOSMF_INSECURE";

/// Conventional config file locations under `home`, in lookup order
pub fn default_config_paths(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join(".config").join("zosmf").join("config.json"),
        home.join(".zosmf_config.json"),
    ]
}

/// On-disk shape of a config file
///
/// Absent strings decode as empty so they fail validation the same way an
/// explicit `""` does.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileFile {
    #[serde(default)]
    host: String,
    port: Option<u16>,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    base_path: String,
    #[serde(default)]
    insecure: bool,
}

impl ProfileFile {
    fn into_profile(self) -> Result<ConnectionProfile> {
        let port = self.port.ok_or_else(|| Error::missing_field("port"))?;
        ConnectionProfile::builder()
            .host(self.host)
            .port(port)
            .credentials(self.username, self.password)
            .base_path(self.base_path)
            .insecure(self.insecure)
            .build()
    }
}

/// Only the literal values "true" and "1" enable the flag
fn parse_insecure(value: Option<&str>) -> bool {
    matches!(value, Some("true" | "1"))
}

impl ConnectionProfile {
    /// Load the profile from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load the profile from environment variables read through `lookup`
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::missing_field(key))
        };

        let host = required(ENV_HOST)?;
        let port = required(ENV_PORT)?;
        let username = required(ENV_USERNAME)?;
        let password = required(ENV_PASSWORD)?;

        let port: u16 = port
            .parse()
            .map_err(|e: std::num::ParseIntError| Error::invalid_format(ENV_PORT, e.to_string()))?;

        Self::builder()
            .host(host)
            .port(port)
            .credentials(username, password)
            .base_path(lookup(ENV_BASE_PATH).unwrap_or_default())
            .insecure(parse_insecure(lookup(ENV_INSECURE).as_deref()))
            .build()
    }

    /// Load the profile from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path.display().to_string(), e))?;

        let raw: ProfileFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::invalid_config_file(path.display().to_string(), e))?;

        raw.into_profile()
    }

    /// Load the profile from the first default file under the user's home
    pub fn from_default_paths() -> Result<Self> {
        Self::from_default_paths_in(dirs::home_dir().as_deref())
    }

    /// Load the profile from the first default file under `home`
    pub fn from_default_paths_in(home: Option<&Path>) -> Result<Self> {
        let home = home.ok_or_else(|| Error::not_found("could not determine home directory"))?;

        let paths = default_config_paths(home);
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Err(Error::not_found(format!(
                "no config file at {}",
                paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(" or ")
            ))),
        }
    }

    /// Resolve the profile from the process environment, then default files
    pub fn load() -> Result<Self> {
        Self::load_with(|key| std::env::var(key).ok(), dirs::home_dir().as_deref())
    }

    /// Resolve the profile from `lookup`, then default files under `home`
    pub fn load_with<F>(lookup: F, home: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_err = match Self::from_env_with(lookup) {
            Ok(profile) => {
                debug!("Using configuration from environment variables");
                return Ok(profile);
            }
            Err(e) => e,
        };
        warn!("Environment configuration unavailable: {env_err}");

        let files_err = match Self::from_default_paths_in(home) {
            Ok(profile) => return Ok(profile),
            Err(e) => e,
        };
        warn!("File configuration unavailable: {files_err}");

        Err(Error::ConfigurationUnavailable {
            env: Box::new(env_err),
            files: Box::new(files_err),
        })
    }
}
