//! Connection configuration
//!
//! Resolves a [`ConnectionProfile`] from environment variables, an explicit
//! JSON file, or the conventional files under the home directory.
//!
//! # Precedence
//!
//! - **Environment**: `ZOSMF_HOST`, `ZOSMF_PORT`, `ZOSMF_USERNAME`,
//!   `ZOSMF_PASSWORD`, plus optional `ZOSMF_BASEPATH` and `ZOSMF_INSECURE`
//! - **Default files**: `~/.config/zosmf/config.json`, then `~/.zosmf_config.json`
//!
//! When both fail, [`ConnectionProfile::load`] returns
//! `Error::ConfigurationUnavailable` carrying both causes.

mod resolver;
mod types;

pub use resolver::{
    default_config_paths, ENV_BASE_PATH, ENV_HOST, ENV_INSECURE, ENV_PASSWORD, ENV_PORT,
    ENV_USERNAME,
};
pub use types::{ConnectionProfile, ConnectionProfileBuilder};

#[cfg(test)]
mod tests;
