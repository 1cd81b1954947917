//! Runtime configuration for the browser client and the SSR host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle cannot read process env at runtime, so API locations are
//! baked in at compile time. The SSR host reads its bind address from the
//! process environment (after `.env` is loaded by the binary).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_LOOKAHEAD_PX: u32 = 100;
pub const DEFAULT_UPLOAD_BASE: &str = "/api/uploadthing";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Where the client sends REST and upload requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin of the club backend, without trailing slash. Empty means same origin.
    pub api_base_url: String,
    /// Base URL of the file-upload service, without trailing slash.
    pub upload_base_url: String,
}

impl ApiConfig {
    pub fn new(api_base_url: &str, upload_base_url: &str) -> Self {
        Self {
            api_base_url: trim_base(api_base_url),
            upload_base_url: trim_base(upload_base_url),
        }
    }

    /// Build from `CLUB_PORTAL_API_URL` / `CLUB_PORTAL_UPLOAD_URL` captured at
    /// compile time. Uploads default to `/api/uploadthing` on the page origin.
    pub fn from_build_env() -> Self {
        let api = option_env!("CLUB_PORTAL_API_URL").unwrap_or("");
        let upload = option_env!("CLUB_PORTAL_UPLOAD_URL").unwrap_or(DEFAULT_UPLOAD_BASE);
        Self::new(api, upload)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Infinite-scroll tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    /// Distance before the physical end of the list at which the next page
    /// starts loading.
    pub lookahead_px: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self { lookahead_px: DEFAULT_LOOKAHEAD_PX }
    }
}

fn trim_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Configuration error for the SSR host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Bind settings for the SSR host binary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub addr: SocketAddr,
}

impl HostConfig {
    /// Read `PORTAL_HOST` and `PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if either value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if either value fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_raw = lookup("PORTAL_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let host: IpAddr = host_raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var: "PORTAL_HOST", value: host_raw.clone() })?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { addr: SocketAddr::new(host, port) })
    }
}
