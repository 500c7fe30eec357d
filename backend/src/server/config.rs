//! Server settings loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{
    CaseSensitivity, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, MatchMode, MatchPolicy,
    UnknownPolicyValue,
};

const DEFAULT_PORT: u16 = 8080;

/// Errors raised while resolving settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `host` is not an IP address.
    #[error("invalid bind host `{0}`")]
    InvalidHost(String),
    /// A match policy value is not recognised.
    #[error(transparent)]
    InvalidPolicy(#[from] UnknownPolicyValue),
    /// The default page size is outside `1..=MAX_PAGE_LIMIT`.
    #[error("default page size must be between 1 and {MAX_PAGE_LIMIT}, got {0}")]
    InvalidPageSize(usize),
}

/// Runtime settings for the HTTP server and its record store.
///
/// Every field is optional; accessors supply the defaults.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct ServerSettings {
    /// Address to bind, `0.0.0.0` when unset.
    pub host: Option<String>,
    /// Port to bind, 8080 when unset.
    pub port: Option<u16>,
    /// PostgreSQL URL. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// `exact` (default) or `contains`.
    pub match_mode: Option<String>,
    /// `sensitive` (default) or `insensitive`.
    pub case_sensitivity: Option<String>,
    /// Page size applied when a request omits `limit`.
    pub default_page_size: Option<usize>,
}

impl ServerSettings {
    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let ip = match self.host.as_deref().map(str::trim) {
            None | Some("") => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            Some(host) => host
                .parse()
                .map_err(|_| SettingsError::InvalidHost(host.to_owned()))?,
        };
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Database URL, if a non-blank one was configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Match policy applied to every search.
    pub fn match_policy(&self) -> Result<MatchPolicy, SettingsError> {
        let mode = self
            .match_mode
            .as_deref()
            .map(str::parse::<MatchMode>)
            .transpose()?
            .unwrap_or_default();
        let case = self
            .case_sensitivity
            .as_deref()
            .map(str::parse::<CaseSensitivity>)
            .transpose()?
            .unwrap_or_default();
        Ok(MatchPolicy::new(mode, case))
    }

    /// Default page size, validated against the page cap.
    pub fn default_page_size(&self) -> Result<usize, SettingsError> {
        match self.default_page_size {
            None => Ok(DEFAULT_PAGE_LIMIT),
            Some(size) if (1..=MAX_PAGE_LIMIT).contains(&size) => Ok(size),
            Some(size) => Err(SettingsError::InvalidPageSize(size)),
        }
    }
}
