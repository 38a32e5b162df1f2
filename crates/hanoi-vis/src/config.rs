//! Visualizer configuration.

use std::net::SocketAddr;

use hanoi_core::DiskCount;

use crate::error::{Result, VisError};

/// Listen address variable.
pub const ADDR_VAR: &str = "HANOI_VIS_ADDR";

/// Initial tower size variable.
pub const DEFAULT_DISKS_VAR: &str = "HANOI_DEFAULT_DISKS";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Configuration for the visualization server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisConfig {
    /// HTTP listen address
    pub addr: SocketAddr,

    /// Disks on the tower shown before any run
    pub default_disks: DiskCount,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            default_disks: DiskCount::default(),
        }
    }
}

impl VisConfig {
    /// Create config from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_text = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_text.parse().map_err(|e: std::net::AddrParseError| {
            VisError::Config {
                name: ADDR_VAR,
                value: addr_text.clone(),
                reason: e.to_string(),
            }
        })?;

        let default_disks = match lookup(DEFAULT_DISKS_VAR) {
            Some(text) => DiskCount::parse(&text).map_err(|e| VisError::Config {
                name: DEFAULT_DISKS_VAR,
                value: text.clone(),
                reason: e.to_string(),
            })?,
            None => DiskCount::default(),
        };

        Ok(Self {
            addr,
            default_disks,
        })
    }

    /// Override the listen port, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        self.addr.set_port(port);
        self
    }
}
