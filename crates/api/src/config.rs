//! Runtime configuration, read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PAGE_LIMIT: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `DEFAULT_PAGE_LIMIT`: window size when a list request has no `limit`.
    pub default_page_limit: usize,
    /// `BLOCKED_CUSTOMER_CPFS`: comma-separated deny-list for the authorizer.
    pub blocked_customer_cpfs: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            default_page_limit: DEFAULT_PAGE_LIMIT,
            blocked_customer_cpfs: Vec::new(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let default_page_limit = match lookup("DEFAULT_PAGE_LIMIT") {
            None => DEFAULT_PAGE_LIMIT,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        name: "DEFAULT_PAGE_LIMIT",
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Ok(limit) => limit,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "DEFAULT_PAGE_LIMIT",
                        reason: e.to_string(),
                    });
                }
            },
        };

        let blocked_customer_cpfs = lookup("BLOCKED_CUSTOMER_CPFS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            default_page_limit,
            blocked_customer_cpfs,
        })
    }
}
