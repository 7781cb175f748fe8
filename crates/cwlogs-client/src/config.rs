use std::env;

use crate::error::ConfigError;

/// Largest page the describe operations accept.
pub const MAX_PAGE_SIZE: i32 = 50;

/// Connection settings for the CloudWatch Logs client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Overrides the region from the default provider chain.
    pub region: Option<String>,
    /// Overrides the service endpoint (e.g. a local emulator).
    pub endpoint_url: Option<String>,
    /// `limit` sent on describe calls.
    pub page_size: i32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            page_size: MAX_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Read `AWS_REGION`, `CWLOGS_ENDPOINT_URL`, and `CWLOGS_PAGE_SIZE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let page_size = match non_empty("CWLOGS_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidVar {
                    var: "CWLOGS_PAGE_SIZE",
                    value: raw.clone(),
                })?,
            None => MAX_PAGE_SIZE,
        };

        let config = Self {
            region: non_empty("AWS_REGION"),
            endpoint_url: non_empty("CWLOGS_ENDPOINT_URL"),
            page_size,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::PageSize(self.page_size));
        }
        Ok(())
    }
}
