//! cwlogs-client
//!
//! The remote seam for CloudWatch Logs configuration objects: the `LogsApi`
//! trait the handlers call through, its request/response shapes, and an
//! implementation backed by the AWS SDK.

pub mod api;
pub mod aws;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use crate::api::{BoxFuture, LogsApi};
pub use crate::aws::CloudWatchLogs;
pub use crate::config::ClientConfig;
pub use crate::error::{ConfigError, RemoteError};
