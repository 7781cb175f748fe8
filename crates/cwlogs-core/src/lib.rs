//! cwlogs-core
//!
//! Resource models, primary identifiers, and the handler invocation contract.
//! No AWS SDK dependency — this is the shared vocabulary of the handlers and
//! the orchestrating host.

pub mod identifier;
pub mod models;
pub mod progress;
pub mod request;

pub use crate::identifier::PrimaryIdentifier;
pub use crate::models::destination::DestinationModel;
pub use crate::models::metric_filter::{MetricFilterModel, MetricTransformation};
pub use crate::progress::{HandlerErrorCode, ProgressEvent};
pub use crate::request::{Action, CallbackContext, ResourceHandlerRequest};
