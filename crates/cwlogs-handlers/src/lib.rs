//! cwlogs-handlers
//!
//! Lifecycle handlers that reconcile `AWS::Logs::Destination` and
//! `AWS::Logs::MetricFilter` models against CloudWatch Logs.
//!
//! Public API:
//! - `handle()` — entry point for the orchestrating host, returns a `ProgressEvent`
//! - `create()` / `read()` / `update()` / `delete()` / `list()` — the reconcilers
//! - `Paginator` — lazy page-by-page enumeration
//! - `DestinationKind`, `MetricFilterKind` — the two resource kinds

pub mod error;
pub mod kind;
pub mod kinds;
pub mod naming;
pub mod paginate;
pub mod reconcile;
pub mod translator;

pub use crate::error::HandlerError;
pub use crate::kind::{Page, ResourceKind};
pub use crate::kinds::destination::DestinationKind;
pub use crate::kinds::metric_filter::MetricFilterKind;
pub use crate::paginate::Paginator;
pub use crate::reconcile::{create, delete, handle, list, read, update};
