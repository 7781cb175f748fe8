use std::fmt::Debug;

use cwlogs_client::{BoxFuture, LogsApi};
use cwlogs_core::PrimaryIdentifier;

use crate::error::HandlerError;

/// One page of a list operation. `next_token` is the remote's own token,
/// passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<M> {
    pub models: Vec<M>,
    pub next_token: Option<String>,
}

/// Everything the generic reconcilers need to know about one resource kind:
/// its identity rules, its translators, and the remote calls behind them.
pub trait ResourceKind: Send + Sync {
    type Model: Clone + Debug + PartialEq + Send + Sync;

    /// e.g. "AWS::Logs::Destination"
    const TYPE_NAME: &'static str;

    /// Longest physical name the service accepts.
    const MAX_NAME_LENGTH: usize;

    /// Whether `create` returns a fresh read instead of the echoed model.
    const REREAD_AFTER_CREATE: bool;

    fn primary_identifier(&self, model: &Self::Model) -> PrimaryIdentifier;

    fn name<'m>(&self, model: &'m Self::Model) -> Option<&'m str>;

    /// New model with the physical name replaced.
    fn with_name(&self, model: Self::Model, name: String) -> Self::Model;

    /// Required fields and limits, checked before any remote call.
    fn validate(&self, model: &Self::Model) -> Result<(), HandlerError>;

    /// Changes the service has no call to apply, checked against the current
    /// record before an update writes anything.
    fn validate_update(
        &self,
        _current: &Self::Model,
        _desired: &Self::Model,
    ) -> Result<(), HandlerError> {
        Ok(())
    }

    /// Fetch the remote record matching `model`'s identity. `Ok(None)` when
    /// it doesn't exist.
    fn fetch<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a Self::Model,
    ) -> BoxFuture<'a, Result<Option<Self::Model>, HandlerError>>;

    /// Apply every mutable attribute, primary attributes first.
    fn put<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a Self::Model,
    ) -> BoxFuture<'a, Result<(), HandlerError>>;

    fn remove<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a Self::Model,
    ) -> BoxFuture<'a, Result<(), HandlerError>>;

    /// One page of records narrowed by whatever scope fields `filter` sets.
    fn list_page<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        filter: &'a Self::Model,
        next_token: Option<String>,
    ) -> BoxFuture<'a, Result<Page<Self::Model>, HandlerError>>;
}
