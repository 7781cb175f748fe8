use std::future::Future;
use std::pin::Pin;

use crate::error::RemoteError;
use crate::types::{
    DescribeDestinationsRequest, DescribeDestinationsResponse, DescribeMetricFiltersRequest,
    DescribeMetricFiltersResponse, Destination, PutDestinationPolicyRequest,
    PutDestinationRequest, PutMetricFilterRequest,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Authenticated access to the CloudWatch Logs control plane.
///
/// Implementations inject credentials and surface remote errors with the
/// service's own code and message; mapping them to handler outcomes is the
/// caller's job. Methods return boxed futures for dyn compatibility, so the
/// host builds one client and passes `&dyn LogsApi` into every handler.
pub trait LogsApi: Send + Sync {
    /// Create or overwrite a destination. Returns the stored record.
    fn put_destination(
        &self,
        request: PutDestinationRequest,
    ) -> BoxFuture<'_, Result<Destination, RemoteError>>;

    fn put_destination_policy(
        &self,
        request: PutDestinationPolicyRequest,
    ) -> BoxFuture<'_, Result<(), RemoteError>>;

    /// One page of destinations whose name starts with the requested prefix.
    fn describe_destinations(
        &self,
        request: DescribeDestinationsRequest,
    ) -> BoxFuture<'_, Result<DescribeDestinationsResponse, RemoteError>>;

    fn delete_destination(&self, destination_name: &str) -> BoxFuture<'_, Result<(), RemoteError>>;

    /// Create or overwrite a metric filter on a log group.
    fn put_metric_filter(
        &self,
        request: PutMetricFilterRequest,
    ) -> BoxFuture<'_, Result<(), RemoteError>>;

    /// One page of metric filters, optionally scoped by log group and name prefix.
    fn describe_metric_filters(
        &self,
        request: DescribeMetricFiltersRequest,
    ) -> BoxFuture<'_, Result<DescribeMetricFiltersResponse, RemoteError>>;

    fn delete_metric_filter(
        &self,
        log_group_name: &str,
        filter_name: &str,
    ) -> BoxFuture<'_, Result<(), RemoteError>>;
}
