use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;

use aws_sdk_cloudwatchlogs::Client;
use aws_sdk_cloudwatchlogs::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_cloudwatchlogs::types as sdk;

use crate::api::{BoxFuture, LogsApi};
use crate::error::{RemoteError, format_err_chain};
use crate::types::{
    DescribeDestinationsRequest, DescribeDestinationsResponse, DescribeMetricFiltersRequest,
    DescribeMetricFiltersResponse, Destination, MetricFilter, MetricTransformation,
    PutDestinationPolicyRequest, PutDestinationRequest, PutMetricFilterRequest,
};

/// `LogsApi` backed by the AWS SDK. Credentials come from the SDK config the
/// client was built with.
#[derive(Debug, Clone)]
pub struct CloudWatchLogs {
    client: Client,
}

impl CloudWatchLogs {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn remote_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> RemoteError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug + 'static,
{
    let code = err.code().map(str::to_owned);
    let message = err
        .message()
        .map(str::to_owned)
        .unwrap_or_else(|| format_err_chain(&err));
    let remote = RemoteError::from_code(operation, code.as_deref(), message);
    tracing::debug!(operation, code = ?code, error = %remote, "remote call failed");
    remote
}

fn destination_from_sdk(d: &sdk::Destination) -> Destination {
    Destination {
        destination_name: d.destination_name().map(String::from),
        target_arn: d.target_arn().map(String::from),
        role_arn: d.role_arn().map(String::from),
        access_policy: d.access_policy().map(String::from),
        arn: d.arn().map(String::from),
        creation_time: d.creation_time(),
    }
}

fn transformation_from_sdk(t: &sdk::MetricTransformation) -> MetricTransformation {
    MetricTransformation {
        metric_name: t.metric_name().to_string(),
        metric_namespace: t.metric_namespace().to_string(),
        metric_value: t.metric_value().to_string(),
        default_value: t.default_value(),
        unit: t.unit().map(|u| u.as_str().to_string()),
        dimensions: t.dimensions().map(|d| {
            d.iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<BTreeMap<_, _>>()
        }),
    }
}

fn transformation_to_sdk(
    t: &MetricTransformation,
) -> Result<sdk::MetricTransformation, RemoteError> {
    sdk::MetricTransformation::builder()
        .metric_name(&t.metric_name)
        .metric_namespace(&t.metric_namespace)
        .metric_value(&t.metric_value)
        .set_default_value(t.default_value)
        .set_unit(t.unit.as_deref().map(sdk::StandardUnit::from))
        .set_dimensions(t.dimensions.as_ref().map(|d| {
            d.iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<HashMap<_, _>>()
        }))
        .build()
        .map_err(|e| RemoteError::InvalidParameter {
            operation: "PutMetricFilter",
            message: e.to_string(),
        })
}

fn metric_filter_from_sdk(f: &sdk::MetricFilter) -> MetricFilter {
    MetricFilter {
        filter_name: f.filter_name().map(String::from),
        filter_pattern: f.filter_pattern().map(String::from),
        log_group_name: f.log_group_name().map(String::from),
        metric_transformations: f
            .metric_transformations()
            .iter()
            .map(transformation_from_sdk)
            .collect(),
        creation_time: f.creation_time(),
    }
}

impl LogsApi for CloudWatchLogs {
    fn put_destination(
        &self,
        request: PutDestinationRequest,
    ) -> BoxFuture<'_, Result<Destination, RemoteError>> {
        Box::pin(async move {
            let resp = self
                .client
                .put_destination()
                .destination_name(request.destination_name)
                .target_arn(request.target_arn)
                .role_arn(request.role_arn)
                .send()
                .await
                .map_err(|e| remote_error("PutDestination", e))?;

            Ok(resp
                .destination()
                .map(destination_from_sdk)
                .unwrap_or_default())
        })
    }

    fn put_destination_policy(
        &self,
        request: PutDestinationPolicyRequest,
    ) -> BoxFuture<'_, Result<(), RemoteError>> {
        Box::pin(async move {
            self.client
                .put_destination_policy()
                .destination_name(request.destination_name)
                .access_policy(request.access_policy)
                .send()
                .await
                .map_err(|e| remote_error("PutDestinationPolicy", e))?;
            Ok(())
        })
    }

    fn describe_destinations(
        &self,
        request: DescribeDestinationsRequest,
    ) -> BoxFuture<'_, Result<DescribeDestinationsResponse, RemoteError>> {
        Box::pin(async move {
            let resp = self
                .client
                .describe_destinations()
                .set_destination_name_prefix(request.destination_name_prefix)
                .set_next_token(request.next_token)
                .set_limit(request.limit)
                .send()
                .await
                .map_err(|e| remote_error("DescribeDestinations", e))?;

            Ok(DescribeDestinationsResponse {
                destinations: resp.destinations().iter().map(destination_from_sdk).collect(),
                next_token: resp.next_token().map(String::from),
            })
        })
    }

    fn delete_destination(&self, destination_name: &str) -> BoxFuture<'_, Result<(), RemoteError>> {
        let destination_name = destination_name.to_string();
        Box::pin(async move {
            self.client
                .delete_destination()
                .destination_name(destination_name)
                .send()
                .await
                .map_err(|e| remote_error("DeleteDestination", e))?;
            Ok(())
        })
    }

    fn put_metric_filter(
        &self,
        request: PutMetricFilterRequest,
    ) -> BoxFuture<'_, Result<(), RemoteError>> {
        Box::pin(async move {
            let transformations = request
                .metric_transformations
                .iter()
                .map(transformation_to_sdk)
                .collect::<Result<Vec<_>, _>>()?;

            self.client
                .put_metric_filter()
                .log_group_name(request.log_group_name)
                .filter_name(request.filter_name)
                .filter_pattern(request.filter_pattern)
                .set_metric_transformations(Some(transformations))
                .send()
                .await
                .map_err(|e| remote_error("PutMetricFilter", e))?;
            Ok(())
        })
    }

    fn describe_metric_filters(
        &self,
        request: DescribeMetricFiltersRequest,
    ) -> BoxFuture<'_, Result<DescribeMetricFiltersResponse, RemoteError>> {
        Box::pin(async move {
            let resp = self
                .client
                .describe_metric_filters()
                .set_log_group_name(request.log_group_name)
                .set_filter_name_prefix(request.filter_name_prefix)
                .set_next_token(request.next_token)
                .set_limit(request.limit)
                .send()
                .await
                .map_err(|e| remote_error("DescribeMetricFilters", e))?;

            Ok(DescribeMetricFiltersResponse {
                metric_filters: resp.metric_filters().iter().map(metric_filter_from_sdk).collect(),
                next_token: resp.next_token().map(String::from),
            })
        })
    }

    fn delete_metric_filter(
        &self,
        log_group_name: &str,
        filter_name: &str,
    ) -> BoxFuture<'_, Result<(), RemoteError>> {
        let log_group_name = log_group_name.to_string();
        let filter_name = filter_name.to_string();
        Box::pin(async move {
            self.client
                .delete_metric_filter()
                .log_group_name(log_group_name)
                .filter_name(filter_name)
                .send()
                .await
                .map_err(|e| remote_error("DeleteMetricFilter", e))?;
            Ok(())
        })
    }
}
