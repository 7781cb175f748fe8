//! Pure mapping between resource models and CloudWatch Logs request/response
//! shapes. No I/O.

use cwlogs_client::types::{
    DescribeDestinationsRequest, DescribeMetricFiltersRequest, Destination, MetricFilter,
    MetricTransformation as RemoteTransformation, PutDestinationPolicyRequest,
    PutDestinationRequest, PutMetricFilterRequest,
};
use cwlogs_core::{DestinationModel, MetricFilterModel, MetricTransformation, PrimaryIdentifier};

use crate::error::HandlerError;

fn required<'m>(value: &'m Option<String>, field: &str) -> Result<&'m str, HandlerError> {
    value
        .as_deref()
        .ok_or_else(|| HandlerError::InvalidRequest(format!("{field} is required")))
}

// ── destinations ────────────────────────────────────────────────────────────

pub fn destination_put_request(
    model: &DestinationModel,
) -> Result<PutDestinationRequest, HandlerError> {
    Ok(PutDestinationRequest {
        destination_name: required(&model.destination_name, "DestinationName")?.to_string(),
        target_arn: required(&model.target_arn, "TargetArn")?.to_string(),
        role_arn: required(&model.role_arn, "RoleArn")?.to_string(),
    })
}

/// `None` when the model carries no policy. Only valid on create or when the
/// destination has no policy yet, since a policy can't be removed.
pub fn destination_policy_request(model: &DestinationModel) -> Option<PutDestinationPolicyRequest> {
    Some(PutDestinationPolicyRequest {
        destination_name: model.destination_name.clone()?,
        access_policy: model.destination_policy.clone()?,
    })
}

pub fn destination_read_request(
    model: &DestinationModel,
    next_token: Option<String>,
) -> DescribeDestinationsRequest {
    DescribeDestinationsRequest {
        destination_name_prefix: model.destination_name.clone(),
        next_token,
        limit: None,
    }
}

pub fn destination_list_request(
    filter: &DestinationModel,
    next_token: Option<String>,
    page_size: i32,
) -> DescribeDestinationsRequest {
    DescribeDestinationsRequest {
        destination_name_prefix: filter.destination_name.clone(),
        next_token,
        limit: Some(page_size),
    }
}

pub fn destination_from_remote(destination: &Destination) -> DestinationModel {
    DestinationModel {
        destination_name: destination.destination_name.clone(),
        target_arn: destination.target_arn.clone(),
        role_arn: destination.role_arn.clone(),
        destination_policy: destination.access_policy.clone(),
        arn: destination.arn.clone(),
    }
}

/// Pick the destination named exactly `name` out of a prefix listing.
///
/// A prefix listing for `D1` can legitimately return `D10`, so only exact
/// names count. More than one exact match means the listing is inconsistent.
pub fn destination_for_read(
    name: &str,
    destinations: &[Destination],
) -> Result<Option<DestinationModel>, HandlerError> {
    let mut matches = destinations
        .iter()
        .filter(|d| d.destination_name.as_deref() == Some(name));

    let first = matches.next();
    if matches.next().is_some() {
        return Err(HandlerError::RemoteFailure(format!(
            "DescribeDestinations returned more than one destination named {name}"
        )));
    }
    Ok(first.map(destination_from_remote))
}

// ── metric filters ──────────────────────────────────────────────────────────

pub fn transformation_to_remote(t: &MetricTransformation) -> RemoteTransformation {
    RemoteTransformation {
        metric_name: t.metric_name.clone(),
        metric_namespace: t.metric_namespace.clone(),
        metric_value: t.metric_value.clone(),
        default_value: t.default_value,
        unit: t.unit.clone(),
        dimensions: t.dimensions.clone(),
    }
}

pub fn transformation_from_remote(t: &RemoteTransformation) -> MetricTransformation {
    MetricTransformation {
        metric_name: t.metric_name.clone(),
        metric_namespace: t.metric_namespace.clone(),
        metric_value: t.metric_value.clone(),
        default_value: t.default_value,
        unit: t.unit.clone(),
        dimensions: t.dimensions.clone(),
    }
}

pub fn metric_filter_put_request(
    model: &MetricFilterModel,
) -> Result<PutMetricFilterRequest, HandlerError> {
    Ok(PutMetricFilterRequest {
        log_group_name: required(&model.log_group_name, "LogGroupName")?.to_string(),
        filter_name: required(&model.filter_name, "FilterName")?.to_string(),
        filter_pattern: required(&model.filter_pattern, "FilterPattern")?.to_string(),
        metric_transformations: model
            .metric_transformations
            .iter()
            .flatten()
            .map(transformation_to_remote)
            .collect(),
    })
}

pub fn metric_filter_read_request(
    model: &MetricFilterModel,
    next_token: Option<String>,
) -> DescribeMetricFiltersRequest {
    DescribeMetricFiltersRequest {
        log_group_name: model.log_group_name.clone(),
        filter_name_prefix: model.filter_name.clone(),
        next_token,
        limit: None,
    }
}

pub fn metric_filter_list_request(
    filter: &MetricFilterModel,
    next_token: Option<String>,
    page_size: i32,
) -> DescribeMetricFiltersRequest {
    DescribeMetricFiltersRequest {
        log_group_name: filter.log_group_name.clone(),
        filter_name_prefix: filter.filter_name.clone(),
        next_token,
        limit: Some(page_size),
    }
}

pub fn metric_filter_from_remote(filter: &MetricFilter) -> MetricFilterModel {
    let transformations: Vec<MetricTransformation> = filter
        .metric_transformations
        .iter()
        .map(transformation_from_remote)
        .collect();

    MetricFilterModel {
        filter_name: filter.filter_name.clone(),
        log_group_name: filter.log_group_name.clone(),
        filter_pattern: filter.filter_pattern.clone(),
        metric_transformations: (!transformations.is_empty()).then_some(transformations),
    }
}

/// Pick the filter whose identifier is similar to `identifier`.
pub fn metric_filter_for_read(
    identifier: &PrimaryIdentifier,
    filters: &[MetricFilter],
) -> Result<Option<MetricFilterModel>, HandlerError> {
    let mut matches = filters
        .iter()
        .map(metric_filter_from_remote)
        .filter(|m| m.primary_identifier().similar(identifier));

    let first = matches.next();
    if matches.next().is_some() {
        return Err(HandlerError::RemoteFailure(format!(
            "DescribeMetricFilters returned more than one filter for {identifier}"
        )));
    }
    Ok(first)
}
