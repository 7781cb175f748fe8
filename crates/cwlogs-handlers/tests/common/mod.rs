//! In-memory CloudWatch Logs control plane for handler tests.
//!
//! Behaves like the service where the handlers care: puts are upserts,
//! describes filter by prefix and paginate with opaque tokens, and missing
//! records raise `ResourceNotFoundException`. Every call is recorded so tests
//! can assert that no mutation was issued.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Mutex;

use cwlogs_client::types::{
    DescribeDestinationsRequest, DescribeDestinationsResponse, DescribeMetricFiltersRequest,
    DescribeMetricFiltersResponse, Destination, MetricFilter, PutDestinationPolicyRequest,
    PutDestinationRequest, PutMetricFilterRequest,
};
use cwlogs_client::{BoxFuture, LogsApi, RemoteError};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct FakeState {
    destinations: BTreeMap<String, Destination>,
    log_groups: BTreeSet<String>,
    filters: BTreeMap<(String, String), MetricFilter>,
    calls: Vec<&'static str>,
    /// operation -> (error code, message), consumed on first use
    failures: HashMap<&'static str, (String, String)>,
    page_limit: Option<usize>,
    next_creation_time: i64,
    /// puts succeed but leave no record behind
    lose_writes: bool,
}

#[derive(Default)]
pub struct FakeLogs {
    state: Mutex<FakeState>,
}

const DEFAULT_LIMIT: usize = 50;

fn not_found(operation: &'static str, message: &str) -> RemoteError {
    RemoteError::from_code(
        operation,
        Some("ResourceNotFoundException"),
        message.to_string(),
    )
}

/// Slice `items` starting at the offset encoded in `token`.
fn paginate<T: Clone>(
    items: Vec<T>,
    token: Option<&str>,
    limit: usize,
) -> Result<(Vec<T>, Option<String>), String> {
    let start = match token {
        Some(t) => t
            .strip_prefix("offset-")
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(|| format!("invalid next token: {t}"))?,
        None => 0,
    };
    let end = (start + limit).min(items.len());
    let page = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();
    let next = (end < items.len()).then(|| format!("offset-{end}"));
    Ok((page, next))
}

impl FakeLogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_group(self, name: &str) -> Self {
        self.state.lock().unwrap().log_groups.insert(name.to_string());
        self
    }

    /// Cap every page at `limit` records regardless of the requested limit.
    pub fn with_page_limit(self, limit: usize) -> Self {
        self.state.lock().unwrap().page_limit = Some(limit);
        self
    }

    pub fn seed_destination(&self, destination: Destination) {
        let name = destination.destination_name.clone().expect("seeded destination needs a name");
        self.state.lock().unwrap().destinations.insert(name, destination);
    }

    pub fn seed_metric_filter(&self, filter: MetricFilter) {
        let group = filter.log_group_name.clone().expect("seeded filter needs a log group");
        let name = filter.filter_name.clone().expect("seeded filter needs a name");
        let mut state = self.state.lock().unwrap();
        state.log_groups.insert(group.clone());
        state.filters.insert((group, name), filter);
    }

    /// Make the next call to `operation` fail with `code`.
    pub fn fail_next(&self, operation: &'static str, code: &str, message: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(operation, (code.to_string(), message.to_string()));
    }

    /// Acknowledge every later put without keeping it, as if the write never
    /// became visible. A record the put targets is dropped.
    pub fn lose_writes(&self) {
        self.state.lock().unwrap().lose_writes = true;
    }

    pub fn destination(&self, name: &str) -> Option<Destination> {
        self.state.lock().unwrap().destinations.get(name).cloned()
    }

    pub fn metric_filter(&self, group: &str, name: &str) -> Option<MetricFilter> {
        self.state
            .lock()
            .unwrap()
            .filters
            .get(&(group.to_string(), name.to_string()))
            .cloned()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Recorded calls that write to the service.
    pub fn mutations(&self) -> Vec<&'static str> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("Put") || c.starts_with("Delete"))
            .collect()
    }

    fn begin(&self, operation: &'static str) -> Result<std::sync::MutexGuard<'_, FakeState>, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(operation);
        if let Some((code, message)) = state.failures.remove(operation) {
            return Err(RemoteError::from_code(operation, Some(&code), message));
        }
        Ok(state)
    }

    fn limit(state: &FakeState, requested: Option<i32>) -> usize {
        let requested = requested
            .and_then(|l| usize::try_from(l).ok())
            .unwrap_or(DEFAULT_LIMIT);
        state.page_limit.map_or(requested, |cap| cap.min(requested))
    }
}

impl LogsApi for FakeLogs {
    fn put_destination(
        &self,
        request: PutDestinationRequest,
    ) -> BoxFuture<'_, Result<Destination, RemoteError>> {
        Box::pin(async move {
            let mut state = self.begin("PutDestination")?;
            if state.lose_writes {
                state.destinations.remove(&request.destination_name);
                return Ok(Destination {
                    destination_name: Some(request.destination_name),
                    target_arn: Some(request.target_arn),
                    role_arn: Some(request.role_arn),
                    ..Default::default()
                });
            }
            state.next_creation_time += 1;
            let creation_time = state.next_creation_time;
            let name = request.destination_name.clone();
            let entry = state
                .destinations
                .entry(name.clone())
                .or_insert_with(|| Destination {
                    destination_name: Some(name.clone()),
                    arn: Some(format!(
                        "arn:aws:logs:us-east-1:123456789012:destination:{name}"
                    )),
                    creation_time: Some(creation_time),
                    ..Default::default()
                });
            entry.target_arn = Some(request.target_arn);
            entry.role_arn = Some(request.role_arn);
            Ok(entry.clone())
        })
    }

    fn put_destination_policy(
        &self,
        request: PutDestinationPolicyRequest,
    ) -> BoxFuture<'_, Result<(), RemoteError>> {
        Box::pin(async move {
            let mut state = self.begin("PutDestinationPolicy")?;
            if state.lose_writes {
                return Ok(());
            }
            let destination = state
                .destinations
                .get_mut(&request.destination_name)
                .ok_or_else(|| not_found("PutDestinationPolicy", "destination does not exist"))?;
            destination.access_policy = Some(request.access_policy);
            Ok(())
        })
    }

    fn describe_destinations(
        &self,
        request: DescribeDestinationsRequest,
    ) -> BoxFuture<'_, Result<DescribeDestinationsResponse, RemoteError>> {
        Box::pin(async move {
            let state = self.begin("DescribeDestinations")?;
            let prefix = request.destination_name_prefix.unwrap_or_default();
            let matching: Vec<Destination> = state
                .destinations
                .iter()
                .filter(|(name, _)| name.starts_with(&prefix))
                .map(|(_, d)| d.clone())
                .collect();

            let limit = Self::limit(&state, request.limit);
            let (destinations, next_token) =
                paginate(matching, request.next_token.as_deref(), limit).map_err(|m| {
                    RemoteError::from_code("DescribeDestinations", Some("InvalidParameterException"), m)
                })?;
            Ok(DescribeDestinationsResponse {
                destinations,
                next_token,
            })
        })
    }

    fn delete_destination(&self, destination_name: &str) -> BoxFuture<'_, Result<(), RemoteError>> {
        let destination_name = destination_name.to_string();
        Box::pin(async move {
            let mut state = self.begin("DeleteDestination")?;
            state
                .destinations
                .remove(&destination_name)
                .map(|_| ())
                .ok_or_else(|| not_found("DeleteDestination", "destination does not exist"))
        })
    }

    fn put_metric_filter(
        &self,
        request: PutMetricFilterRequest,
    ) -> BoxFuture<'_, Result<(), RemoteError>> {
        Box::pin(async move {
            let mut state = self.begin("PutMetricFilter")?;
            if state.lose_writes {
                state
                    .filters
                    .remove(&(request.log_group_name, request.filter_name));
                return Ok(());
            }
            if !state.log_groups.contains(&request.log_group_name) {
                return Err(not_found(
                    "PutMetricFilter",
                    "The specified log group does not exist.",
                ));
            }
            state.next_creation_time += 1;
            let creation_time = state.next_creation_time;
            let key = (request.log_group_name.clone(), request.filter_name.clone());
            let creation_time = state
                .filters
                .get(&key)
                .and_then(|f| f.creation_time)
                .unwrap_or(creation_time);
            state.filters.insert(
                key,
                MetricFilter {
                    filter_name: Some(request.filter_name),
                    filter_pattern: Some(request.filter_pattern),
                    log_group_name: Some(request.log_group_name),
                    metric_transformations: request.metric_transformations,
                    creation_time: Some(creation_time),
                },
            );
            Ok(())
        })
    }

    fn describe_metric_filters(
        &self,
        request: DescribeMetricFiltersRequest,
    ) -> BoxFuture<'_, Result<DescribeMetricFiltersResponse, RemoteError>> {
        Box::pin(async move {
            let state = self.begin("DescribeMetricFilters")?;
            if request.filter_name_prefix.is_some() && request.log_group_name.is_none() {
                return Err(RemoteError::from_code(
                    "DescribeMetricFilters",
                    Some("InvalidParameterException"),
                    "filterNamePrefix requires logGroupName".into(),
                ));
            }
            if let Some(group) = &request.log_group_name {
                if !state.log_groups.contains(group) {
                    return Err(not_found(
                        "DescribeMetricFilters",
                        "The specified log group does not exist.",
                    ));
                }
            }

            let prefix = request.filter_name_prefix.unwrap_or_default();
            let matching: Vec<MetricFilter> = state
                .filters
                .iter()
                .filter(|((group, name), _)| {
                    request.log_group_name.as_ref().is_none_or(|g| g == group)
                        && name.starts_with(&prefix)
                })
                .map(|(_, f)| f.clone())
                .collect();

            let limit = Self::limit(&state, request.limit);
            let (metric_filters, next_token) =
                paginate(matching, request.next_token.as_deref(), limit).map_err(|m| {
                    RemoteError::from_code("DescribeMetricFilters", Some("InvalidParameterException"), m)
                })?;
            Ok(DescribeMetricFiltersResponse {
                metric_filters,
                next_token,
            })
        })
    }

    fn delete_metric_filter(
        &self,
        log_group_name: &str,
        filter_name: &str,
    ) -> BoxFuture<'_, Result<(), RemoteError>> {
        let key = (log_group_name.to_string(), filter_name.to_string());
        Box::pin(async move {
            let mut state = self.begin("DeleteMetricFilter")?;
            state
                .filters
                .remove(&key)
                .map(|_| ())
                .ok_or_else(|| not_found("DeleteMetricFilter", "The specified resource does not exist."))
        })
    }
}
