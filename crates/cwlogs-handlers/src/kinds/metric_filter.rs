use cwlogs_client::{BoxFuture, ClientConfig, LogsApi};
use cwlogs_core::{MetricFilterModel, PrimaryIdentifier};

use crate::error::HandlerError;
use crate::kind::{Page, ResourceKind};
use crate::kinds::{check_length, clamp_page_size};
use crate::translator;

const MAX_LOG_GROUP_NAME_LENGTH: usize = 512;
const MAX_FILTER_PATTERN_LENGTH: usize = 1024;

/// `AWS::Logs::MetricFilter`, scoped to its parent log group.
///
/// The remote `PutMetricFilter` is an upsert; create-only semantics come
/// from the reconciler's existence pre-check.
#[derive(Debug, Clone)]
pub struct MetricFilterKind {
    page_size: i32,
}

impl MetricFilterKind {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            page_size: clamp_page_size(config.page_size),
        }
    }
}

impl Default for MetricFilterKind {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl ResourceKind for MetricFilterKind {
    type Model = MetricFilterModel;

    const TYPE_NAME: &'static str = MetricFilterModel::TYPE_NAME;
    const MAX_NAME_LENGTH: usize = 512;
    const REREAD_AFTER_CREATE: bool = false;

    fn primary_identifier(&self, model: &MetricFilterModel) -> PrimaryIdentifier {
        model.primary_identifier()
    }

    fn name<'m>(&self, model: &'m MetricFilterModel) -> Option<&'m str> {
        model.filter_name.as_deref()
    }

    fn with_name(&self, model: MetricFilterModel, name: String) -> MetricFilterModel {
        MetricFilterModel {
            filter_name: Some(name),
            ..model
        }
    }

    fn validate(&self, model: &MetricFilterModel) -> Result<(), HandlerError> {
        let request = translator::metric_filter_put_request(model)?;
        check_length("FilterName", &request.filter_name, Self::MAX_NAME_LENGTH)?;
        check_length(
            "LogGroupName",
            &request.log_group_name,
            MAX_LOG_GROUP_NAME_LENGTH,
        )?;
        // An empty pattern is valid and matches every event.
        if request.filter_pattern.chars().count() > MAX_FILTER_PATTERN_LENGTH {
            return Err(HandlerError::InvalidRequest(format!(
                "FilterPattern must be at most {MAX_FILTER_PATTERN_LENGTH} characters"
            )));
        }
        if request.metric_transformations.is_empty() {
            return Err(HandlerError::InvalidRequest(
                "MetricTransformations must contain at least one transformation".into(),
            ));
        }
        for t in &request.metric_transformations {
            if t.metric_name.is_empty() || t.metric_namespace.is_empty() || t.metric_value.is_empty()
            {
                return Err(HandlerError::InvalidRequest(
                    "MetricName, MetricNamespace and MetricValue are required".into(),
                ));
            }
        }
        Ok(())
    }

    fn fetch<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a MetricFilterModel,
    ) -> BoxFuture<'a, Result<Option<MetricFilterModel>, HandlerError>> {
        Box::pin(async move {
            if model.filter_name.is_none() || model.log_group_name.is_none() {
                return Ok(None);
            }
            let identifier = model.primary_identifier();

            let mut next_token: Option<String> = None;
            loop {
                let request = translator::metric_filter_read_request(model, next_token.clone());
                let resp = api
                    .describe_metric_filters(request)
                    .await
                    .map_err(|e| HandlerError::from_remote(e, Self::TYPE_NAME, &identifier))?;

                if let Some(found) =
                    translator::metric_filter_for_read(&identifier, &resp.metric_filters)?
                {
                    return Ok(Some(found));
                }
                match resp.next_token {
                    Some(token) if next_token.as_deref() != Some(token.as_str()) => {
                        next_token = Some(token);
                    }
                    _ => return Ok(None),
                }
            }
        })
    }

    fn put<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a MetricFilterModel,
    ) -> BoxFuture<'a, Result<(), HandlerError>> {
        Box::pin(async move {
            let identifier = model.primary_identifier();
            let request = translator::metric_filter_put_request(model)?;

            api.put_metric_filter(request)
                .await
                .map_err(|e| HandlerError::from_remote(e, Self::TYPE_NAME, &identifier))?;
            tracing::debug!(identifier = %identifier, "metric filter put");
            Ok(())
        })
    }

    fn remove<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        model: &'a MetricFilterModel,
    ) -> BoxFuture<'a, Result<(), HandlerError>> {
        Box::pin(async move {
            let identifier = model.primary_identifier();
            let (Some(group), Some(name)) =
                (model.log_group_name.as_deref(), model.filter_name.as_deref())
            else {
                return Err(HandlerError::InvalidRequest(
                    "LogGroupName and FilterName are required".into(),
                ));
            };

            api.delete_metric_filter(group, name)
                .await
                .map_err(|e| HandlerError::from_remote(e, Self::TYPE_NAME, &identifier))
        })
    }

    fn list_page<'a>(
        &'a self,
        api: &'a dyn LogsApi,
        filter: &'a MetricFilterModel,
        next_token: Option<String>,
    ) -> BoxFuture<'a, Result<Page<MetricFilterModel>, HandlerError>> {
        Box::pin(async move {
            // The service only accepts a name prefix within a log group.
            if filter.filter_name.is_some() && filter.log_group_name.is_none() {
                return Err(HandlerError::InvalidRequest(
                    "LogGroupName is required when listing by FilterName prefix".into(),
                ));
            }

            let request = translator::metric_filter_list_request(filter, next_token, self.page_size);
            let resp = api
                .describe_metric_filters(request)
                .await
                .map_err(|e| {
                    HandlerError::from_remote(e, Self::TYPE_NAME, &filter.primary_identifier())
                })?;

            Ok(Page {
                models: resp
                    .metric_filters
                    .iter()
                    .map(translator::metric_filter_from_remote)
                    .collect(),
                next_token: resp.next_token,
            })
        })
    }
}
